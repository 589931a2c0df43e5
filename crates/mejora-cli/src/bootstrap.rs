use anyhow::Context;
use mejora_config::MejoraConfig;

/// Load `.env`, then the layered configuration.
///
/// A bad config file or an unusable API URL is fatal; everything after this
/// point reports remote problems as notifications instead.
pub fn load_config() -> anyhow::Result<MejoraConfig> {
    let config = MejoraConfig::load_with_dotenv().context("failed to load mejora configuration")?;
    warn_unconfigured(&config, std::env::vars());
    Ok(config)
}

fn warn_unconfigured<I>(config: &MejoraConfig, env: I)
where
    I: IntoIterator<Item = (String, String)>,
{
    for warning in collect_warnings(config, env) {
        tracing::warn!("{warning}");
    }
}

fn collect_warnings<I>(config: &MejoraConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    let single_underscore = ["MEJORA_API_", "MEJORA_SESSION_", "MEJORA_GENERAL_"];
    for prefix in single_underscore {
        let nested = format!("{prefix}_");
        if keys
            .iter()
            .any(|key| key.starts_with(prefix) && !key.starts_with(&nested))
        {
            warnings.push(format!(
                "{prefix}* env vars are ignored. Use double underscores (example: MEJORA_API__BASE_URL)."
            ));
        }
    }

    if config.session.resolved_dir().is_none() {
        warnings.push("no home directory found; sessions will not persist".to_string());
    }

    warnings
}
