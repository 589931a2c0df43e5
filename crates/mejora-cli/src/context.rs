use anyhow::Context;
use mejora_auth::{AuthError, Session, SessionStore};
use mejora_client::ApiClient;
use mejora_config::MejoraConfig;

/// Everything a command handler needs: configuration, the API client, and
/// the session accessor.
pub struct AppContext {
    pub config: MejoraConfig,
    pub client: ApiClient,
    pub sessions: SessionStore,
}

impl AppContext {
    pub fn init(config: MejoraConfig) -> anyhow::Result<Self> {
        let client = ApiClient::from_config(&config.api).context("failed to build API client")?;
        let sessions =
            SessionStore::from_dir(config.session.resolved_dir()).with_env_override(true);
        tracing::debug!(base_url = client.base_url(), "context ready");
        Ok(Self {
            config,
            client,
            sessions,
        })
    }

    pub fn session(&self) -> Option<Session> {
        self.sessions.load()
    }

    /// Bearer token of the stored session, if any.
    pub fn token(&self) -> Option<String> {
        self.session().map(|session| session.token)
    }

    /// Token for commands that change server state.
    pub fn require_token(&self) -> Result<String, AuthError> {
        self.token().ok_or(AuthError::NotAuthenticated)
    }
}
