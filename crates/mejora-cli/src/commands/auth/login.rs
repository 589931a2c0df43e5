use anyhow::Context;
use mejora_auth::Session;
use mejora_views::validation::validate_institutional_email;
use mejora_views::{Notification, navigation_for};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    display_name: String,
    initials: String,
    role: String,
    landing: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let domain = &ctx.config.general.institutional_domain;
    if let Err(error) = validate_institutional_email(&args.email, domain) {
        ui::notify(&Notification::error(error.to_string()));
        return Ok(());
    }

    let login = match ctx.client.login(args.email.trim(), &args.password).await {
        Ok(login) => login,
        Err(error) => {
            tracing::debug!(%error, "login rejected");
            ui::notify(&Notification::error(error.user_message()));
            return Ok(());
        }
    };

    let session = Session::new(login.token, login.user);
    ctx.sessions
        .save(&session)
        .context("failed to persist session")?;

    ui::notify(&Notification::success(format!(
        "welcome, {}",
        session.display_name()
    )));
    output(
        &AuthLoginResponse {
            authenticated: true,
            display_name: session.display_name(),
            initials: session.initials(),
            role: session.user.role.clone(),
            landing: navigation_for(&session.user.role)
                .into_iter()
                .next()
                .map(|item| item.target_path),
        },
        flags.format,
    )
}
