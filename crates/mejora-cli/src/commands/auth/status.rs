use mejora_auth::Session;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, PartialEq, Eq, Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    display_name: Option<String>,
    initials: Option<String>,
    email: Option<String>,
    role: Option<String>,
    role_recognized: bool,
    token_source: Option<&'static str>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = describe(ctx.session().as_ref(), ctx.sessions.token_source());
    output(&status, flags.format)
}

fn describe(session: Option<&Session>, token_source: Option<&'static str>) -> AuthStatusResponse {
    match session {
        Some(session) => AuthStatusResponse {
            authenticated: true,
            display_name: Some(session.display_name()),
            initials: Some(session.initials()),
            email: Some(session.user.email.clone()),
            role: Some(session.user.role.clone()),
            role_recognized: session.role().is_some(),
            token_source,
        },
        None => AuthStatusResponse {
            authenticated: false,
            display_name: None,
            initials: None,
            email: None,
            role: None,
            role_recognized: false,
            token_source: None,
        },
    }
}
