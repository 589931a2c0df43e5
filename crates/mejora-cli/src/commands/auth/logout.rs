use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    redirect: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let redirect = ctx.sessions.clear(true);
    output(
        &AuthLogoutResponse {
            cleared: true,
            redirect,
        },
        flags.format,
    )
}
