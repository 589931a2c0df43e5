use mejora_views::{NavigationItem, navigation_for};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct NavResponse {
    role: Option<String>,
    items: Vec<NavigationItem>,
}

/// Handle `mejora nav`. Logged out or unknown roles get an empty menu.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = ctx.session().map(|session| session.user.role);
    let items = role.as_deref().map(navigation_for).unwrap_or_default();
    output(&NavResponse { role, items }, flags.format)
}
