use mejora_views::dashboard::DashboardSection;
use mejora_views::{Notification, ViewId, dashboard_for, load_dashboard};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

#[derive(Serialize)]
struct DashboardResponse {
    view: Option<ViewId>,
    sections: Vec<DashboardSection>,
}

/// Handle `mejora dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session();
    let Some(view) = dashboard_for(session.as_ref().and_then(mejora_auth::Session::role)) else {
        let message = match &session {
            Some(session) => format!("no dashboard for role '{}'", session.user.role),
            None => "not logged in; run `mejora auth login`".to_string(),
        };
        ui::notify(&Notification::info(message));
        return output(
            &DashboardResponse {
                view: None,
                sections: Vec::new(),
            },
            flags.format,
        );
    };

    let token = session.map(|session| session.token);
    let loaded = load_dashboard(&ctx.client, view, token.as_deref()).await;
    for notification in &loaded.notifications {
        ui::notify(notification);
    }

    output(
        &DashboardResponse {
            view: Some(loaded.view),
            sections: loaded.sections,
        },
        flags.format,
    )
}
