use mejora_client::ApiError;
use mejora_views::Notification;

use crate::context::AppContext;
use crate::ui;

/// Surface a failed request. A 401 also drops the stored session, since the
/// server no longer accepts its token.
pub fn report(error: &ApiError, ctx: &AppContext) {
    tracing::debug!(%error, "request failed");
    ui::notify(&Notification::error(error.user_message()));
    if error.is_unauthorized() {
        ctx.sessions.clear(false);
        ui::notify(&Notification::info("session expired; run `mejora auth login`"));
    }
}
