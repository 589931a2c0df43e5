use mejora_core::entities::AuditLog;
use mejora_core::enums::{AuditAction, EntityKind, ResourceKind};
use mejora_views::list::Column;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuditArgs;
use crate::commands::shared::listing::{self, ListCommand};
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;

/// Handle `mejora audit`.
pub async fn handle(args: &AuditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let from = parse_date(args.from.as_deref(), "from")?;
    let to = parse_date(args.to.as_deref(), "to")?;
    if let (Some(from), Some(to)) = (from, to) {
        anyhow::ensure!(from <= to, "--from {from} is after --to {to}");
    }

    let command = ListCommand {
        kind: ResourceKind::AuditLogs,
        export_prefix: "auditoria",
        columns: columns(),
    };
    listing::run::<AuditLog>(
        command,
        &args.list,
        |filters| {
            if let Some(entity) = &args.entity {
                filters.set_category("entity", entity_tag(entity));
            }
            if let Some(action) = &args.action {
                filters.set_category("action", action_tag(action));
            }
            if let Some(user) = &args.user {
                filters.set_category("user_email", user.trim());
            }
            filters.set_date_range(from, to);
        },
        ctx,
        flags,
    )
    .await
}

/// Known tags in their canonical spelling, anything else as typed.
fn entity_tag(raw: &str) -> String {
    match EntityKind::from_tag(raw) {
        EntityKind::Other => raw.trim().to_string(),
        kind => kind.as_str().to_string(),
    }
}

fn action_tag(raw: &str) -> String {
    match AuditAction::from_tag(raw) {
        AuditAction::Other => raw.trim().to_string(),
        action => action.as_str().to_string(),
    }
}

fn columns() -> Vec<Column<AuditLog>> {
    vec![
        Column::new("Fecha", |log: &AuditLog| {
            log.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
        }),
        Column::new("Usuario", |log: &AuditLog| log.user_email.clone().unwrap_or_default()),
        Column::new("Acción", |log: &AuditLog| log.action.clone()),
        Column::new("Entidad", |log: &AuditLog| log.entity.clone()),
        Column::new("ID Entidad", |log: &AuditLog| {
            log.entity_id.map(|id| id.to_string()).unwrap_or_default()
        }),
        Column::new("Descripción", |log: &AuditLog| log.description.clone()),
        Column::new("IP", |log: &AuditLog| log.ip_address.clone().unwrap_or_default()),
    ]
}
