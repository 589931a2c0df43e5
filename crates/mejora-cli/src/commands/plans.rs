use mejora_client::QueryParams;
use mejora_core::entities::Plan;
use mejora_core::enums::{Decision, PlanStatus, ResourceKind};
use mejora_views::Notification;
use mejora_views::list::Column;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlanCommands;
use crate::cli::subcommands::plans::PlanListArgs;
use crate::commands::shared::listing::{self, ListCommand};
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::remote;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

/// Handle `mejora plans <subcommand>`.
pub async fn handle(
    action: &PlanCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PlanCommands::List(args) => list(args, ctx, flags).await,
        PlanCommands::Approve { id, comment } => {
            decide(*id, Decision::Approve, comment.as_deref(), ctx, flags).await
        }
        PlanCommands::Reject { id, comment } => {
            anyhow::ensure!(!comment.trim().is_empty(), "a rejection needs a non-empty --comment");
            decide(*id, Decision::Reject, Some(comment.as_str()), ctx, flags).await
        }
    }
}

async fn list(args: &PlanListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = args
        .status
        .as_deref()
        .map(|raw| parse_enum::<PlanStatus>(raw, "status"))
        .transpose()?;

    let command = ListCommand {
        kind: ResourceKind::Plans,
        export_prefix: "planes",
        columns: columns(),
    };
    listing::run::<Plan>(
        command,
        &args.list,
        |filters| {
            if let Some(status) = status {
                filters.set_category("status", status.as_str());
            }
            if let Some(faculty) = &args.faculty {
                filters.set_category("faculty", faculty.trim());
            }
        },
        ctx,
        flags,
    )
    .await
}

async fn decide(
    id: i64,
    decision: Decision,
    comment: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let token = match ctx.require_token() {
        Ok(token) => token,
        Err(error) => {
            ui::notify(&Notification::error(error.to_string()));
            return Ok(());
        }
    };

    match current_status(id, ctx, &token).await {
        Some(status) => {
            if let Err(error) = status.transition_to(decision.target_status()) {
                ui::notify(&Notification::error(format!("plan {id}: {error}")));
                return Ok(());
            }
        }
        None => tracing::debug!(id, "plan not in listing; leaving the check to the server"),
    }

    match ctx.client.decide_plan(id, decision, comment, Some(&token)).await {
        Ok(plan) => {
            ui::notify(&Notification::success(format!("plan {id} {}", plan.status)));
            output(&plan, flags.format)
        }
        Err(error) => {
            remote::report(&error, ctx);
            Ok(())
        }
    }
}

/// Status of `id` as the server lists it. A failed lookup is not an error.
async fn current_status(id: i64, ctx: &AppContext, token: &str) -> Option<PlanStatus> {
    match ctx.client.list_plans(&QueryParams::new(), Some(token)).await {
        Ok(plans) => plans.into_iter().find(|plan| plan.id == id).map(|plan| plan.status),
        Err(error) => {
            tracing::debug!(%error, "plan status lookup failed");
            None
        }
    }
}

fn columns() -> Vec<Column<Plan>> {
    vec![
        Column::new("ID", |plan: &Plan| plan.id.to_string()),
        Column::new("Título", |plan: &Plan| plan.title.clone()),
        Column::new("Estado", |plan: &Plan| plan.status.to_string()),
        Column::new("Responsable", |plan: &Plan| plan.owner_name.clone().unwrap_or_default()),
        Column::new("Facultad", |plan: &Plan| plan.faculty.clone().unwrap_or_default()),
        Column::new("Creado", |plan: &Plan| plan.created_at.format("%Y-%m-%d").to_string()),
        Column::new("Observación", |plan: &Plan| plan.review_comment.clone().unwrap_or_default()),
    ]
}
