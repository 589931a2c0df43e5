use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Nav => commands::nav::handle(ctx, flags),
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Audit(args) => commands::audit::handle(&args, ctx, flags).await,
        Commands::Users { action } => commands::users::handle(&action, ctx, flags).await,
        Commands::Plans { action } => commands::plans::handle(&action, ctx, flags).await,
        Commands::Faculties(args) => commands::faculties::handle(&args, ctx, flags).await,
    }
}
