use clap::{Args, Subcommand};

use crate::cli::root_commands::ListArgs;

#[derive(Clone, Debug, Subcommand)]
pub enum PlanCommands {
    /// List improvement plans.
    List(PlanListArgs),
    /// Approve a submitted plan.
    Approve {
        id: i64,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Reject a submitted plan. A comment is required.
    Reject {
        id: i64,
        #[arg(long)]
        comment: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct PlanListArgs {
    #[command(flatten)]
    pub list: ListArgs,
    /// borrador, enviado, aprobado, rechazado, en_progreso, completado
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub faculty: Option<String>,
}
