use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, PlanCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Navigation menu for the current session's role.
    Nav,
    /// Load the role's dashboard.
    Dashboard,
    /// Browse the audit log.
    Audit(AuditArgs),
    /// User accounts.
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Improvement plans.
    Plans {
        #[command(subcommand)]
        action: PlanCommands,
    },
    /// Faculties.
    Faculties(FacultiesArgs),
}

/// Filters shared by every list command.
#[derive(Clone, Debug, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive text search.
    #[arg(long)]
    pub search: Option<String>,
    /// Zero-based page index.
    #[arg(long, default_value_t = 0)]
    pub page: i64,
    /// Rows per page.
    #[arg(long)]
    pub page_size: Option<u32>,
    /// Write the filtered rows to CSV. Without a value, uses the configured export dir.
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub export: Option<String>,
}

/// Arguments for `mejora audit`.
#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    #[command(flatten)]
    pub list: ListArgs,
    /// Entity type (plan, user, faculty, ...).
    #[arg(long)]
    pub entity: Option<String>,
    /// Action (create, update, delete, login, ...).
    #[arg(long)]
    pub action: Option<String>,
    /// Acting user's email.
    #[arg(long)]
    pub user: Option<String>,
    /// First day included (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<String>,
    /// Last day included (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for `mejora faculties`.
#[derive(Clone, Debug, Args)]
pub struct FacultiesArgs {
    #[command(flatten)]
    pub list: ListArgs,
}
