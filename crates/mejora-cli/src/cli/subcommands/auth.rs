use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with institutional credentials.
    Login(AuthLoginArgs),
    /// Clear the stored session.
    Logout,
    /// Show the current session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Institutional email address.
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}
