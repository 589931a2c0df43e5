use clap::{Args, Subcommand};

use crate::cli::root_commands::ListArgs;

#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List user accounts.
    List(UserListArgs),
    /// Create a user account. The form is validated before sending.
    Create(UserCreateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct UserListArgs {
    #[command(flatten)]
    pub list: ListArgs,
    /// Director, Docente, Decano or Administrador.
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub faculty: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UserCreateArgs {
    #[arg(long)]
    pub nombre: String,
    #[arg(long)]
    pub apellido: String,
    /// Institutional email address.
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub role: String,
    #[arg(long)]
    pub facultad: Option<String>,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub password_confirmation: String,
}
