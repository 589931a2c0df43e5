use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `mejora` binary.
#[derive(Debug, Parser)]
#[command(name = "mejora", version, about = "Planes de Mejora - improvement plan client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Rows per page when a command has no --page-size
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (only errors on stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AuthCommands, PlanCommands, UserCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["mejora", "--format", "table", "--limit", "5", "nav"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(5));
        assert!(matches!(cli.command, Commands::Nav));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["mejora", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["mejora", "--format", "xml", "nav"]).is_err());
    }

    #[test]
    fn audit_filters_parse() {
        let cli = Cli::try_parse_from([
            "mejora", "audit", "--search", "plan", "--entity", "plan", "--from", "2026-03-01",
            "--page", "2", "--export",
        ])
        .expect("cli should parse");

        let Commands::Audit(args) = cli.command else {
            panic!("expected audit");
        };
        assert_eq!(args.list.search.as_deref(), Some("plan"));
        assert_eq!(args.entity.as_deref(), Some("plan"));
        assert_eq!(args.from.as_deref(), Some("2026-03-01"));
        assert_eq!(args.list.page, 2);
        assert_eq!(args.list.export.as_deref(), Some(""), "bare --export uses the configured dir");
    }

    #[test]
    fn export_accepts_a_directory() {
        let cli = Cli::try_parse_from(["mejora", "faculties", "--export", "/tmp/out"])
            .expect("cli should parse");
        let Commands::Faculties(args) = cli.command else {
            panic!("expected faculties");
        };
        assert_eq!(args.list.export.as_deref(), Some("/tmp/out"));
    }

    #[test]
    fn reject_requires_a_comment() {
        assert!(Cli::try_parse_from(["mejora", "plans", "reject", "12"]).is_err());

        let cli = Cli::try_parse_from([
            "mejora",
            "plans",
            "reject",
            "12",
            "--comment",
            "Falta cronograma",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Plans { action: PlanCommands::Reject { id: 12, .. } }
        ));
    }

    #[test]
    fn approve_comment_is_optional() {
        let cli =
            Cli::try_parse_from(["mejora", "plans", "approve", "7"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Plans { action: PlanCommands::Approve { id: 7, comment: None } }
        ));
    }

    #[test]
    fn auth_and_users_subcommands_parse() {
        let cli = Cli::try_parse_from([
            "mejora",
            "auth",
            "login",
            "--email",
            "ana@universidad.edu.ec",
            "--password",
            "secreta123",
        ])
        .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Auth { action: AuthCommands::Login(_) }));

        let cli = Cli::try_parse_from(["mejora", "users", "list", "--role", "Docente"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Users { action: UserCommands::List(_) }));
    }
}
