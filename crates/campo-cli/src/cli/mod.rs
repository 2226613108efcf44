use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `campo` binary.
#[derive(Debug, Parser)]
#[command(name = "campo", version, about = "Campo - cattle lot, weighing and finance records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return from list commands
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Act as this user id (overrides `auth.user_id` from config)
    #[arg(short, long, global = true)]
    pub user: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            user: self.user.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{LotCommands, ReportCommands, SaleCommands, TaskCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "campo", "--format", "table", "--limit", "10", "--verbose", "lot", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Lot {
                action: LotCommands::List { all: false }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["campo", "task", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Task { action: TaskCommands::List { .. } }));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["campo", "--format", "xml", "lot", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_user() {
        let cli = Cli::try_parse_from(["campo", "--user", "fazenda-1", "lot", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.user.as_deref(), Some("fazenda-1"));
    }

    #[test]
    fn sale_create_defaults_unit_and_costs() {
        let cli = Cli::try_parse_from([
            "campo", "sale", "create", "--lot", "lot-1", "--date", "2026-06-01", "--heads",
            "10", "--weight", "4500", "--price", "310",
        ])
        .expect("cli should parse");

        let Commands::Sale {
            action: SaleCommands::Create(args),
        } = cli.command
        else {
            panic!("expected sale create");
        };
        assert_eq!(args.unit, "arroba");
        assert!(args.costs.abs() < f64::EPSILON);
        assert_eq!(args.buyer, None);
    }

    #[test]
    fn lot_update_capacity_flags_conflict() {
        let parsed = Cli::try_parse_from([
            "campo", "lot", "update", "lot-1", "--capacity", "30", "--clear-capacity",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn report_range_flags() {
        let cli = Cli::try_parse_from([
            "campo", "report", "expenses", "--from", "2026-01-01", "--to", "2026-03-31",
        ])
        .expect("cli should parse");
        let Commands::Report {
            action: ReportCommands::Expenses(range),
        } = cli.command
        else {
            panic!("expected report expenses");
        };
        assert_eq!(range.from.as_deref(), Some("2026-01-01"));
        assert_eq!(range.to.as_deref(), Some("2026-03-31"));
    }

    #[test]
    fn serve_accepts_bind_override() {
        let cli = Cli::try_parse_from(["campo", "serve", "--bind", "0.0.0.0:8080"])
            .expect("cli should parse");
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind.as_deref(), Some("0.0.0.0:8080"));
    }
}
