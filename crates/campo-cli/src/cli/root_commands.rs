use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ExpenseCommands, LotCommands, ReportCommands, SaleCommands, TaskCommands, WeighingCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Cattle lots.
    Lot {
        #[command(subcommand)]
        action: LotCommands,
    },
    /// Animal weighings.
    Weighing {
        #[command(subcommand)]
        action: WeighingCommands,
    },
    /// Expenses.
    Expense {
        #[command(subcommand)]
        action: ExpenseCommands,
    },
    /// Sales.
    Sale {
        #[command(subcommand)]
        action: SaleCommands,
    },
    /// Farm tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Aggregated reports.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Run the geocode/satellite HTTP proxy.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Socket address to bind (overrides `server.bind_addr`)
    #[arg(long)]
    pub bind: Option<String>,
}
