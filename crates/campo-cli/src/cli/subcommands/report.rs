use clap::{Args, Subcommand};

/// Report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Herd snapshot: lots, heads, occupancy, average weight.
    Herd(RangeArgs),
    /// Per-animal gain and GMD between first and last weighing.
    Weighings(RangeArgs),
    /// Per-lot expenses, revenue, profit and margin.
    Lots(RangeArgs),
    /// Expense totals by category and month.
    Expenses(RangeArgs),
}

/// Optional inclusive date range.
#[derive(Clone, Debug, Default, Args)]
pub struct RangeArgs {
    #[arg(long)]
    pub from: Option<String>,
    #[arg(long)]
    pub to: Option<String>,
}
