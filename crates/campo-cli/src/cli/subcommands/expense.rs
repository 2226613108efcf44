use clap::{Args, Subcommand};

/// Expense commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense.
    Create(ExpenseCreateArgs),
    /// List expenses, newest first.
    List {
        #[arg(long)]
        lot: Option<String>,
    },
    /// Get an expense by ID.
    Get { id: String },
    /// Update expense fields.
    Update(ExpenseUpdateArgs),
    /// Delete an expense.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct ExpenseCreateArgs {
    /// feed, health, labor, maintenance, fuel, animal_purchase, other
    #[arg(long)]
    pub category: String,
    /// Amount in BRL
    #[arg(long)]
    pub amount: f64,
    #[arg(long)]
    pub date: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub lot: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ExpenseUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub amount: Option<f64>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, conflicts_with = "clear_lot")]
    pub lot: Option<String>,
    #[arg(long)]
    pub clear_lot: bool,
}
