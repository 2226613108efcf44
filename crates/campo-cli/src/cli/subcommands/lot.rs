use clap::{Args, Subcommand};

/// Lot commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LotCommands {
    /// Register a lot.
    Create(LotCreateArgs),
    /// List lots (archived lots only with --all).
    List {
        #[arg(long)]
        all: bool,
    },
    /// Get a lot by ID.
    Get { id: String },
    /// Update lot fields.
    Update(LotUpdateArgs),
    /// Close an active lot.
    Close { id: String },
    /// Reopen a closed lot.
    Reopen { id: String },
    /// Archive a lot. Lots are never hard-deleted.
    Archive { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct LotCreateArgs {
    #[arg(long)]
    pub name: String,
    /// YYYY-MM-DD or DD/MM/YYYY
    #[arg(long)]
    pub entry_date: String,
    #[arg(long)]
    pub head_count: u32,
    #[arg(long)]
    pub capacity: Option<u32>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct LotUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub entry_date: Option<String>,
    #[arg(long)]
    pub head_count: Option<u32>,
    #[arg(long, conflicts_with = "clear_capacity")]
    pub capacity: Option<u32>,
    #[arg(long)]
    pub clear_capacity: bool,
    #[arg(long)]
    pub notes: Option<String>,
}
