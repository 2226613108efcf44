use clap::{Args, Subcommand};

/// Weighing commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WeighingCommands {
    /// Record a weighing.
    Create(WeighingCreateArgs),
    /// List weighings with gain and GMD.
    List {
        #[arg(long, conflicts_with = "lot")]
        animal: Option<String>,
        #[arg(long)]
        lot: Option<String>,
    },
    /// Get a weighing by ID.
    Get { id: String },
    /// Update weighing fields.
    Update(WeighingUpdateArgs),
    /// Delete a weighing.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct WeighingCreateArgs {
    /// Animal ear tag
    #[arg(long)]
    pub animal: String,
    #[arg(long)]
    pub date: String,
    /// Weight in kg
    #[arg(long)]
    pub weight: f64,
    #[arg(long)]
    pub lot: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct WeighingUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub animal: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub weight: Option<f64>,
    #[arg(long, conflicts_with = "clear_lot")]
    pub lot: Option<String>,
    #[arg(long)]
    pub clear_lot: bool,
    #[arg(long)]
    pub notes: Option<String>,
}
