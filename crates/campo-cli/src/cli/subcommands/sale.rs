use clap::{Args, Subcommand};

/// Sale commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SaleCommands {
    /// Record a sale; revenue, margin and objective are derived.
    Create(SaleCreateArgs),
    /// List sales, newest first.
    List {
        #[arg(long)]
        lot: Option<String>,
    },
    /// Get a sale by ID.
    Get { id: String },
    /// Update sale fields and recompute the derived figures.
    Update(SaleUpdateArgs),
    /// Delete a sale.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct SaleCreateArgs {
    #[arg(long)]
    pub lot: String,
    #[arg(long)]
    pub date: String,
    /// Head of cattle sold
    #[arg(long)]
    pub heads: u32,
    /// Total live weight in kg
    #[arg(long)]
    pub weight: f64,
    /// Price per unit in BRL
    #[arg(long)]
    pub price: f64,
    /// arroba, kg, head
    #[arg(long, default_value = "arroba")]
    pub unit: String,
    /// Sale costs in BRL (freight, commission, taxes)
    #[arg(long, default_value_t = 0.0)]
    pub costs: f64,
    #[arg(long)]
    pub buyer: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SaleUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub heads: Option<u32>,
    #[arg(long)]
    pub weight: Option<f64>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub unit: Option<String>,
    #[arg(long)]
    pub costs: Option<f64>,
    #[arg(long)]
    pub buyer: Option<String>,
}
