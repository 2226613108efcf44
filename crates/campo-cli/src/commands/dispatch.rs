use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Lot { action } => commands::lot::handle(action, ctx, flags).await,
        Commands::Weighing { action } => commands::weighing::handle(action, ctx, flags).await,
        Commands::Expense { action } => commands::expense::handle(action, ctx, flags).await,
        Commands::Sale { action } => commands::sale::handle(action, ctx, flags).await,
        Commands::Task { action } => commands::task::handle(action, ctx, flags).await,
        Commands::Report { action } => commands::report::handle(&action, ctx, flags).await,
        Commands::Serve(_) => unreachable!("serve is pre-dispatched in main"),
    }
}
