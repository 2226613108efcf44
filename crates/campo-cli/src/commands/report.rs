use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::commands::shared::parse::parse_range;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campo report`.
pub async fn handle(
    action: &ReportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        ReportCommands::Herd(range) => {
            output(&svc.herd_snapshot(&parse_range(range)?).await?, flags.format)
        }
        ReportCommands::Weighings(range) => {
            output(&svc.weighing_performance(&parse_range(range)?).await?, flags.format)
        }
        ReportCommands::Lots(range) => {
            output(&svc.lot_performance(&parse_range(range)?).await?, flags.format)
        }
        ReportCommands::Expenses(range) => {
            output(&svc.expense_summary(&parse_range(range)?).await?, flags.format)
        }
    }
}
