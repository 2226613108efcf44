use campo_core::entities::NewLot;
use campo_core::enums::LotStatus;
use campo_db::updates::lot::LotUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{LotCommands, LotCreateArgs, LotUpdateArgs};
use crate::commands::shared::parse::{parse_date, parse_optional_date};
use crate::context::AppContext;
use crate::output::output;

/// Handle `campo lot`.
pub async fn handle(action: LotCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        LotCommands::Create(args) => output(&svc.create_lot(&new_lot(args)?).await?, flags.format),
        LotCommands::List { all } => {
            let mut lots = if all {
                svc.list_all_lots().await?
            } else {
                svc.list_lots().await?
            };
            lots.truncate(ctx.limit(flags));
            output(&lots, flags.format)
        }
        LotCommands::Get { id } => output(&svc.get_lot(&id).await?, flags.format),
        LotCommands::Update(args) => update(args, ctx, flags).await,
        LotCommands::Close { id } => {
            output(&svc.transition_lot(&id, LotStatus::Closed).await?, flags.format)
        }
        LotCommands::Reopen { id } => {
            output(&svc.transition_lot(&id, LotStatus::Active).await?, flags.format)
        }
        LotCommands::Archive { id } => output(&svc.archive_lot(&id).await?, flags.format),
    }
}

fn new_lot(args: LotCreateArgs) -> anyhow::Result<NewLot> {
    Ok(NewLot {
        name: args.name,
        entry_date: parse_date(&args.entry_date, "--entry-date")?,
        head_count: args.head_count,
        capacity: args.capacity,
        notes: args.notes,
    })
}

async fn update(args: LotUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut builder = LotUpdateBuilder::new();
    if let Some(name) = args.name {
        builder = builder.name(name);
    }
    if let Some(entry_date) = parse_optional_date(args.entry_date.as_deref(), "--entry-date")? {
        builder = builder.entry_date(entry_date);
    }
    if let Some(head_count) = args.head_count {
        builder = builder.head_count(head_count);
    }
    if args.clear_capacity {
        builder = builder.capacity(None);
    } else if let Some(capacity) = args.capacity {
        builder = builder.capacity(Some(capacity));
    }
    if let Some(notes) = args.notes {
        builder = builder.notes(Some(notes).filter(|n| !n.trim().is_empty()));
    }

    let lot = ctx.service.update_lot(&args.id, builder.build()).await?;
    output(&lot, flags.format)
}
