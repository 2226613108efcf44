use campo_core::entities::NewWeighing;
use campo_db::updates::weighing::WeighingUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{WeighingCommands, WeighingCreateArgs, WeighingUpdateArgs};
use crate::commands::shared::parse::{parse_date, parse_optional_date};
use crate::context::AppContext;
use crate::output::{Deleted, output};

/// Handle `campo weighing`.
pub async fn handle(
    action: WeighingCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        WeighingCommands::Create(args) => {
            output(&svc.create_weighing(&new_weighing(args)?).await?, flags.format)
        }
        WeighingCommands::List { animal, lot } => {
            let mut weighings = match (animal, lot) {
                (Some(animal), _) => svc.list_weighings_for_animal(&animal).await?,
                (None, Some(lot)) => svc.list_weighings_for_lot(&lot).await?,
                (None, None) => svc.list_weighings().await?,
            };
            // Oldest first from the store; keep the most recent `limit`.
            let limit = ctx.limit(flags);
            if weighings.len() > limit {
                weighings.drain(..weighings.len() - limit);
            }
            output(&weighings, flags.format)
        }
        WeighingCommands::Get { id } => output(&svc.get_weighing(&id).await?, flags.format),
        WeighingCommands::Update(args) => update(args, ctx, flags).await,
        WeighingCommands::Delete { id } => {
            svc.delete_weighing(&id).await?;
            output(&Deleted { deleted: id }, flags.format)
        }
    }
}

fn new_weighing(args: WeighingCreateArgs) -> anyhow::Result<NewWeighing> {
    Ok(NewWeighing {
        animal_tag: args.animal,
        lot_id: args.lot,
        date: parse_date(&args.date, "--date")?,
        weight_kg: args.weight,
        notes: args.notes,
    })
}

async fn update(
    args: WeighingUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = WeighingUpdateBuilder::new();
    if let Some(animal) = args.animal {
        builder = builder.animal_tag(animal);
    }
    if let Some(date) = parse_optional_date(args.date.as_deref(), "--date")? {
        builder = builder.date(date);
    }
    if let Some(weight) = args.weight {
        builder = builder.weight_kg(weight);
    }
    if args.clear_lot {
        builder = builder.lot_id(None);
    } else if let Some(lot) = args.lot {
        builder = builder.lot_id(Some(lot));
    }
    if let Some(notes) = args.notes {
        builder = builder.notes(Some(notes).filter(|n| !n.trim().is_empty()));
    }

    let weighing = ctx.service.update_weighing(&args.id, builder.build()).await?;
    output(&weighing, flags.format)
}
