use campo_core::entities::NewSale;
use campo_db::updates::sale::SaleUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{SaleCommands, SaleCreateArgs, SaleUpdateArgs};
use crate::commands::shared::parse::{parse_date, parse_enum, parse_optional_date};
use crate::context::AppContext;
use crate::output::{Deleted, output};

/// Handle `campo sale`.
pub async fn handle(action: SaleCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        SaleCommands::Create(args) => output(&svc.create_sale(&new_sale(args)?).await?, flags.format),
        SaleCommands::List { lot } => {
            let mut sales = match lot {
                Some(lot) => svc.list_sales_for_lot(&lot).await?,
                None => svc.list_sales().await?,
            };
            sales.truncate(ctx.limit(flags));
            output(&sales, flags.format)
        }
        SaleCommands::Get { id } => output(&svc.get_sale(&id).await?, flags.format),
        SaleCommands::Update(args) => update(args, ctx, flags).await,
        SaleCommands::Delete { id } => {
            svc.delete_sale(&id).await?;
            output(&Deleted { deleted: id }, flags.format)
        }
    }
}

fn new_sale(args: SaleCreateArgs) -> anyhow::Result<NewSale> {
    Ok(NewSale {
        lot_id: args.lot,
        date: parse_date(&args.date, "--date")?,
        head_count: args.heads,
        total_weight_kg: args.weight,
        price_per_unit: args.price,
        price_unit: parse_enum(&args.unit, "unit")?,
        costs: args.costs,
        buyer: args.buyer,
    })
}

async fn update(args: SaleUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut builder = SaleUpdateBuilder::new();
    if let Some(date) = parse_optional_date(args.date.as_deref(), "--date")? {
        builder = builder.date(date);
    }
    if let Some(heads) = args.heads {
        builder = builder.head_count(heads);
    }
    if let Some(weight) = args.weight {
        builder = builder.total_weight_kg(weight);
    }
    if let Some(price) = args.price {
        builder = builder.price_per_unit(price);
    }
    if let Some(unit) = args.unit {
        builder = builder.price_unit(parse_enum(&unit, "unit")?);
    }
    if let Some(costs) = args.costs {
        builder = builder.costs(costs);
    }
    if let Some(buyer) = args.buyer {
        builder = builder.buyer(Some(buyer).filter(|b| !b.trim().is_empty()));
    }

    let sale = ctx.service.update_sale(&args.id, builder.build()).await?;
    output(&sale, flags.format)
}
