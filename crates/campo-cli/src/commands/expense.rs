use campo_core::entities::NewExpense;
use campo_core::enums::ExpenseCategory;
use campo_db::updates::expense::ExpenseUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ExpenseCommands, ExpenseCreateArgs, ExpenseUpdateArgs};
use crate::commands::shared::parse::{parse_date, parse_enum, parse_optional_date};
use crate::context::AppContext;
use crate::output::{Deleted, output};

/// Handle `campo expense`.
pub async fn handle(
    action: ExpenseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        ExpenseCommands::Create(args) => {
            output(&svc.create_expense(&new_expense(args)?).await?, flags.format)
        }
        ExpenseCommands::List { lot } => {
            let mut expenses = match lot {
                Some(lot) => svc.list_expenses_for_lot(&lot).await?,
                None => svc.list_expenses().await?,
            };
            expenses.truncate(ctx.limit(flags));
            output(&expenses, flags.format)
        }
        ExpenseCommands::Get { id } => output(&svc.get_expense(&id).await?, flags.format),
        ExpenseCommands::Update(args) => update(args, ctx, flags).await,
        ExpenseCommands::Delete { id } => {
            svc.delete_expense(&id).await?;
            output(&Deleted { deleted: id }, flags.format)
        }
    }
}

fn new_expense(args: ExpenseCreateArgs) -> anyhow::Result<NewExpense> {
    Ok(NewExpense {
        lot_id: args.lot,
        category: parse_enum::<ExpenseCategory>(&args.category, "category")?,
        amount: args.amount,
        date: parse_date(&args.date, "--date")?,
        description: args.description,
    })
}

async fn update(
    args: ExpenseUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = ExpenseUpdateBuilder::new();
    if let Some(category) = args.category {
        builder = builder.category(parse_enum(&category, "category")?);
    }
    if let Some(amount) = args.amount {
        builder = builder.amount(amount);
    }
    if let Some(date) = parse_optional_date(args.date.as_deref(), "--date")? {
        builder = builder.date(date);
    }
    if let Some(description) = args.description {
        builder = builder.description(description);
    }
    if args.clear_lot {
        builder = builder.lot_id(None);
    } else if let Some(lot) = args.lot {
        builder = builder.lot_id(Some(lot));
    }

    let expense = ctx.service.update_expense(&args.id, builder.build()).await?;
    output(&expense, flags.format)
}
