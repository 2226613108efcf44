use campo_core::entities::NewTask;
use campo_db::updates::task::TaskUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{TaskCommands, TaskCreateArgs, TaskUpdateArgs};
use crate::commands::shared::parse::{parse_date, parse_enum, parse_optional_date, parse_time};
use crate::context::AppContext;
use crate::output::{Deleted, output};

/// Handle `campo task`.
pub async fn handle(action: TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        TaskCommands::Create(args) => output(&svc.create_task(&new_task(args)?).await?, flags.format),
        TaskCommands::List { pending } => {
            let mut tasks = if pending {
                svc.list_pending_tasks().await?
            } else {
                svc.list_tasks().await?
            };
            tasks.truncate(ctx.limit(flags));
            output(&tasks, flags.format)
        }
        TaskCommands::Get { id } => output(&svc.get_task(&id).await?, flags.format),
        TaskCommands::Update(args) => update(args, ctx, flags).await,
        TaskCommands::Complete { id } => output(&svc.complete_task(&id).await?, flags.format),
        TaskCommands::Reopen { id } => output(&svc.reopen_task(&id).await?, flags.format),
        TaskCommands::Delete { id } => {
            svc.delete_task(&id).await?;
            output(&Deleted { deleted: id }, flags.format)
        }
    }
}

fn new_task(args: TaskCreateArgs) -> anyhow::Result<NewTask> {
    Ok(NewTask {
        title: args.title,
        category: parse_enum(&args.category, "category")?,
        due_date: parse_date(&args.due_date, "--due-date")?,
        due_time: args
            .due_time
            .as_deref()
            .map(|raw| parse_time(raw, "--due-time"))
            .transpose()?,
        description: args.description,
    })
}

async fn update(args: TaskUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut builder = TaskUpdateBuilder::new();
    if let Some(title) = args.title {
        builder = builder.title(title);
    }
    if let Some(category) = args.category {
        builder = builder.category(parse_enum(&category, "category")?);
    }
    if let Some(due_date) = parse_optional_date(args.due_date.as_deref(), "--due-date")? {
        builder = builder.due_date(due_date);
    }
    if args.clear_due_time {
        builder = builder.due_time(None);
    } else if let Some(raw) = args.due_time {
        builder = builder.due_time(Some(parse_time(&raw, "--due-time")?));
    }
    if let Some(description) = args.description {
        builder = builder.description(Some(description).filter(|d| !d.trim().is_empty()));
    }

    let task = ctx.service.update_task(&args.id, builder.build()).await?;
    output(&task, flags.format)
}
