#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use anyhow::Context;
use campo_db::error::DatabaseError;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("campo error: {}", user_facing(&error));
        std::process::exit(1);
    }
}

/// Store failures print a generic message; the detail goes to the log.
fn user_facing(error: &anyhow::Error) -> String {
    match error.downcast_ref::<DatabaseError>() {
        Some(db_error) if db_error.is_upstream() => {
            tracing::error!(error = %format!("{error:#}"), "campo store request failed");
            db_error.user_message()
        }
        Some(db_error) => db_error.user_message(),
        None => format!("{error:#}"),
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config()?;
    context::warn_unconfigured(&config);

    if let cli::Commands::Serve(args) = &cli.command {
        return commands::serve::handle(args, config).await;
    }

    let ctx = context::AppContext::init(config, &flags)
        .await
        .context("failed to initialize campo application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CAMPO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
