//! Remi CLI - manage companion reminders from the terminal.
//!
//! Thin composition root over `remi-core`: builds the HTTP gateway, binds
//! the acting user, and dispatches subcommands to the sync controller.

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use remi_core::{HttpReminderGateway, ReminderStatus, SyncController, UserId};

use crate::cli::{Cli, Commands};
use crate::config::CliConfig;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Only load .env in development; deployments inject real env vars.
    #[cfg(debug_assertions)]
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("remi=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::resolve(cli.api_url.clone(), cli.user.clone())?;
    let gateway = HttpReminderGateway::new(config.api_url.as_str())?;
    let controller = SyncController::new(gateway);
    controller.bind_user(UserId::new(config.user_id));

    match cli.command {
        Commands::Add {
            title,
            at,
            description,
            tags,
        } => commands::add::run_add(&controller, &title, &at, description.as_deref(), tags).await,
        Commands::List { status, all, json } => {
            commands::list::run_list(&controller, status.map(Into::into), all, json).await
        }
        Commands::Done { id } => {
            commands::status::run_change_status(&controller, &id, ReminderStatus::Complete).await
        }
        Commands::Miss { id } => {
            commands::status::run_change_status(&controller, &id, ReminderStatus::Missed).await
        }
        Commands::Undo { id } => {
            commands::status::run_change_status(&controller, &id, ReminderStatus::Incomplete).await
        }
        Commands::Edit {
            id,
            title,
            at,
            description,
            tags,
        } => {
            commands::edit::run_edit(&controller, &id, title, at.as_deref(), description, tags)
                .await
        }
        Commands::Delete { id } => commands::delete::run_delete(&controller, &id).await,
    }
}
