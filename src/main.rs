mod actors;
mod cli;
mod config;
mod engine;
mod models;
mod report;
mod session;
mod storage;
mod types;
mod views;

use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::{Cli, Command, EditArgs, ThemeAction, TransactionArgs};
use crate::config::{Config, StorageLocation};
use crate::engine::Tracker;
use crate::models::{categories_for, TransactionDraft, TransactionType};
use crate::report::write_csv;
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::types::format_signed;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = start(cli).await {
        eprintln!("Error: {error:#}");
        exit(1);
    }
}

async fn start(cli: Cli) -> Result<()> {
    let config = Config::from_cli(&cli)?;
    setup_logging(config.log_level);

    match config.storage {
        StorageLocation::Directory(directory) => {
            let storage = FileStorage::open(directory)?;
            debug!("Using data directory [{}]", storage.directory().display());
            run(Arc::new(storage), cli.command).await
        }
        StorageLocation::InMemory => run(Arc::new(MemoryStorage::new()), cli.command).await
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries command output, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn run<S: Storage>(storage: Arc<S>, command: Command) -> Result<()> {
    let tracker = Tracker::open(storage).await?;

    let timer = Instant::now();
    let result = execute(&tracker, command).await;
    info!("Command finished in: {:?}", timer.elapsed());

    //NOTE: Close even when the command failed so queued saves are not dropped
    tracker.close().await?;

    result
}

async fn execute<S: Storage>(tracker: &Tracker<S>, command: Command) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    match command {
        Command::Add(arguments) => {
            let transaction = tracker.record(new_draft(arguments)).await?;
            writeln!(output, "{}", transaction.id)?;
        }
        Command::Edit { id, fields } => {
            let transaction = tracker.amend(&id, |draft| apply_edits(draft, fields)).await?;
            writeln!(output, "{}", transaction.id)?;
        }
        Command::Delete { id } => {
            if !tracker.remove(&id).await? {
                writeln!(output, "Transaction [{id}] was not found, nothing deleted")?;
            }
        }
        Command::List(filter) => {
            let view = tracker.dashboard(&filter.into_query()).await;
            write_csv(&view.transactions, &mut output)?;
        }
        Command::Balance(filter) => {
            let view = tracker.dashboard(&filter.into_query()).await;
            writeln!(output, "{}", format_signed(view.balance))?;
        }
        Command::Chart(arguments) => {
            let view = tracker.dashboard(&arguments.into_query()).await;

            for slice in &view.chart {
                writeln!(output, "{},{},{}", slice.label, slice.value, slice.color)?;
            }
        }
        Command::Export(arguments) => {
            let count = tracker.export(&arguments.filter.into_query(), arguments.format, &arguments.output).await?;
            writeln!(output, "Exported {count} transactions to {}", arguments.output.display())?;
        }
        Command::Theme { action } => {
            let theme = match action.unwrap_or(ThemeAction::Show) {
                ThemeAction::Show => tracker.theme().await,
                ThemeAction::Toggle => tracker.toggle_theme().await?
            };
            writeln!(output, "{theme}")?;
        }
        Command::Categories { transaction_type } => {
            let types = match transaction_type {
                Some(transaction_type) => vec![transaction_type],
                None => vec![TransactionType::Expense, TransactionType::Income]
            };

            for transaction_type in types {
                for category in categories_for(transaction_type) {
                    writeln!(output, "{},{category}", transaction_type.as_str())?;
                }
            }
        }
        Command::Whoami => {
            writeln!(output, "{}", session::current_user().email)?;
        }
    }

    output.flush()?;

    Ok(())
}

fn new_draft(arguments: TransactionArgs) -> TransactionDraft {
    let mut draft = TransactionDraft::new(arguments.transaction_type);
    draft.amount = arguments.amount.unwrap_or_default();
    draft.category = arguments.category.unwrap_or_default();
    draft.description = arguments.description.unwrap_or_default();

    if let Some(date) = arguments.date {
        draft.date = date;
    }

    draft
}

fn apply_edits(draft: &mut TransactionDraft, fields: EditArgs) {
    if let Some(transaction_type) = fields.transaction_type {
        draft.transaction_type = transaction_type;
    }
    if let Some(amount) = fields.amount {
        draft.amount = amount;
    }
    if let Some(category) = fields.category {
        draft.category = category;
    }
    if let Some(description) = fields.description {
        draft.description = description;
    }
    if let Some(date) = fields.date {
        draft.date = date;
    }
}
