use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::models::TransactionType;
use crate::report::ReportFormat;
use crate::views::{ChartGrouping, Period, ViewQuery};

#[derive(Debug, Parser)]
#[command(name = "finance-tracker", version, about = "Record income and expenses, summarize them and export reports")]
pub struct Cli {
    /// Directory holding the transaction and preference slots
    #[arg(long, global = true, env = "FINANCE_TRACKER_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory, nothing is persisted
    #[arg(long, global = true)]
    pub in_memory: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Error)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a new transaction and print its id
    Add(TransactionArgs),
    /// Change fields of an existing transaction
    Edit {
        id: String,
        #[command(flatten)]
        fields: EditArgs
    },
    /// Delete a transaction
    Delete {
        id: String
    },
    /// Print the filtered transactions as CSV
    List(FilterArgs),
    /// Print the net balance of the filtered transactions
    Balance(FilterArgs),
    /// Print chart groups as `label,value,color`
    Chart(ChartArgs),
    /// Write a report of the filtered transactions
    Export(ExportArgs),
    /// Show or toggle the display theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>
    },
    /// List the suggested categories
    Categories {
        #[arg(long = "type", value_enum)]
        transaction_type: Option<TransactionType>
    },
    /// Print the signed-in user
    Whoami
}

#[derive(Debug, Args)]
pub struct TransactionArgs {
    #[arg(long = "type", value_enum, default_value_t = TransactionType::Expense)]
    pub transaction_type: TransactionType,
    #[arg(long)]
    pub amount: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// RFC 3339 timestamp, defaults to now
    #[arg(long)]
    pub date: Option<DateTime<Utc>>
}

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(long = "type", value_enum)]
    pub transaction_type: Option<TransactionType>,
    #[arg(long)]
    pub amount: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub date: Option<DateTime<Utc>>
}

#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    #[arg(long, value_enum, default_value_t = Period::All)]
    pub period: Period,
    /// Case-insensitive match on category or description
    #[arg(long, default_value = "")]
    pub search: String
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    #[arg(long = "type", value_enum, default_value_t = TransactionType::Expense)]
    pub transaction_type: TransactionType,
    #[arg(long = "by", value_enum, default_value_t = ChartGrouping::Category)]
    pub grouping: ChartGrouping
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    #[arg(long, value_enum, default_value_t = ReportFormat::Html)]
    pub format: ReportFormat,
    #[arg(long)]
    pub output: PathBuf
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ThemeAction {
    Show,
    Toggle
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR
        }
    }
}

impl FilterArgs {
    pub fn into_query(self) -> ViewQuery {
        ViewQuery {
            period: self.period,
            search: self.search,
            ..ViewQuery::default()
        }
    }
}

impl ChartArgs {
    pub fn into_query(self) -> ViewQuery {
        ViewQuery {
            chart_type: self.transaction_type,
            grouping: self.grouping,
            ..self.filter.into_query()
        }
    }
}
