use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;

use crate::cli::Cli;

const DEFAULT_DIRECTORY: &str = ".finance-tracker";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    Directory(PathBuf),
    InMemory
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageLocation,
    pub log_level: LevelFilter
}

impl Config {
    /// Resolves the data directory: `--in-memory`, then `--data-dir` or
    /// `FINANCE_TRACKER_HOME`, then `$HOME/.finance-tracker`.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let storage = if cli.in_memory {
            StorageLocation::InMemory
        } else {
            match &cli.data_dir {
                Some(directory) => StorageLocation::Directory(directory.clone()),
                None => StorageLocation::Directory(default_data_dir()?)
            }
        };

        Ok(Self {
            storage,
            log_level: cli.log_level.into()
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set, pass --data-dir")?;
    Ok(PathBuf::from(home).join(DEFAULT_DIRECTORY))
}

#[cfg(test)]
mod tests {
    use super::{Config, StorageLocation};
    use crate::cli::Cli;

    use std::path::PathBuf;

    use anyhow::Result;
    use clap::Parser;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_explicit_data_dir_and_log_level_are_used() -> Result<()> {
        let cli = Cli::try_parse_from(["finance-tracker", "--data-dir", "/tmp/ledger", "--log-level", "debug", "whoami"])?;
        let config = Config::from_cli(&cli)?;

        assert_eq!(config.storage, StorageLocation::Directory(PathBuf::from("/tmp/ledger")));
        assert_eq!(config.log_level, LevelFilter::DEBUG);

        Ok(())
    }

    #[test]
    fn test_in_memory_overrides_data_dir() -> Result<()> {
        let cli = Cli::try_parse_from(["finance-tracker", "balance", "--in-memory", "--data-dir", "/tmp/ledger"])?;
        let config = Config::from_cli(&cli)?;

        assert_eq!(config.storage, StorageLocation::InMemory);
        assert_eq!(config.log_level, LevelFilter::ERROR);

        Ok(())
    }

    #[test]
    fn test_chart_arguments_build_query() -> Result<()> {
        let cli = Cli::try_parse_from(["finance-tracker", "chart", "--period", "week", "--type", "income", "--by", "day"])?;

        let crate::cli::Command::Chart(arguments) = cli.command else {
            return Err(anyhow::anyhow!("expected the chart command"));
        };

        let query = arguments.into_query();

        assert_eq!(query.period, crate::views::Period::Week);
        assert_eq!(query.chart_type, crate::models::TransactionType::Income);
        assert_eq!(query.grouping, crate::views::ChartGrouping::Day);

        Ok(())
    }
}
