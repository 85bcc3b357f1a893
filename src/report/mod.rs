mod csv_export;
mod errors;
mod html_report;
#[cfg(test)]
mod tests;

use std::fmt::Display;
use std::fs;
use std::path::Path;

use chrono::TimeZone;
use clap::ValueEnum;
use tracing::info;

use crate::models::{Theme, Transaction};

pub use csv_export::write_csv;
pub use errors::ExportError;
pub use html_report::render_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Html,
    Csv
}

/// Writes a report of `transactions` to `path`.
///
/// # Errors
/// Returns `ExportError` if:
/// - There is nothing to export.
/// - The report cannot be encoded or written.
pub fn export<Tz: TimeZone>(transactions: &[Transaction], format: ReportFormat, theme: Theme, zone: &Tz, path: &Path) -> Result<(), ExportError>
where
    Tz::Offset: Display
{
    if transactions.is_empty() {
        return Err(ExportError::Empty)
    }

    let contents = match format {
        ReportFormat::Html => render_html(transactions, theme, zone).into_bytes(),
        ReportFormat::Csv => {
            let mut buffer = Vec::new();
            write_csv(transactions, &mut buffer)?;
            buffer
        }
    };

    fs::write(path, contents).map_err(|source| ExportError::io(path, source))?;
    info!("Exported [{}] transactions as {format:?} to [{}]", transactions.len(), path.display());

    Ok(())
}
