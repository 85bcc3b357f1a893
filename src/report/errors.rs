use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No transactions to export for this filter")]
    Empty,
    #[error("Could not write report to [{}]: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("Could not encode CSV report: {0}")]
    Csv(#[from] csv::Error)
}

impl ExportError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }
}
