use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage error: could not prepare directory [{}]: {source}", .path.display())]
    Directory {
        path: PathBuf,
        source: io::Error
    },
    #[error("Storage error: could not read slot [{key}]: {source}")]
    Read {
        key: String,
        source: io::Error
    },
    #[error("Storage error: could not write slot [{key}]: {source}")]
    Write {
        key: String,
        source: io::Error
    },
    #[error("Storage error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage error: background task failed: {0}")]
    Background(#[from] JoinError)
}

impl StorageError {
    pub fn read(key: &str, source: io::Error) -> Self {
        Self::Read { key: key.to_string(), source }
    }

    pub fn write(key: &str, source: io::Error) -> Self {
        Self::Write { key: key.to_string(), source }
    }
}
