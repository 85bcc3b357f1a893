mod errors;
mod file_storage;
mod memory_storage;
mod theme_repository;
mod transaction_repository;

use std::sync::Arc;

use tokio::task::spawn_blocking;

pub use errors::StorageError;
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use theme_repository::ThemeRepository;
pub use transaction_repository::TransactionRepository;

/// A set of named string slots.
///
/// Implementations are synchronous; the repositories move calls onto the
/// blocking pool so the store actor is never stalled by disk I/O.
pub trait Storage: Send + Sync + 'static {
    /// Returns `None` when nothing was ever written under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces the whole slot; readers never observe a partial value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

async fn read_slot<S: Storage>(storage: &Arc<S>, key: &'static str) -> Result<Option<String>, StorageError> {
    let storage = Arc::clone(storage);

    spawn_blocking(move || storage.get(key)).await?
}

async fn write_slot<S: Storage>(storage: &Arc<S>, key: &'static str, value: String) -> Result<(), StorageError> {
    let storage = Arc::clone(storage);

    spawn_blocking(move || storage.set(key, &value)).await?
}
