use thiserror::Error;

use crate::actors::Snapshot;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The in-memory list was already replaced by `snapshot`; only the
    /// persisted mirror is stale.
    #[error("Transaction store changes at revision [{}] were kept in memory but not saved: {source}", .snapshot.revision)]
    Save {
        snapshot: Snapshot,
        source: StorageError
    },
    #[error("Transaction store is closed")]
    Closed
}
