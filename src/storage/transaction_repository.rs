use std::sync::Arc;

use tracing::error;

use crate::models::Transaction;
use crate::storage::{read_slot, write_slot, Storage, StorageError};

pub const TRANSACTIONS_KEY: &str = "@transactions_data";

/// Mirrors the whole transaction list into a single storage slot as a JSON array.
pub struct TransactionRepository<S: Storage> {
    storage: Arc<S>
}

impl<S: Storage> Clone for TransactionRepository<S> {
    fn clone(&self) -> Self {
        Self { storage: Arc::clone(&self.storage) }
    }
}

impl<S: Storage> TransactionRepository<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Loads the stored list, falling back to an empty list when the slot is
    /// missing or cannot be read or parsed. Failures are only logged.
    pub async fn load(&self) -> Vec<Transaction> {
        match self.try_load().await {
            Ok(transactions) => transactions,
            Err(error) => {
                error!("Failed to load transactions, starting empty: {error}");
                Vec::new()
            }
        }
    }

    /// Loads the stored list. A missing slot is an empty list, not an error.
    pub async fn try_load(&self) -> Result<Vec<Transaction>, StorageError> {
        match read_slot(&self.storage, TRANSACTIONS_KEY).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new())
        }
    }

    /// Overwrites the slot with the full list. Failures are logged and handed
    /// back, never retried.
    pub async fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        let result = match serde_json::to_string(transactions) {
            Ok(json) => write_slot(&self.storage, TRANSACTIONS_KEY, json).await,
            Err(error) => Err(error.into())
        };

        if let Err(error) = &result {
            error!("Failed to save [{}] transactions: {error}", transactions.len());
        }

        result
    }
}
