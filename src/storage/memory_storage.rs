use dashmap::DashMap;

use crate::storage::{Storage, StorageError};

/// Volatile slots, nothing survives the process.
#[derive(Default)]
pub struct MemoryStorage {
    slots: DashMap<String, String>
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new()
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).map(|slot| slot.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
