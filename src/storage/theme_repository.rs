use std::sync::Arc;

use tracing::{debug, error};

use crate::models::Theme;
use crate::storage::{read_slot, write_slot, Storage, StorageError};

pub const THEME_KEY: &str = "APP_THEME";

pub struct ThemeRepository<S: Storage> {
    storage: Arc<S>
}

impl<S: Storage> ThemeRepository<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// The saved preference, light when nothing usable is stored.
    pub async fn load(&self) -> Theme {
        match read_slot(&self.storage, THEME_KEY).await {
            Ok(Some(value)) => Theme::from_stored(&value),
            Ok(None) => Theme::default(),
            Err(error) => {
                error!("Failed to load theme preference: {error}");
                Theme::default()
            }
        }
    }

    pub async fn save(&self, theme: Theme) -> Result<(), StorageError> {
        write_slot(&self.storage, THEME_KEY, theme.as_str().to_string()).await
    }

    /// Flips `current` and persists the result.
    pub async fn toggle(&self, current: Theme) -> Result<Theme, StorageError> {
        let next = current.toggled();

        self.save(next).await.inspect_err(|error| error!("Failed to save theme preference: {error}"))?;
        debug!("Theme switched from [{current}] to [{next}]");

        Ok(next)
    }
}
