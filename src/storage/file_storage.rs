use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::storage::{Storage, StorageError};

/// Keeps every slot in its own file inside a data directory.
pub struct FileStorage {
    directory: PathBuf
}

impl FileStorage {
    /// Opens (and creates if needed) the data directory.
    pub fn open(directory: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let directory = directory.into();

        fs::create_dir_all(&directory)
            .map_err(|source| StorageError::Directory { path: directory.clone(), source })?;

        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        let file_name: String = key.chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();

        self.directory.join(file_name)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StorageError::read(key, error))
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        //NOTE: The temp file lives in the same directory so the final rename never crosses filesystems
        let mut file = NamedTempFile::new_in(&self.directory)
            .map_err(|error| StorageError::write(key, error))?;

        file.write_all(value.as_bytes())
            .and_then(|_| file.as_file().sync_all())
            .map_err(|error| StorageError::write(key, error))?;

        file.persist(self.slot_path(key))
            .map_err(|error| StorageError::write(key, error.error))?;

        Ok(())
    }
}
