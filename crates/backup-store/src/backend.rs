//! Storage backends for the backup list.

use crate::error::StoreError;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;

/// JSON file storage.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the raw file contents. A missing file reads as `None`.
    pub async fn read(&self) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            debug!("Backup file not found at {:?}", self.path);
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path).await?))
    }

    /// Write the raw contents atomically (temp file + rename).
    pub async fn write(&self, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, contents).await?;
        fs::rename(&temp_path, &self.path).await?;

        debug!("Wrote {} bytes to {:?}", contents.len(), self.path);
        Ok(())
    }
}

/// In-memory storage for tests or persistence-disabled runs.
///
/// Holds the raw serialized form so tests can inject arbitrary contents,
/// malformed ones included.
#[derive(Clone, Default)]
pub struct MemoryStore {
    contents: Arc<RwLock<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-seeded raw contents.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(RwLock::new(Some(contents.into()))),
        }
    }

    pub async fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.contents.read().await.clone())
    }

    pub async fn write(&self, contents: &str) -> Result<(), StoreError> {
        *self.contents.write().await = Some(contents.to_string());
        Ok(())
    }
}

/// Storage backend selector.
pub enum Store {
    /// Persistent JSON file.
    Json(JsonFileStore),
    /// In-memory only (data lost on exit).
    Memory(MemoryStore),
}

impl Store {
    /// File-backed store at the given path.
    pub fn json(path: impl Into<PathBuf>) -> Self {
        Store::Json(JsonFileStore::new(path))
    }

    /// Memory-only store.
    pub fn memory() -> Self {
        Store::Memory(MemoryStore::new())
    }

    /// Read the raw serialized list, if any.
    pub async fn read(&self) -> Result<Option<String>, StoreError> {
        match self {
            Store::Json(s) => s.read().await,
            Store::Memory(s) => s.read().await,
        }
    }

    /// Replace the raw serialized list.
    pub async fn write(&self, contents: &str) -> Result<(), StoreError> {
        match self {
            Store::Json(s) => s.write(contents).await,
            Store::Memory(s) => s.write(contents).await,
        }
    }
}
