//! Durable client-side key-value storage
//!
//! The page keeps a single preference (`theme`) here. `FileStore` keeps a
//! JSON map in the platform data directory so it survives restarts.

use crate::error::Result;
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Minimal string key-value store
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store; used in tests and when no data directory exists
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file backed store, rewritten on every change
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Default location inside the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-ui").map(|dirs| dirs.data_dir().join("storage.json"))
    }

    /// Open the store at `path`, starting empty when the file does not exist
    pub fn open(path: PathBuf) -> Result<Self> {
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Open the default file store, falling back to memory when that fails
pub fn open_default_store() -> Box<dyn KeyValueStore> {
    let Some(path) = FileStore::default_path() else {
        tracing::warn!("no data directory available; preferences will not persist");
        return Box::new(MemoryStore::new());
    };
    match FileStore::open(path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!("could not open preference store: {err}");
            Box::new(MemoryStore::new())
        }
    }
}
