//! Storage seams for the two persisted values the dialog touches: the
//! session-scoped binding table and the advanced-visibility setting.

use crate::bindings::BindingTable;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;

/// Session-store key under which the host publishes the binding table.
pub const BINDING_TABLE_KEY: &str = "commandToOptionsToKeys";

/// Settings key for the advanced-commands visibility flag.
pub const SHOW_ADVANCED_KEY: &str = "helpDialog_showAdvancedCommands";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No user config directory available")]
    NoConfigDir,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Session-scoped key-value store holding the precomputed binding table.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the table under [`BINDING_TABLE_KEY`]. One-shot read; the dialog
    /// re-fetches on every show and never caches.
    async fn fetch_binding_table(&self) -> StorageResult<BindingTable>;
}

/// Persisted user settings.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get_bool(&self, key: &str, default: bool) -> StorageResult<bool>;
    async fn set_bool(&self, key: &str, value: bool) -> StorageResult<()>;
}

/// In-memory session store, populated by the embedding host.
#[derive(Default)]
pub struct MemorySessionStore {
    table: RwLock<BindingTable>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binding_table(table: BindingTable) -> Self {
        Self {
            table: RwLock::new(table),
        }
    }

    pub async fn set_binding_table(&self, table: BindingTable) {
        *self.table.write().await = table;
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn fetch_binding_table(&self) -> StorageResult<BindingTable> {
        Ok(self.table.read().await.clone())
    }
}

/// In-memory settings store, mostly useful in tests and ephemeral embeddings.
#[derive(Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, bool>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get_bool(&self, key: &str, default: bool) -> StorageResult<bool> {
        Ok(self.values.read().await.get(key).copied().unwrap_or(default))
    }

    async fn set_bool(&self, key: &str, value: bool) -> StorageResult<()> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

/// Settings persisted as a flat JSON object on disk.
///
/// Writes are read-then-write without a transaction; acceptable because all
/// writes happen on the single UI task and are infrequent (one per toggle).
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store under the user config directory.
    pub fn default_location() -> StorageResult<Self> {
        let config_dir = dirs::config_dir().ok_or(StorageError::NoConfigDir)?;
        Ok(Self::new(config_dir.join("keybrief").join("settings.json")))
    }

    fn load(&self) -> StorageResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, values: &Map<String, Value>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for JsonFileSettingsStore {
    async fn get_bool(&self, key: &str, default: bool) -> StorageResult<bool> {
        let values = self.load()?;
        Ok(values
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default))
    }

    async fn set_bool(&self, key: &str, value: bool) -> StorageResult<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), Value::Bool(value));
        self.save(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_settings_default_and_roundtrip() {
        let store = MemorySettingsStore::new();
        assert!(!store.get_bool(SHOW_ADVANCED_KEY, false).await.unwrap());

        store.set_bool(SHOW_ADVANCED_KEY, true).await.unwrap();
        assert!(store.get_bool(SHOW_ADVANCED_KEY, false).await.unwrap());
    }

    #[tokio::test]
    async fn test_memory_session_store_returns_fresh_table() {
        let store = MemorySessionStore::new();
        assert!(store.fetch_binding_table().await.unwrap().is_empty());

        let mut table = BindingTable::new();
        table.insert(
            "scrollDown".to_string(),
            HashMap::from([(String::new(), vec!["j".to_string()])]),
        );
        store.set_binding_table(table).await;

        let fetched = store.fetch_binding_table().await.unwrap();
        assert_eq!(fetched["scrollDown"][""], vec!["j".to_string()]);
    }

    #[tokio::test]
    async fn test_file_settings_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = JsonFileSettingsStore::new(&path);
        assert!(!store.get_bool(SHOW_ADVANCED_KEY, false).await.unwrap());
        store.set_bool(SHOW_ADVANCED_KEY, true).await.unwrap();

        let reopened = JsonFileSettingsStore::new(&path);
        assert!(reopened.get_bool(SHOW_ADVANCED_KEY, false).await.unwrap());
    }
}
