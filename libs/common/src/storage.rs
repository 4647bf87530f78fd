//! Local key-value storage for the RepayKaro client
//!
//! The mobile app kept its session token and cached profile fields in the
//! platform key-value store. This module provides the same primitive backed
//! by a JSON file on disk, plus an in-memory variant for tests and ephemeral
//! sessions.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::{StorageError, StorageResult};

/// Configuration for the on-disk store
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path of the JSON file holding the key-value map
    pub path: PathBuf,
}

impl StorageConfig {
    /// Create a new StorageConfig from environment variables
    ///
    /// # Environment Variables
    /// - `REPAYKARO_STORAGE_PATH`: path of the storage file
    ///   (default: `<user data dir>/repaykaro/storage.json`)
    pub fn from_env() -> Result<Self> {
        let path = match std::env::var("REPAYKARO_STORAGE_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => {
                let mut dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
                dir.push("repaykaro");
                dir.push("storage.json");
                dir
            }
        };

        Ok(StorageConfig { path })
    }
}

/// Key-value persistence used for the session token and cached profile fields
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Set a key-value pair, overwriting any previous value
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a key; deleting an absent key is not an error
    async fn delete(&self, key: &str) -> StorageResult<()>;
}

/// File-backed store persisting a single JSON object
pub struct FileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the backing file
    lock: RwLock<()>,
}

impl FileStore {
    /// Initialize a new file-backed store
    pub fn new(config: &StorageConfig) -> Self {
        info!("File store initialized at: {}", config.path.display());
        FileStore {
            path: config.path.clone(),
            lock: RwLock::new(()),
        }
    }

    async fn read_map(&self) -> StorageResult<HashMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn write_map(&self, map: &HashMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(map)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self.lock.read().await;
        let map = self.read_map().await?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.lock.write().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let _guard = self.lock.write().await;
        let mut map = self.read_map().await?;
        map.remove(key);
        self.write_map(&map).await
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let map = self.map.read().await;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut map = self.map.write().await;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let mut map = self.map.write().await;
        map.remove(key);
        Ok(())
    }
}
