//! File-backed key-value store.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use stagelink_core::error::{Result, StagelinkError};
use stagelink_core::store::KeyValueStore;
use tokio::sync::Mutex;

use crate::storage::AtomicTomlFile;

type Entries = BTreeMap<String, String>;

/// Persistent key-value store backed by a single TOML file.
///
/// Entries are cached in memory behind a mutex that is held for the whole
/// read-modify-write of every mutation, so writes from one process are
/// serialized. The file itself is updated under an exclusive file lock.
#[derive(Clone)]
pub struct FileKeyValueStore {
    /// Cached entries, mirrored from the file after each write.
    entries: Arc<Mutex<Entries>>,
    file: Arc<AtomicTomlFile<Entries>>,
}

impl FileKeyValueStore {
    /// Opens (or lazily creates) the store at `path` and loads its entries.
    pub async fn open(path: PathBuf) -> Result<Self> {
        let file = Arc::new(AtomicTomlFile::<Entries>::new(path));

        let loader = file.clone();
        let initial = tokio::task::spawn_blocking(move || loader.load())
            .await
            .map_err(|e| StagelinkError::internal(format!("Failed to join task: {}", e)))??
            .unwrap_or_default();

        tracing::debug!(
            "[Store] Opened {:?} with {} entries",
            file.path(),
            initial.len()
        );

        Ok(Self {
            entries: Arc::new(Mutex::new(initial)),
            file,
        })
    }

    /// Applies `mutation` to the file and refreshes the cache from the result.
    async fn persist<F>(&self, mutation: F) -> Result<()>
    where
        F: FnOnce(&mut Entries) + Send + 'static,
    {
        let mut entries = self.entries.lock().await;

        let file = self.file.clone();
        let updated = tokio::task::spawn_blocking(move || {
            let mut snapshot = None;
            file.update(Entries::new(), |map| {
                mutation(map);
                snapshot = Some(map.clone());
                Ok(())
            })?;
            Ok::<_, StagelinkError>(snapshot.unwrap_or_default())
        })
        .await
        .map_err(|e| StagelinkError::internal(format!("Failed to join task: {}", e)))??;

        *entries = updated;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let key = key.to_string();
        self.persist(move |map| {
            map.insert(key, value);
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.persist(move |map| {
            map.remove(&key);
        })
        .await
    }
}
