//! Per-visitor key-value store.
//!
//! Mirrors browser local storage: values are opaque strings under fixed keys,
//! scoped by the visitor id assigned in [`crate::visitor`]. Callers own the
//! (de)serialization of whatever they put here, so a malformed value is a
//! possibility the reader must handle.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const THEME_KEY: &str = "theme";
pub const FORM_DRAFT_KEY: &str = "contactFormDraft";
pub const EMAIL_DRAFT_KEY: &str = "contactEmailDraft";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type Buckets = HashMap<Uuid, HashMap<String, String>>;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_item(&self, visitor: Uuid, key: &str) -> Result<Option<String>, StorageError>;

    async fn set_item(&self, visitor: Uuid, key: &str, value: String) -> Result<(), StorageError>;
}

/// Volatile store. Used in tests and whenever persistence is not wanted.
#[derive(Default)]
pub struct MemoryStorage {
    buckets: RwLock<Buckets>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_item(&self, visitor: Uuid, key: &str) -> Result<Option<String>, StorageError> {
        let buckets = self.buckets.read().await;
        Ok(buckets.get(&visitor).and_then(|b| b.get(key)).cloned())
    }

    async fn set_item(&self, visitor: Uuid, key: &str, value: String) -> Result<(), StorageError> {
        let mut buckets = self.buckets.write().await;
        buckets
            .entry(visitor)
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }
}

/// In-memory store written through to a single JSON file on every `set_item`.
///
/// The whole file is rewritten on each write, and buckets are never evicted:
/// every visitor that ever wrote a key (including first-time visitors who
/// toggle the theme) stays in the file until it is deleted by hand. A failed
/// write leaves both memory and disk at their previous state.
pub struct FileStorage {
    path: PathBuf,
    buckets: RwLock<Buckets>,
}

impl FileStorage {
    /// Opens the store at `path`. A missing file starts empty; an unreadable
    /// or malformed one is logged and also starts empty.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let buckets = match load_buckets(&path).await {
            Ok(buckets) => {
                info!(
                    "Loaded visitor storage from {} ({} visitors)",
                    path.display(),
                    buckets.len()
                );
                buckets
            }
            Err(StorageError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                info!("No visitor storage at {}, starting empty", path.display());
                Buckets::new()
            }
            Err(e) => {
                warn!(
                    "Could not read visitor storage at {}: {e}; starting empty",
                    path.display()
                );
                Buckets::new()
            }
        };

        Self {
            path,
            buckets: RwLock::new(buckets),
        }
    }

    async fn flush(&self, buckets: &Buckets) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(buckets)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!("Flushed visitor storage to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get_item(&self, visitor: Uuid, key: &str) -> Result<Option<String>, StorageError> {
        let buckets = self.buckets.read().await;
        Ok(buckets.get(&visitor).and_then(|b| b.get(key)).cloned())
    }

    async fn set_item(&self, visitor: Uuid, key: &str, value: String) -> Result<(), StorageError> {
        // Hold the write lock across the flush so concurrent writers serialize.
        let mut buckets = self.buckets.write().await;
        let previous = buckets
            .entry(visitor)
            .or_default()
            .insert(key.to_string(), value);

        if let Err(e) = self.flush(&buckets).await {
            // Memory must keep matching disk.
            match previous {
                Some(old) => {
                    buckets.entry(visitor).or_default().insert(key.to_string(), old);
                }
                None => {
                    if let Some(bucket) = buckets.get_mut(&visitor) {
                        bucket.remove(key);
                        if bucket.is_empty() {
                            buckets.remove(&visitor);
                        }
                    }
                }
            }
            return Err(e);
        }
        Ok(())
    }
}

async fn load_buckets(path: &Path) -> Result<Buckets, StorageError> {
    let raw = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&raw)?)
}
