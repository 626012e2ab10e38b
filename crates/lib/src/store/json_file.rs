//! JSON file session store
//!
//! Keeps the whole store in memory and rewrites the backing file on every
//! `set`, so a value is on disk by the time `set` returns.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tokio::sync::RwLock;

use super::{ContextKey, SessionStore, StoreError};

/// The current persistence file format version.
/// v0 indicates this is an unstable format subject to breaking changes.
const PERSISTENCE_VERSION: u8 = 0;

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

/// Validates the persistence version during deserialization.
fn validate_persistence_version<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != PERSISTENCE_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported persistence version {version}; only version {PERSISTENCE_VERSION} is supported"
        )));
    }
    Ok(version)
}

/// On-disk layout of the store
#[derive(Serialize, Deserialize)]
struct SerializableSessions {
    /// File format version for compatibility checking
    #[serde(
        rename = "_v",
        default,
        skip_serializing_if = "is_v0",
        deserialize_with = "validate_persistence_version"
    )]
    version: u8,
    #[serde(default)]
    sessions: BTreeMap<ContextKey, String>,
}

/// Session store persisted as a JSON file.
#[derive(Debug)]
pub struct JsonFile {
    path: PathBuf,
    sessions: RwLock<BTreeMap<ContextKey, String>>,
}

impl JsonFile {
    /// Open the store at `path`.
    ///
    /// If the file does not exist, the store starts empty and the file is
    /// created by the first `set`.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let sessions = match tokio::fs::read_to_string(&path).await {
            Ok(json) => {
                let stored: SerializableSessions = serde_json::from_str(&json)
                    .map_err(|source| StoreError::DeserializationFailed { source })?;
                stored.sessions
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::FileIo { source }),
        };
        tracing::debug!(
            path = %path.display(),
            entries = sessions.len(),
            "Opened session store"
        );
        Ok(Self {
            path,
            sessions: RwLock::new(sessions),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for JsonFile {
    async fn get(&self, key: &ContextKey) -> Result<Option<String>, StoreError> {
        Ok(self.sessions.read().await.get(key).cloned())
    }

    async fn set(&self, key: &ContextKey, value: String) -> Result<(), StoreError> {
        // Holding the write lock across the file write keeps concurrent sets
        // from interleaving on disk.
        let mut sessions = self.sessions.write().await;

        let mut updated = sessions.clone();
        updated.insert(key.clone(), value);

        let serializable = SerializableSessions {
            version: PERSISTENCE_VERSION,
            sessions: updated,
        };
        let json = serde_json::to_string_pretty(&serializable)
            .map_err(|source| StoreError::SerializationFailed { source })?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| StoreError::FileIo { source })?;

        // Only visible once it is on disk
        *sessions = serializable.sessions;
        Ok(())
    }
}
