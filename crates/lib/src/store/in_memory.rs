//! Volatile session store.
//!
//! Nothing here outlives the process; use [`JsonFile`](super::JsonFile)
//! when the legacy session has to survive a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ContextKey, SessionStore, StoreError};

/// Session store kept entirely in memory.
#[derive(Debug, Default)]
pub struct InMemory {
    values: RwLock<HashMap<ContextKey, String>>,
}

impl InMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemory {
    async fn get(&self, key: &ContextKey) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &ContextKey, value: String) -> Result<(), StoreError> {
        self.values.write().await.insert(key.clone(), value);
        Ok(())
    }
}
