//! Persisted session storage
//!
//! A session store is a small durable key-value map. The identity resolver
//! keeps one value in it per [`ContextKey`]: the user id of the last
//! successful resolution. Values survive process restarts but are never
//! trusted on their own.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod in_memory;
pub mod json_file;

pub use errors::StoreError;
pub use in_memory::InMemory;
pub use json_file::JsonFile;

/// Context key used when the application does not pick its own.
pub const DEFAULT_CONTEXT_KEY: &str = "biihlive";

/// Application-scoped key under which a session is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextKey(String);

impl ContextKey {
    /// Create a key from any string-like value
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContextKey {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_KEY)
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContextKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ContextKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Durable key-value storage for persisted sessions.
///
/// All implementations must be `Send` and `Sync` so a single store can be
/// shared by every task holding the resolver.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &ContextKey) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Returns only once the value is durable for this store type.
    async fn set(&self, key: &ContextKey, value: String) -> Result<(), StoreError>;
}
