//! Session store error types.

use thiserror::Error;

/// Errors that can occur while reading or writing a session store.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("Session store file I/O failed: {source}")]
    FileIo { source: std::io::Error },

    /// The store contents could not be serialized
    #[error("Failed to serialize session store: {source}")]
    SerializationFailed { source: serde_json::Error },

    /// The backing file does not hold a valid store
    #[error("Failed to deserialize session store: {source}")]
    DeserializationFailed { source: serde_json::Error },
}

impl StoreError {
    /// Check if this error is I/O related
    pub fn is_io_error(&self) -> bool {
        matches!(self, StoreError::FileIo { .. })
    }

    /// Check if this error is related to serialization
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            StoreError::SerializationFailed { .. } | StoreError::DeserializationFailed { .. }
        )
    }
}

// Conversion from StoreError to the main Error type
impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
