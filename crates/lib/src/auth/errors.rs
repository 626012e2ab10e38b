//! Authentication error types for the Biihlive identity library.
//!
//! These errors describe failures to read the live session from an auth
//! provider. The identity resolver never surfaces them directly; they are
//! carried as the source of an `IdentityError`.

use std::path::PathBuf;

use thiserror::Error as ThisError;

use crate::Error;

/// Errors that can occur while reading the current session.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum AuthError {
    /// The provider could not produce its session state.
    #[error("Session unavailable: {reason}")]
    SessionUnavailable {
        /// Description of why the session could not be read
        reason: String,
    },

    /// The session file could not be read.
    #[error("Failed to read session file {}: {source}", .path.display())]
    SessionFile {
        /// Path of the session file
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The session file exists but does not hold a valid session.
    #[error("Malformed session file {}: {source}", .path.display())]
    MalformedSession {
        /// Path of the session file
        path: PathBuf,
        /// The underlying parse error
        source: serde_json::Error,
    },
}

impl AuthError {
    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, AuthError::SessionFile { .. })
    }

    /// Check if this error means the session data itself is invalid.
    pub fn is_malformed(&self) -> bool {
        matches!(self, AuthError::MalformedSession { .. })
    }

    /// Get the session file path if this error is about a session file.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            AuthError::SessionFile { path, .. } | AuthError::MalformedSession { path, .. } => {
                Some(path.as_path())
            }
            _ => None,
        }
    }
}

// Conversion from AuthError to the main Error type
impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        Error::Auth(err)
    }
}
