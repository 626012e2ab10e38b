//! In-process auth provider
//!
//! Holds at most one session in memory. Useful for tests, for tooling that
//! replays a captured session file, and as the reference implementation of
//! [`AuthProvider`].

use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AuthError, AuthProvider, SessionIdentity};

/// Auth provider backed by an in-memory session slot.
#[derive(Debug, Default)]
pub struct LocalAuthProvider {
    session: RwLock<Option<SessionIdentity>>,
}

impl LocalAuthProvider {
    /// Create a provider with nobody signed in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider that already holds `session`.
    pub fn with_session(session: SessionIdentity) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }

    /// Load the session from a JSON file.
    ///
    /// If the file does not exist, the provider starts with no session.
    ///
    /// # Arguments
    /// * `path` - Path to a JSON-encoded [`SessionIdentity`]
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, AuthError> {
        let path = path.as_ref();
        match tokio::fs::read_to_string(path).await {
            Ok(json) => {
                let session: SessionIdentity =
                    serde_json::from_str(&json).map_err(|source| AuthError::MalformedSession {
                        path: path.to_path_buf(),
                        source,
                    })?;
                tracing::debug!(path = %path.display(), "Loaded session file");
                Ok(Self::with_session(session))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(source) => Err(AuthError::SessionFile {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Replace the current session.
    pub async fn sign_in(&self, session: SessionIdentity) {
        *self.session.write().await = Some(session);
    }

    /// Drop the current session, if any.
    pub async fn sign_out(&self) {
        self.session.write().await.take();
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    async fn current_session(&self) -> Result<Option<SessionIdentity>, AuthError> {
        Ok(self.session.read().await.clone())
    }
}
