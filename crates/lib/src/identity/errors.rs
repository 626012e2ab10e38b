//! Error types for identity resolution

use thiserror::Error;

use crate::auth::AuthError;

/// The one way identity resolution can fail.
///
/// Every failure path (no session, anonymous session, stale cache, provider
/// read failure) collapses into `NotAuthenticated`. The `reason` is for
/// diagnostics only; callers should route the user to sign-in regardless.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Not authenticated: {reason}")]
    NotAuthenticated {
        reason: String,
        /// Provider error that caused the failure, if there was one
        #[source]
        source: Option<AuthError>,
    },
}

impl IdentityError {
    pub(crate) fn not_authenticated(reason: impl Into<String>) -> Self {
        IdentityError::NotAuthenticated {
            reason: reason.into(),
            source: None,
        }
    }

    pub(crate) fn from_auth(reason: impl Into<String>, source: AuthError) -> Self {
        IdentityError::NotAuthenticated {
            reason: reason.into(),
            source: Some(source),
        }
    }

    /// Check if this error means the user has to sign in again.
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, IdentityError::NotAuthenticated { .. })
    }

    /// Diagnostic description of the failure.
    pub fn reason(&self) -> &str {
        match self {
            IdentityError::NotAuthenticated { reason, .. } => reason.as_str(),
        }
    }

    /// The provider error behind this failure, if any.
    pub fn auth_cause(&self) -> Option<&AuthError> {
        match self {
            IdentityError::NotAuthenticated { source, .. } => source.as_ref(),
        }
    }
}

impl From<IdentityError> for crate::Error {
    fn from(err: IdentityError) -> Self {
        crate::Error::Identity(err)
    }
}
