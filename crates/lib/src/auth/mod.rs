//! Authentication provider abstraction for Biihlive
//!
//! The auth provider is the live source of truth for the signed-in user.
//! Everything else in this crate only ever reads from it.

use async_trait::async_trait;

pub mod errors;
pub mod local;
pub mod types;

// Re-export main types for easier access
pub use errors::AuthError;
pub use local::LocalAuthProvider;
pub use types::SessionIdentity;

/// Trait for the provider that issues and holds the authenticated session.
///
/// Implementations wrap whatever backend actually signs users in. The
/// provider is expected to answer from local state, so callers treat a read
/// as near-instant and never retry it.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Returns the live session, or `None` when nobody is signed in.
    ///
    /// An anonymous session is still a session; it is up to the caller to
    /// decide whether anonymous sessions are acceptable.
    async fn current_session(&self) -> Result<Option<SessionIdentity>, AuthError>;
}
