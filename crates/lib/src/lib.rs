//!
//! Biihlive identity: resolves the current user of the Biihlive client.
//!
//! ## Core Concepts
//!
//! * **Auth providers (`auth::AuthProvider`)**: The live source of truth for who is signed in.
//!   A provider hands out at most one `auth::SessionIdentity`, which may be anonymous.
//! * **Session stores (`store::SessionStore`)**: Durable key-value storage holding the user id
//!   saved by a previous sign-in, keyed by a `store::ContextKey`.
//! * **Identity resolver (`identity::IdentityResolver`)**: Combines the provider, an in-memory
//!   cache and the session store behind a strict precedence policy. Only a live, non-anonymous
//!   session ever produces a user id.
//! * **App context (`context::AppContext`)**: The composition root that owns exactly one
//!   resolver per context key and hands out shared handles to it.

pub mod auth;
pub mod context;
pub mod identity;
pub mod store;

pub use context::AppContext;
pub use identity::{IdentityError, IdentityResolver, UserDetails};

/// Result type used throughout the Biihlive identity library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Biihlive identity library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured identity resolution errors from the identity module
    #[error(transparent)]
    Identity(identity::IdentityError),

    /// Structured auth provider errors from the auth module
    #[error(transparent)]
    Auth(auth::AuthError),

    /// Structured session store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Identity(_) => "identity",
            Error::Auth(_) => "auth",
            Error::Store(_) => "store",
        }
    }

    /// Check if this error means the user has to sign in again.
    pub fn is_not_authenticated(&self) -> bool {
        match self {
            Error::Identity(identity_err) => identity_err.is_not_authenticated(),
            _ => false,
        }
    }

    /// Check if this error came from the auth provider.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Auth(auth_err) => auth_err.is_io_error(),
            Error::Store(store_err) => store_err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error is a serialization or deserialization failure.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Auth(auth_err) => auth_err.is_malformed(),
            Error::Store(store_err) => store_err.is_serialization_error(),
            _ => false,
        }
    }
}
