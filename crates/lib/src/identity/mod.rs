//! Current-user identity resolution
//!
//! Answers "who is signed in" for the rest of the client. The live auth
//! session is the single source of truth; the in-memory caches and the
//! persisted legacy session never produce a user id on their own.

pub mod errors;
pub mod resolver;
pub mod types;

pub use errors::IdentityError;
pub use resolver::IdentityResolver;
pub use types::UserDetails;
