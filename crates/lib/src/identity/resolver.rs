//! The identity resolver
//!
//! Resolution order is strict: a live, non-anonymous session from the auth
//! provider is the only thing that ever yields a user id. The in-memory cache
//! and the persisted legacy session are consulted only to log and discard
//! state that disagrees with the provider.
//!
//! ## Concurrency
//!
//! Resolutions are not serialized against each other. Each cache is a single
//! slot that is replaced wholesale, so a reader never sees a partial value,
//! but two concurrent resolutions may race and the last writer wins. Both
//! writers derive their value from the same provider, so the race only
//! matters if the provider's session changes mid-flight.
//!
//! The two caches are invalidated independently: a cached [`UserDetails`]
//! is returned without re-checking the provider, even if a later
//! [`IdentityResolver::resolve_current_user_id`] has discarded the cached id.

use std::sync::{Arc, PoisonError, RwLock};

use handle_trait::Handle;

use super::{IdentityError, UserDetails};
use crate::{
    auth::{AuthProvider, SessionIdentity},
    store::{ContextKey, SessionStore},
};

/// Internal state for IdentityResolver
///
/// IdentityResolver itself is just a cheap-to-clone handle wrapping
/// Arc<ResolverInternal>.
struct ResolverInternal {
    /// Key the legacy session is persisted under
    context_key: ContextKey,
    /// Live source of truth for the signed-in user
    auth: Arc<dyn AuthProvider>,
    /// Durable legacy session storage
    store: Arc<dyn SessionStore>,
    /// User id copied from the last successful resolution
    cached_user_id: RwLock<Option<String>>,
    /// Profile snapshot from the last successful details resolution
    cached_details: RwLock<Option<UserDetails>>,
}

impl std::fmt::Debug for ResolverInternal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverInternal")
            .field("context_key", &self.context_key)
            .field("auth", &"<AuthProvider>")
            .field("store", &"<SessionStore>")
            .field("cached_user_id", &read_slot(&self.cached_user_id))
            .field("cached_details", &read_slot(&self.cached_details))
            .finish()
    }
}

fn read_slot<T: Clone>(slot: &RwLock<Option<T>>) -> Option<T> {
    slot.read().unwrap_or_else(PoisonError::into_inner).clone()
}

fn write_slot<T>(slot: &RwLock<Option<T>>, value: T) {
    *slot.write().unwrap_or_else(PoisonError::into_inner) = Some(value);
}

fn take_slot<T>(slot: &RwLock<Option<T>>) -> Option<T> {
    slot.write().unwrap_or_else(PoisonError::into_inner).take()
}

/// Resolves the current user of the application.
///
/// One resolver should exist per process and context key; see
/// [`AppContext`](crate::AppContext) for the owner that enforces that.
/// Cloning an `IdentityResolver` hands out another handle to the same
/// resolver and the same caches.
///
/// ## Example
///
/// ```
/// # use std::sync::Arc;
/// # use biihlive_identity::{
/// #     IdentityResolver,
/// #     auth::{LocalAuthProvider, SessionIdentity},
/// #     store::{ContextKey, InMemory},
/// # };
/// # #[tokio::main]
/// # async fn main() -> biihlive_identity::Result<()> {
/// let auth = Arc::new(LocalAuthProvider::with_session(SessionIdentity::new("u1")));
/// let resolver = IdentityResolver::new(ContextKey::default(), auth, Arc::new(InMemory::new()));
///
/// assert_eq!(resolver.resolve_current_user_id().await?, "u1");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Handle)]
pub struct IdentityResolver {
    inner: Arc<ResolverInternal>,
}

impl IdentityResolver {
    /// Create a resolver over the given provider and store.
    ///
    /// # Arguments
    /// * `context_key` - Key the legacy session is persisted under
    /// * `auth` - The live auth provider
    /// * `store` - Durable storage for the legacy session
    pub fn new(
        context_key: ContextKey,
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            inner: Arc::new(ResolverInternal {
                context_key,
                auth,
                store,
                cached_user_id: RwLock::new(None),
                cached_details: RwLock::new(None),
            }),
        }
    }

    /// Get the context key this resolver persists under
    pub fn context_key(&self) -> &ContextKey {
        &self.inner.context_key
    }

    /// Check whether two handles point at the same resolver.
    pub fn same_instance(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Resolve the authoritative id of the signed-in user.
    ///
    /// Only a live, non-anonymous session succeeds. On success the id is
    /// cached and written through to the session store. On failure a cached
    /// id is considered stale and discarded; if there was none, a persisted
    /// legacy session is reported in the logs but never returned.
    ///
    /// # Errors
    /// Returns [`IdentityError::NotAuthenticated`] whenever there is no
    /// usable live session.
    pub async fn resolve_current_user_id(&self) -> Result<String, IdentityError> {
        let inner = &self.inner;

        let mut auth_failure = None;
        let session = match inner.auth.current_session().await {
            Ok(session) => session,
            Err(e) => {
                tracing::error!(
                    context_key = %inner.context_key,
                    error = %e,
                    "Failed to read the current session"
                );
                auth_failure = Some(e);
                None
            }
        };

        let reason = match session {
            Some(SessionIdentity {
                id,
                is_anonymous: false,
                ..
            }) => {
                tracing::debug!(user_id = %id, "Resolved user id from live session");
                write_slot(&inner.cached_user_id, id.clone());
                // The live session stays authoritative even if it can't be persisted.
                if let Err(e) = inner.store.set(&inner.context_key, id.clone()).await {
                    tracing::error!(
                        context_key = %inner.context_key,
                        error = %e,
                        "Failed to persist resolved user id"
                    );
                }
                return Ok(id);
            }
            Some(session) => {
                tracing::debug!(user_id = %session.id, "Current session is anonymous");
                "only an anonymous session is available"
            }
            None => "no authenticated session",
        };

        if let Some(stale) = take_slot(&inner.cached_user_id) {
            tracing::warn!(
                cached_user_id = %stale,
                "Cached user id has no valid live session, discarding it"
            );
        } else {
            match inner.store.get(&inner.context_key).await {
                Ok(Some(legacy)) => tracing::warn!(
                    context_key = %inner.context_key,
                    legacy_user_id = %legacy,
                    "Found a persisted legacy session; re-authentication is required"
                ),
                Ok(None) => {}
                Err(e) => tracing::error!(
                    context_key = %inner.context_key,
                    error = %e,
                    "Failed to read persisted session"
                ),
            }
        }

        Err(match auth_failure {
            Some(source) => IdentityError::from_auth("failed to read the current session", source),
            None => IdentityError::not_authenticated(reason),
        })
    }

    /// Resolve a profile snapshot of the signed-in user.
    ///
    /// A cached snapshot is returned as-is without consulting the provider.
    /// Otherwise the snapshot is built from the live session (anonymous
    /// sessions included) and cached.
    ///
    /// # Errors
    /// Returns [`IdentityError::NotAuthenticated`] if there is no session or
    /// the provider fails; a provider error is kept as the error's source.
    pub async fn resolve_current_user_details(&self) -> Result<UserDetails, IdentityError> {
        let inner = &self.inner;

        if let Some(details) = read_slot(&inner.cached_details) {
            tracing::debug!(user_id = %details.user_id, "Returning cached user details");
            return Ok(details);
        }

        match inner.auth.current_session().await {
            Ok(Some(session)) => {
                let details = UserDetails::from(&session);
                write_slot(&inner.cached_details, details.clone());
                tracing::debug!(user_id = %details.user_id, "Resolved user details from live session");
                Ok(details)
            }
            Ok(None) => Err(IdentityError::not_authenticated(
                "no authenticated session",
            )),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read session details");
                Err(IdentityError::from_auth("failed to read session details", e))
            }
        }
    }

    /// Check whether a live, non-anonymous session is available.
    ///
    /// Runs a full [`resolve_current_user_id`](Self::resolve_current_user_id),
    /// including its cache and store side effects.
    pub async fn is_authenticated(&self) -> bool {
        self.resolve_current_user_id().await.is_ok()
    }

    /// Signal that a sign-in just completed.
    ///
    /// Clears both caches so nothing from a previous session leaks into the
    /// new one.
    pub fn on_login_completed(&self) {
        self.clear_caches();
        tracing::debug!(context_key = %self.inner.context_key, "Login completed, caches cleared");
    }

    /// Signal that the user signed out. Clears both caches.
    pub fn on_logout(&self) {
        self.clear_caches();
        tracing::debug!(context_key = %self.inner.context_key, "Logged out, caches cleared");
    }

    /// Snapshot of the cached user id
    pub fn cached_user_id(&self) -> Option<String> {
        read_slot(&self.inner.cached_user_id)
    }

    /// Snapshot of the cached user details
    pub fn cached_details(&self) -> Option<UserDetails> {
        read_slot(&self.inner.cached_details)
    }

    fn clear_caches(&self) {
        take_slot(&self.inner.cached_user_id);
        take_slot(&self.inner.cached_details);
    }

    #[cfg(test)]
    pub(crate) fn seed_cached_user_id(&self, user_id: impl Into<String>) {
        write_slot(&self.inner.cached_user_id, user_id.into());
    }

    #[cfg(test)]
    pub(crate) fn seed_cached_details(&self, details: UserDetails) {
        write_slot(&self.inner.cached_details, details);
    }
}
