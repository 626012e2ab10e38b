//! Application composition root
//!
//! `AppContext` owns the collaborators of the identity system and the one
//! [`IdentityResolver`] built on top of them. The application creates a
//! single context at startup and passes handles to it (or to its resolver)
//! to every consumer.

use std::sync::{Arc, OnceLock};

use handle_trait::Handle;

use crate::{
    IdentityResolver,
    auth::AuthProvider,
    store::{ContextKey, SessionStore},
};

/// Internal state for AppContext
struct AppContextInternal {
    context_key: ContextKey,
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn SessionStore>,
    /// Built on first access, then read without locking
    resolver: OnceLock<IdentityResolver>,
}

impl std::fmt::Debug for AppContextInternal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContextInternal")
            .field("context_key", &self.context_key)
            .field("auth", &"<AuthProvider>")
            .field("store", &"<SessionStore>")
            .field("resolver_initialized", &self.resolver.get().is_some())
            .finish()
    }
}

/// Application-scoped owner of the identity resolver.
///
/// AppContext is a cheap-to-clone handle around `Arc<AppContextInternal>`;
/// every clone hands out the same resolver.
///
/// ## Example
///
/// ```
/// # use std::sync::Arc;
/// # use biihlive_identity::{
/// #     AppContext, IdentityResolver,
/// #     auth::LocalAuthProvider,
/// #     store::{ContextKey, InMemory},
/// # };
/// let context = AppContext::new(
///     ContextKey::default(),
///     Arc::new(LocalAuthProvider::new()),
///     Arc::new(InMemory::new()),
/// );
///
/// let a = context.identity_resolver();
/// let b = context.clone().identity_resolver().clone();
/// assert!(IdentityResolver::same_instance(a, &b));
/// ```
#[derive(Clone, Debug, Handle)]
pub struct AppContext {
    inner: Arc<AppContextInternal>,
}

impl AppContext {
    /// Create the context. The resolver itself is built on first use.
    ///
    /// Each context owns its own resolver, so the composition root builds
    /// one context per context key and shares handles to it.
    pub fn new(
        context_key: ContextKey,
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            inner: Arc::new(AppContextInternal {
                context_key,
                auth,
                store,
                resolver: OnceLock::new(),
            }),
        }
    }

    /// Get the context key
    pub fn context_key(&self) -> &ContextKey {
        &self.inner.context_key
    }

    /// Get the auth provider
    pub fn auth_provider(&self) -> &Arc<dyn AuthProvider> {
        &self.inner.auth
    }

    /// Get the session store
    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.inner.store
    }

    /// Get the identity resolver, building it on first access.
    ///
    /// Concurrent first callers all observe the same single instance.
    pub fn identity_resolver(&self) -> &IdentityResolver {
        self.inner.resolver.get_or_init(|| {
            tracing::debug!(context_key = %self.inner.context_key, "Creating identity resolver");
            IdentityResolver::new(
                self.inner.context_key.clone(),
                self.inner.auth.clone(),
                self.inner.store.clone(),
            )
        })
    }
}
