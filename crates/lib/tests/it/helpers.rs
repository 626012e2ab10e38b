#![allow(dead_code)]

use std::{path::Path, sync::Arc};

use biihlive_identity::{
    AppContext,
    auth::{LocalAuthProvider, SessionIdentity},
    store::{ContextKey, InMemory, JsonFile, SessionStore},
};

// Re-export TestContext for convenience
pub use crate::context::TestContext;

/// Signed-in session with an email, as most scenarios use
pub fn signed_in(id: &str) -> SessionIdentity {
    SessionIdentity::new(id).with_email(format!("{id}@biihlive.test"))
}

/// Build an AppContext over in-memory collaborators.
pub fn in_memory_context(
    session: Option<SessionIdentity>,
) -> (AppContext, Arc<LocalAuthProvider>, Arc<InMemory>) {
    let auth = Arc::new(match session {
        Some(session) => LocalAuthProvider::with_session(session),
        None => LocalAuthProvider::new(),
    });
    let store = Arc::new(InMemory::new());
    let context = AppContext::new(ContextKey::default(), auth.clone(), store.clone());
    (context, auth, store)
}

/// Open a JSON file store, panicking on failure.
pub async fn open_json_store(path: &Path) -> JsonFile {
    JsonFile::open(path)
        .await
        .expect("Failed to open JSON session store")
}

/// Read the persisted value for the default context key.
pub async fn persisted_user_id(store: &dyn SessionStore) -> Option<String> {
    store
        .get(&ContextKey::default())
        .await
        .expect("Failed to read session store")
}
