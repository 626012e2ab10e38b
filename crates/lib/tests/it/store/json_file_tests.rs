//! JSON file store: durability across reopen and write-through from the resolver.

use std::sync::Arc;

use biihlive_identity::{
    AppContext,
    auth::LocalAuthProvider,
    store::{ContextKey, SessionStore},
};

use crate::helpers::*;

#[tokio::test]
async fn test_missing_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_json_store(&dir.path().join("sessions.json")).await;

    assert_eq!(persisted_user_id(&store).await, None);
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");

    let store = open_json_store(&path).await;
    store
        .set(&ContextKey::default(), "u1".to_string())
        .await
        .unwrap();
    store
        .set(&ContextKey::new("secondary"), "u2".to_string())
        .await
        .unwrap();
    drop(store);

    let reopened = open_json_store(&path).await;
    assert_eq!(persisted_user_id(&reopened).await.as_deref(), Some("u1"));
    assert_eq!(
        reopened
            .get(&ContextKey::new("secondary"))
            .await
            .unwrap()
            .as_deref(),
        Some("u2")
    );
}

#[tokio::test]
async fn test_corrupted_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");
    tokio::fs::write(&path, "{ this is not json").await.unwrap();

    let err = biihlive_identity::store::JsonFile::open(&path)
        .await
        .unwrap_err();
    assert!(err.is_serialization_error());

    let err: biihlive_identity::Error = err.into();
    assert_eq!(err.module(), "store");
}

#[tokio::test]
async fn test_resolution_writes_through_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");

    let context = AppContext::new(
        ContextKey::default(),
        Arc::new(LocalAuthProvider::with_session(signed_in("u1"))),
        Arc::new(open_json_store(&path).await),
    );
    let user_id = context
        .identity_resolver()
        .resolve_current_user_id()
        .await
        .unwrap();
    assert_eq!(user_id, "u1");

    // An independent reader sees the resolved id
    let independent = open_json_store(&path).await;
    assert_eq!(persisted_user_id(&independent).await.as_deref(), Some("u1"));
}

#[tokio::test]
async fn test_legacy_value_on_disk_is_not_trusted_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");
    {
        let store = open_json_store(&path).await;
        store
            .set(&ContextKey::default(), "legacy".to_string())
            .await
            .unwrap();
    }

    // Fresh process: nobody signed in, only the persisted value remains
    let context = AppContext::new(
        ContextKey::default(),
        Arc::new(LocalAuthProvider::new()),
        Arc::new(open_json_store(&path).await),
    );

    let err = context
        .identity_resolver()
        .resolve_current_user_id()
        .await
        .unwrap_err();
    assert!(err.is_not_authenticated());
    assert_eq!(
        persisted_user_id(context.session_store().as_ref())
            .await
            .as_deref(),
        Some("legacy")
    );
}
