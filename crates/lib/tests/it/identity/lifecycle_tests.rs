//! Login/logout signals and the single-resolver guarantee.

use biihlive_identity::{IdentityResolver, auth::AuthProvider};

use crate::helpers::*;

#[tokio::test]
async fn test_logout_then_resolve_fails() {
    let ctx = TestContext::new().with_session(signed_in("u1")).await;
    ctx.resolver().resolve_current_user_id().await.unwrap();
    ctx.resolver().resolve_current_user_details().await.unwrap();

    ctx.auth().sign_out().await;
    ctx.resolver().on_logout();

    assert_eq!(ctx.resolver().cached_user_id(), None);
    assert_eq!(ctx.resolver().cached_details(), None);
    assert!(
        ctx.resolver()
            .resolve_current_user_details()
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_login_completed_refreshes_details_for_new_user() {
    let ctx = TestContext::new().with_session(signed_in("u1")).await;
    let first = ctx.resolver().resolve_current_user_details().await.unwrap();
    assert_eq!(first.user_id, "u1");

    ctx.auth().sign_in(signed_in("u2")).await;
    ctx.resolver().on_login_completed();

    let second = ctx.resolver().resolve_current_user_details().await.unwrap();
    assert_eq!(second.user_id, "u2");
    assert_eq!(second.email.as_deref(), Some("u2@biihlive.test"));
}

#[tokio::test]
async fn test_repeated_signals_are_idempotent() {
    let ctx = TestContext::new().with_session(signed_in("u1")).await;
    ctx.resolver().resolve_current_user_id().await.unwrap();

    for _ in 0..3 {
        ctx.resolver().on_login_completed();
        ctx.resolver().on_logout();
    }

    assert_eq!(ctx.resolver().cached_user_id(), None);
    assert_eq!(ctx.resolver().cached_details(), None);
    // The persisted value is left alone by the signals
    assert_eq!(persisted_user_id(ctx.store()).await.as_deref(), Some("u1"));
}

#[tokio::test]
async fn test_resolver_shared_across_tasks() {
    let (context, _auth, _store) = in_memory_context(Some(signed_in("u1")));

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let context = context.clone();
        tasks.push(tokio::spawn(async move {
            let resolver = context.identity_resolver().clone();
            let user_id = resolver.resolve_current_user_id().await.unwrap();
            (resolver, user_id)
        }));
    }

    let first = context.identity_resolver();
    for task in tasks {
        let (resolver, user_id) = task.await.unwrap();
        assert_eq!(user_id, "u1");
        assert!(IdentityResolver::same_instance(first, &resolver));
    }
}

#[tokio::test]
async fn test_context_collaborators_are_the_ones_given() {
    let (context, auth, store) = in_memory_context(None);

    auth.sign_in(signed_in("u1")).await;
    let session = context
        .auth_provider()
        .current_session()
        .await
        .unwrap()
        .expect("Session should be visible through the context");
    assert_eq!(session.id, "u1");

    context.identity_resolver().resolve_current_user_id().await.unwrap();
    assert_eq!(persisted_user_id(store.as_ref()).await.as_deref(), Some("u1"));
    assert_eq!(
        persisted_user_id(context.session_store().as_ref()).await.as_deref(),
        Some("u1")
    );
}
