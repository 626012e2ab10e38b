//! User details resolution and its independent cache.

use biihlive_identity::{UserDetails, auth::SessionIdentity};

use crate::helpers::*;

#[tokio::test]
async fn test_details_from_full_session() {
    let session = SessionIdentity::new("u1")
        .with_email("a@x.com")
        .with_display_name("Ana")
        .with_avatar_url("https://cdn.biihlive.com/avatars/u1.jpg");
    let ctx = TestContext::new().with_session(session).await;

    let details = ctx.resolver().resolve_current_user_details().await.unwrap();

    assert_eq!(
        details,
        UserDetails {
            user_id: "u1".to_string(),
            email: Some("a@x.com".to_string()),
            display_name: Some("Ana".to_string()),
            avatar_url: Some("https://cdn.biihlive.com/avatars/u1.jpg".to_string()),
        }
    );
}

#[tokio::test]
async fn test_cached_details_ignore_provider_changes() {
    let ctx = TestContext::new()
        .with_session(SessionIdentity::new("u1").with_email("a@x.com"))
        .await;
    let cached = ctx.resolver().resolve_current_user_details().await.unwrap();

    ctx.auth().sign_out().await;
    assert_eq!(
        ctx.resolver().resolve_current_user_details().await.unwrap(),
        cached
    );

    ctx.auth().sign_in(signed_in("u2")).await;
    assert_eq!(
        ctx.resolver().resolve_current_user_details().await.unwrap(),
        cached
    );
}

#[tokio::test]
async fn test_details_cache_survives_failed_id_resolution() {
    let ctx = TestContext::new().with_session(signed_in("u1")).await;
    ctx.resolver().resolve_current_user_id().await.unwrap();
    let details = ctx.resolver().resolve_current_user_details().await.unwrap();

    ctx.auth().sign_out().await;
    assert!(ctx.resolver().resolve_current_user_id().await.is_err());

    // The id cache was purged but the details cache is invalidated separately
    assert_eq!(ctx.resolver().cached_user_id(), None);
    assert_eq!(ctx.resolver().cached_details(), Some(details));
}

#[tokio::test]
async fn test_details_without_session_fail() {
    let ctx = TestContext::new();

    let err = ctx
        .resolver()
        .resolve_current_user_details()
        .await
        .unwrap_err();
    assert!(err.is_not_authenticated());
    assert!(err.auth_cause().is_none());
}
