//! Integration tests for the refresh-and-retry protocol.

mod helpers;

use futures::future::join_all;
use mockito::Matcher;

use helpers::{TestPortal, UNREACHABLE};
use portal_core::error::ErrorKind;

const PROFILE_BODY: &str = r#"{"message":"ok","data":{"id":7,"username":"alice","role":"staff_gudang"}}"#;

#[tokio::test]
async fn test_single_401_refreshes_once_and_retries_once() {
    let mut t = TestPortal::new().await;
    t.sign_in_with("staff_gudang", "stale-access").await;

    let rejected = t
        .server
        .mock("GET", "/auth/profile")
        .match_header("authorization", "Bearer stale-access")
        .with_status(401)
        .with_body(r#"{"message":"jwt expired"}"#)
        .expect(1)
        .create_async()
        .await;
    let refresh = t
        .server
        .mock("POST", "/auth/refresh")
        .match_body(Matcher::Json(serde_json::json!({"token": "refresh-1"})))
        .with_status(200)
        .with_body(r#"{"data":{"accessToken":"fresh-access"}}"#)
        .expect(1)
        .create_async()
        .await;
    let retried = t
        .server
        .mock("GET", "/auth/profile")
        .match_header("authorization", "Bearer fresh-access")
        .with_status(200)
        .with_body(PROFILE_BODY)
        .expect(1)
        .create_async()
        .await;

    let profile = t.portal.profile().get_me().await.unwrap();

    assert_eq!(profile.username, "alice");
    assert_eq!(t.session().access_token().await.as_deref(), Some("fresh-access"));
    assert_eq!(t.session().refresh_token().await.as_deref(), Some("refresh-1"));
    assert!(t.visits().is_empty());
    rejected.assert_async().await;
    refresh.assert_async().await;
    retried.assert_async().await;
}

#[tokio::test]
async fn test_401_after_retry_is_surfaced() {
    let mut t = TestPortal::new().await;
    t.sign_in("admin").await;

    let profile = t
        .server
        .mock("GET", "/auth/profile")
        .with_status(401)
        .with_body(r#"{"message":"Unauthorized"}"#)
        .expect(2)
        .create_async()
        .await;
    let refresh = t
        .server
        .mock("POST", "/auth/refresh")
        .with_status(200)
        .with_body(r#"{"data":{"accessToken":"fresh-access"}}"#)
        .expect(1)
        .create_async()
        .await;

    let err = t.portal.profile().get_me().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Unauthorized");
    assert!(t.visits().is_empty());
    profile.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_login_401_never_refreshes() {
    let mut t = TestPortal::new().await;
    t.sign_in("admin").await;

    t.server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_body(r#"{"message":"Invalid username or password"}"#)
        .expect(1)
        .create_async()
        .await;
    let refresh = t
        .server
        .mock("POST", "/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let err = t
        .portal
        .login(portal_core::types::Role::Admin)
        .submit("alice", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.status, Some(401));
    assert_eq!(err.message, "Invalid username or password");
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_refresh_logs_out_to_cached_portal() {
    let mut t = TestPortal::with_config(|c| c.api.auth_base_url = Some(UNREACHABLE.to_string())).await;
    t.sign_in("staff_gudang").await;

    t.server
        .mock("GET", "/auth/profile")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let err = t.portal.profile().get_me().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::RefreshExhausted);
    assert!(t.session().load().await.is_none());
    assert!(t.session().refresh_token().await.is_none());
    assert!(t.store.is_empty());
    assert_eq!(t.visits(), vec!["/staff/login".to_string()]);
}

#[tokio::test]
async fn test_rejected_refresh_sends_admin_to_admin_login() {
    let mut t = TestPortal::new().await;
    t.sign_in("admin").await;

    t.server
        .mock("GET", "/warehouses/list")
        .with_status(401)
        .create_async()
        .await;
    t.server
        .mock("POST", "/auth/refresh")
        .with_status(401)
        .with_body(r#"{"message":"Invalid refresh token"}"#)
        .expect(1)
        .create_async()
        .await;

    let err = t.portal.warehouses().list_public().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::RefreshExhausted);
    assert_eq!(t.visits(), vec!["/admin/login".to_string()]);
    assert!(!t.portal.oracle().is_authenticated().await);
}

#[tokio::test]
async fn test_unparseable_cached_user_falls_back_to_home() {
    use portal_core::traits::KeyValueStore;

    let mut t = TestPortal::new().await;
    t.store.set("accessToken", "stale").await.unwrap();
    t.store.set("refreshToken", "refresh-1").await.unwrap();
    t.store.set("user", "{not json").await.unwrap();

    t.server
        .mock("GET", "/auth/profile")
        .with_status(401)
        .create_async()
        .await;
    t.server
        .mock("POST", "/auth/refresh")
        .with_status(500)
        .create_async()
        .await;

    let err = t.portal.profile().get_me().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::RefreshExhausted);
    assert_eq!(t.visits(), vec!["/".to_string()]);
    assert!(t.store.is_empty());
}

#[tokio::test]
async fn test_concurrent_401s_share_one_refresh() {
    let mut t = TestPortal::new().await;
    t.sign_in_with("staff_gudang", "stale-access").await;

    t.server
        .mock("GET", "/auth/profile")
        .match_header("authorization", "Bearer stale-access")
        .with_status(401)
        .expect_at_least(1)
        .create_async()
        .await;
    let refresh = t
        .server
        .mock("POST", "/auth/refresh")
        .with_status(200)
        .with_body(r#"{"data":{"accessToken":"fresh-access"}}"#)
        .expect(1)
        .create_async()
        .await;
    let retried = t
        .server
        .mock("GET", "/auth/profile")
        .match_header("authorization", "Bearer fresh-access")
        .with_status(200)
        .with_body(PROFILE_BODY)
        .expect(5)
        .create_async()
        .await;

    let service = t.portal.profile();
    let results = join_all((0..5).map(|_| service.get_me())).await;

    assert!(results.iter().all(|r| r.is_ok()));
    assert!(t.visits().is_empty());
    refresh.assert_async().await;
    retried.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_401s_refresh_independently_without_single_flight() {
    let mut t = TestPortal::with_config(|c| c.api.single_flight_refresh = false).await;
    t.sign_in_with("staff_gudang", "stale-access").await;

    t.server
        .mock("GET", "/auth/profile")
        .match_header("authorization", "Bearer stale-access")
        .with_status(401)
        .expect(3)
        .create_async()
        .await;
    let refresh = t
        .server
        .mock("POST", "/auth/refresh")
        .with_status(200)
        .with_body(r#"{"data":{"accessToken":"fresh-access"}}"#)
        .expect(3)
        .create_async()
        .await;
    t.server
        .mock("GET", "/auth/profile")
        .match_header("authorization", "Bearer fresh-access")
        .with_status(200)
        .with_body(PROFILE_BODY)
        .expect(3)
        .create_async()
        .await;

    let service = t.portal.profile();
    let results = join_all((0..3).map(|_| service.get_me())).await;

    assert!(results.iter().all(|r| r.is_ok()));
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_401s_after_failed_refresh_log_out_once() {
    let mut t = TestPortal::new().await;
    t.sign_in_with("admin", "stale-access").await;

    t.server
        .mock("GET", "/auth/profile")
        .match_header("authorization", "Bearer stale-access")
        .with_status(401)
        .expect(4)
        .create_async()
        .await;
    let refresh = t
        .server
        .mock("POST", "/auth/refresh")
        .with_status(401)
        .with_body(r#"{"message":"Refresh token expired"}"#)
        .expect(1)
        .create_async()
        .await;

    let service = t.portal.profile();
    let results = join_all((0..4).map(|_| service.get_me())).await;

    assert!(
        results
            .iter()
            .all(|r| matches!(r, Err(e) if e.kind == ErrorKind::RefreshExhausted))
    );
    assert_eq!(t.visits(), vec!["/admin/login".to_string()]);
    assert!(t.store.is_empty());
    refresh.assert_async().await;
}
