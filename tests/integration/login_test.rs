//! Integration tests for the login, registration and logout flows.

mod helpers;

use mockito::Matcher;
use serde_json::json;

use helpers::{TestPortal, UNREACHABLE, login_body, token_for};
use portal_core::error::{ErrorKind, NETWORK_MESSAGE};
use portal_core::traits::KeyValueStore;
use portal_core::types::Role;

#[tokio::test]
async fn test_staff_login_persists_session_and_navigates() {
    let mut t = TestPortal::new().await;
    let login = t
        .server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({"username": "alice", "password": "x"})))
        .with_status(200)
        .with_body(login_body("staff_gudang"))
        .expect(1)
        .create_async()
        .await;

    let outcome = t.portal.login(Role::Staff).submit("alice", "x").await.unwrap();

    assert!(outcome.navigated);
    assert_eq!(outcome.user.role(), Some(Role::Staff));
    assert_eq!(t.visits(), vec!["/staff".to_string()]);

    let session = t.session().load().await.unwrap();
    assert_eq!(session.access_token, token_for("staff_gudang"));
    assert_eq!(session.refresh_token.as_deref(), Some("refresh-new"));
    assert_eq!(session.user.unwrap().username, "alice");
    assert_eq!(t.portal.oracle().role().await, Some(Role::Staff));
    login.assert_async().await;
}

#[tokio::test]
async fn test_admin_account_refused_by_staff_portal() {
    let mut t = TestPortal::new().await;
    t.sign_in("staff_gudang").await;
    t.server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(login_body("admin"))
        .create_async()
        .await;

    let err = t.portal.login(Role::Staff).submit("alice", "x").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::RoleMismatch);
    assert_eq!(err.message, "Warning: Admin accounts cannot sign in through this portal!");
    assert!(t.session().load().await.is_none());
    assert!(t.store.is_empty());
    assert!(t.visits().is_empty());
}

#[tokio::test]
async fn test_staff_account_refused_by_admin_portal() {
    let mut t = TestPortal::new().await;
    t.server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(login_body("staff_gudang"))
        .create_async()
        .await;

    let err = t.portal.login(Role::Admin).submit("budi", "x").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::RoleMismatch);
    assert_eq!(err.message, "Warning: Staff accounts cannot sign in through this portal!");
    assert!(!t.portal.oracle().is_authenticated().await);
    assert!(t.visits().is_empty());
}

#[tokio::test]
async fn test_login_error_without_message_uses_fallback() {
    let mut t = TestPortal::new().await;
    t.server
        .mock("POST", "/auth/login")
        .with_status(400)
        .with_body("{}")
        .create_async()
        .await;

    let err = t.portal.login(Role::Admin).submit("alice", "x").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Api);
    assert_eq!(err.message, "Login failed, check your credentials");
}

#[tokio::test]
async fn test_login_with_server_down() {
    let t = TestPortal::with_config(|c| c.api.base_url = UNREACHABLE.to_string()).await;

    let err = t.portal.login(Role::Admin).submit("alice", "x").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Network);
    assert_eq!(err.message, NETWORK_MESSAGE);
    assert!(t.visits().is_empty());
}

#[tokio::test]
async fn test_empty_credentials_rejected_locally() {
    let mut t = TestPortal::new().await;
    let login = t
        .server
        .mock("POST", "/auth/login")
        .expect(0)
        .create_async()
        .await;

    let err = t.portal.login(Role::Staff).submit("", "x").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "Username is required");
    login.assert_async().await;
}

#[tokio::test]
async fn test_stale_login_does_not_navigate() {
    let mut t = TestPortal::new().await;
    t.server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(login_body("admin"))
        .create_async()
        .await;

    let flow = t.portal.login(Role::Admin);
    let navigation = t.portal.client().navigation().clone();
    let (outcome, _) = futures::join!(flow.submit("alice", "x"), async {
        navigation.force("/admin/login");
    });

    let outcome = outcome.unwrap();
    assert!(!outcome.navigated);
    assert_eq!(t.visits(), vec!["/admin/login".to_string()]);
    assert!(t.portal.oracle().is_authenticated().await);
}

#[tokio::test]
async fn test_register_navigates_to_staff_login_without_session() {
    let mut t = TestPortal::new().await;
    let register = t
        .server
        .mock("POST", "/auth/register")
        .match_body(Matcher::Json(json!({
            "username": "budi",
            "password": "secret",
            "role": "staff_gudang",
            "warehouse_id": 2,
        })))
        .with_status(201)
        .with_body(login_body("staff_gudang"))
        .expect(1)
        .create_async()
        .await;

    let user = t.portal.register().submit("budi", "secret", Some(2)).await.unwrap();

    assert_eq!(user.role(), Some(Role::Staff));
    assert_eq!(t.visits(), vec!["/staff/login".to_string()]);
    assert!(t.session().load().await.is_none());
    register.assert_async().await;
}

#[tokio::test]
async fn test_register_failure_message() {
    let mut t = TestPortal::new().await;
    t.server
        .mock("POST", "/auth/register")
        .match_body(Matcher::PartialJson(json!({"username": "budi"})))
        .with_status(409)
        .with_body(r#"{"message":"Username already exists"}"#)
        .create_async()
        .await;
    t.server
        .mock("POST", "/auth/register")
        .match_body(Matcher::PartialJson(json!({"username": "empty"})))
        .with_status(500)
        .create_async()
        .await;

    let err = t.portal.register().submit("budi", "secret", None).await.unwrap_err();
    assert_eq!(err.message, "Username already exists");

    let err = t.portal.register().submit("empty", "secret", None).await.unwrap_err();
    assert_eq!(err.message, "Registration failed");
    assert!(t.visits().is_empty());
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    let mut t = TestPortal::new().await;
    t.sign_in("admin").await;
    let logout = t
        .server
        .mock("POST", "/auth/logout")
        .match_body(Matcher::Json(json!({"refreshToken": "refresh-1"})))
        .with_status(200)
        .with_body(r#"{"message":"Logged out"}"#)
        .expect(1)
        .create_async()
        .await;

    t.portal.logout().submit(Role::Admin).await;

    assert!(t.store.is_empty());
    assert_eq!(t.visits(), vec!["/admin/login".to_string()]);
    logout.assert_async().await;
}

#[tokio::test]
async fn test_logout_clears_locally_when_server_unreachable() {
    let t = TestPortal::with_config(|c| {
        c.api.base_url = UNREACHABLE.to_string();
    })
    .await;
    t.sign_in("staff_gudang").await;

    t.portal.logout().submit(Role::Staff).await;

    assert!(t.session().load().await.is_none());
    assert!(t.store.get("user").await.unwrap().is_none());
    assert_eq!(t.visits(), vec!["/staff/login".to_string()]);
}
