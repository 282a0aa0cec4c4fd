//! Integration tests for the route guard and the persisted session.

mod helpers;

use std::sync::Arc;

use serde_json::json;

use helpers::{TestPortal, mint, token_for, user};
use portal_auth::{GuardDecision, RecordingNavigator, Session};
use portal_client::Portal;
use portal_core::config::{AppConfig, StorageBackend};
use portal_core::traits::KeyValueStore;
use portal_core::types::Role;

fn redirect(to: &str) -> GuardDecision {
    GuardDecision::Redirect(to.to_string())
}

#[tokio::test]
async fn test_admin_page_without_token_goes_to_admin_login() {
    let t = TestPortal::new().await;
    assert_eq!(t.portal.guard().check("/admin/users").await, redirect("/admin/login"));
    assert_eq!(t.portal.guard().check("/admin").await, redirect("/admin/login"));
}

#[tokio::test]
async fn test_staff_token_on_admin_page_goes_to_staff_home() {
    let t = TestPortal::new().await;
    t.sign_in("staff_gudang").await;

    assert_eq!(t.portal.guard().check("/admin/settings").await, redirect("/staff"));
    assert!(t.portal.oracle().is_authenticated().await);
}

#[tokio::test]
async fn test_matching_role_may_enter() {
    let t = TestPortal::new().await;
    t.sign_in("admin").await;

    assert_eq!(t.portal.guard().check("/admin/users").await, GuardDecision::Allow);
    assert_eq!(t.portal.guard().check("/staff/stock").await, redirect("/admin"));
}

#[tokio::test]
async fn test_login_pages_bounce_signed_in_users() {
    let t = TestPortal::new().await;
    t.sign_in("staff_gudang").await;

    assert_eq!(t.portal.guard().check("/admin/login").await, redirect("/staff"));
    assert_eq!(t.portal.guard().check("/staff/register").await, redirect("/staff"));
}

#[tokio::test]
async fn test_login_page_clears_garbage_and_renders() {
    let t = TestPortal::new().await;
    t.store.set("accessToken", "not-a-token").await.unwrap();
    t.store.set("refreshToken", "refresh-1").await.unwrap();

    assert_eq!(t.portal.guard().check("/staff/login").await, GuardDecision::Allow);
    assert!(t.store.is_empty());
}

#[tokio::test]
async fn test_unknown_role_is_cleared_and_sent_to_login() {
    let t = TestPortal::new().await;
    t.sign_in_with("auditor", &token_for("auditor")).await;

    assert_eq!(t.portal.guard().check("/staff").await, redirect("/staff/login"));
    assert!(t.session().load().await.is_none());
}

#[tokio::test]
async fn test_public_pages_always_render() {
    let t = TestPortal::new().await;
    assert_eq!(t.portal.guard().check("/").await, GuardDecision::Allow);
    assert_eq!(t.portal.guard().check("/about").await, GuardDecision::Allow);
}

// Known gap: expiry is not checked locally; an expired token keeps passing
// the guard until the backend answers 401.
#[tokio::test]
async fn test_expired_token_still_passes_guard() {
    let t = TestPortal::new().await;
    let expired = mint(json!({"role": "admin", "exp": 1}));
    t.sign_in_with("admin", &expired).await;

    assert!(t.portal.oracle().is_authenticated().await);
    assert_eq!(t.portal.guard().check("/admin").await, GuardDecision::Allow);
}

#[tokio::test]
async fn test_clear_twice_leaves_nothing() {
    let t = TestPortal::new().await;
    t.sign_in("admin").await;

    t.portal.oracle().clear().await;
    t.portal.oracle().clear().await;

    assert!(t.store.is_empty());
    assert!(t.session().load().await.is_none());
    assert_eq!(t.portal.oracle().role().await, None);
}

#[tokio::test]
async fn test_saved_session_loads_identically() {
    let t = TestPortal::new().await;
    let access = token_for("admin");
    let session = Session::new(access.clone(), "refresh-ä/+=", user("admin"));
    t.session().save(&session).await.unwrap();

    let loaded = t.session().load().await.unwrap();
    assert_eq!(loaded, session);
    assert_eq!(loaded.access_token.as_bytes(), access.as_bytes());
}

#[tokio::test]
async fn test_file_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.storage.backend = StorageBackend::File;
    config.storage.path = dir.path().join("session.json").to_string_lossy().into_owned();

    let first = Portal::from_config(config.clone(), Arc::new(RecordingNavigator::new())).unwrap();
    first
        .client()
        .session()
        .save(&Session::new(token_for("staff_gudang"), "refresh-1", user("staff_gudang")))
        .await
        .unwrap();

    let second = Portal::from_config(config, Arc::new(RecordingNavigator::new())).unwrap();
    assert_eq!(second.oracle().role().await, Some(Role::Staff));
    assert_eq!(second.guard().check("/staff").await, GuardDecision::Allow);
}
