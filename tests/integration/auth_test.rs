//! Integration tests for the authentication flow.

use dochub_auth::session::{SessionManager, SessionStore};
use dochub_core::config::AppConfig;
use dochub_core::error::ErrorKind;
use dochub_entity::user::Permission;

use crate::helpers::TestApp;

#[test]
fn test_admin_login_grants_user_management() {
    let mut app = TestApp::new();
    let session = app.admin();
    assert!(session.is_authenticated());
    assert!(session.is_admin());
    assert!(session.has_permission(Permission::ManageUsers));
    assert!(session.has_permission(Permission::Delete));
}

#[test]
fn test_normal_login_cannot_delete() {
    let mut app = TestApp::new();
    let session = app.normal();
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
    assert!(session.has_permission(Permission::Write));
    assert!(!session.has_permission(Permission::Delete));
}

#[test]
fn test_failed_login_clears_session_and_record() {
    let mut app = TestApp::new();
    app.admin();

    let err = app
        .sessions
        .login(&app.directory, "admin", "wrong")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
    assert!(!app.sessions.current().is_authenticated());
    assert!(app.sessions.current().last_error.is_some());
    assert_eq!(app.session_store.get("user").unwrap(), None);
}

#[test]
fn test_unknown_user_and_wrong_password_are_indistinguishable() {
    let mut app = TestApp::new();
    let unknown = app
        .sessions
        .login(&app.directory, "nobody", "whatever")
        .unwrap_err();
    let wrong = app
        .sessions
        .login(&app.directory, "admin", "whatever")
        .unwrap_err();
    assert_eq!(unknown.message, wrong.message);
}

#[test]
fn test_session_restores_across_managers() {
    let mut app = TestApp::new();
    app.normal();

    // A fresh manager over the same persistence boundary sees the record.
    let config = AppConfig::default();
    let mut fresh = SessionManager::new(app.session_store.clone(), &config.session);
    assert!(fresh.restore(&app.directory).unwrap());
    assert_eq!(fresh.current().username(), "user");

    app.sessions.logout().unwrap();
    let mut after_logout = SessionManager::new(app.session_store.clone(), &config.session);
    assert!(!after_logout.restore(&app.directory).unwrap());
}
