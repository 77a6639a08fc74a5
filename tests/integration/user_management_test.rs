//! Integration tests for admin user management.

use chrono::Utc;

use dochub_core::error::ErrorKind;
use dochub_core::types::{PageRequest, SortDirection, UserId};
use dochub_auth::directory::UserQuery;
use dochub_entity::user::{
    CreateUser, Permission, PermissionSet, RemotePagination, RemoteUserPage, User, UserRole,
};

use crate::helpers::TestApp;

#[test]
fn test_admin_creates_user_who_can_then_login() {
    let mut app = TestApp::new();
    let admin = app.admin();

    app.directory
        .create_user(
            &admin,
            CreateUser {
                username: "erin".to_string(),
                password: "s3cret".to_string(),
                role: UserRole::Normal,
                permissions: None,
            },
        )
        .unwrap();

    let session = app.login("erin", "s3cret");
    assert!(session.has_permission(Permission::Write));
    assert!(!session.has_permission(Permission::ManageUsers));
}

#[test]
fn test_normal_user_cannot_manage_users() {
    let mut app = TestApp::new();
    let session = app.normal();

    let err = app
        .directory
        .create_user(
            &session,
            CreateUser {
                username: "mallory".to_string(),
                password: "pw".to_string(),
                role: UserRole::Admin,
                permissions: None,
            },
        )
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);

    let target = app.directory.find_by_username("user").unwrap().id;
    let err = app
        .directory
        .set_permissions(&session, target, PermissionSet::all())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[test]
fn test_promoted_user_gains_admin_defaults() {
    let mut app = TestApp::new();
    let admin = app.admin();
    let target = app.directory.find_by_username("user").unwrap().id;

    let promoted = app
        .directory
        .set_role(&admin, target, UserRole::Admin)
        .unwrap();
    assert!(promoted.has_permission(Permission::Delete));
    assert!(promoted.has_permission(Permission::ManageUsers));

    // A fresh login reflects the new grants.
    let session = app.login("user", "user123");
    assert!(session.is_admin());
}

#[test]
fn test_user_listing_pages_at_five() {
    let mut app = TestApp::new();
    let admin = app.admin();
    for i in 0..6 {
        app.directory
            .create_user(
                &admin,
                CreateUser {
                    username: format!("member-{i}"),
                    password: "pw".to_string(),
                    role: UserRole::Normal,
                    permissions: None,
                },
            )
            .unwrap();
    }

    // 2 seeded + 6 created = 8 users, 2 pages of 5.
    let page = app.directory.list_users(&UserQuery {
        search: String::new(),
        direction: SortDirection::Asc,
        page: PageRequest::new(1, 5),
    });
    assert_eq!(page.total_items, 8);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items[0].username, "admin");

    let filtered = app.directory.list_users(&UserQuery {
        search: "member".to_string(),
        direction: SortDirection::Desc,
        page: PageRequest::new(1, 5),
    });
    assert_eq!(filtered.total_items, 6);
    assert_eq!(filtered.items[0].username, "member-5");
}

#[test]
fn test_remote_page_ingestion_is_gated_and_idempotent() {
    let mut app = TestApp::new();
    let remote_page = RemoteUserPage {
        status: "success".to_string(),
        data: vec![User {
            id: UserId::new(),
            username: "synced".to_string(),
            password: String::new(),
            role: UserRole::Normal,
            permissions: UserRole::Normal.default_permissions(),
            created_at: Utc::now(),
        }],
        pagination: RemotePagination {
            current_page: 1,
            total_pages: 3,
            per_page: 5,
        },
    };

    let normal = app.normal();
    let err = app
        .directory
        .ingest_remote_page(&normal, remote_page.clone())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);

    let admin = app.admin();
    app.directory
        .ingest_remote_page(&admin, remote_page.clone())
        .unwrap();
    app.directory
        .ingest_remote_page(&admin, remote_page)
        .unwrap();
    assert_eq!(app.directory.len(), 3);
}
