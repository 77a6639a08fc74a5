//! Integration tests for permission gating across the store.

use dochub_core::error::ErrorKind;
use dochub_entity::document::UploadedFile;
use dochub_entity::user::Permission;

use crate::helpers::{TestApp, reader, session_with};

#[test]
fn test_reader_cannot_mutate_and_snapshot_is_untouched() {
    let mut app = TestApp::new();
    let reader = reader();
    let before = app.store.snapshot();
    let doc_id = *before.documents.keys().next().unwrap();
    let folder_id = *before.folders.keys().next().unwrap();

    assert_eq!(
        app.store
            .create_folder(&reader, "Nope", None)
            .unwrap_err()
            .kind,
        ErrorKind::Authorization
    );
    assert_eq!(
        app.store
            .add_documents(
                &reader,
                vec![UploadedFile::new("nope.pdf", "PDF", 1)],
                None
            )
            .unwrap_err()
            .kind,
        ErrorKind::Authorization
    );
    assert_eq!(
        app.store.delete_document(&reader, doc_id).unwrap_err().kind,
        ErrorKind::Authorization
    );
    assert_eq!(
        app.store
            .delete_folder(&reader, folder_id)
            .unwrap_err()
            .kind,
        ErrorKind::Authorization
    );

    assert_eq!(*app.store.snapshot(), *before);
}

#[test]
fn test_reader_can_still_favorite() {
    let mut app = TestApp::new();
    let reader = reader();
    let doc_id = *app.store.snapshot().documents.keys().next().unwrap();
    let favorites = app.store.toggle_favorite(&reader, doc_id).unwrap();
    assert!(favorites.contains(&doc_id));
}

#[test]
fn test_normal_user_cannot_delete_but_can_write() {
    let mut app = TestApp::new();
    let session = app.normal();

    let folder = app.store.create_folder(&session, "Mine", None).unwrap();
    assert_eq!(
        app.store
            .delete_folder(&session, folder.id)
            .unwrap_err()
            .kind,
        ErrorKind::Authorization
    );
}

#[test]
fn test_create_permission_alone_allows_upload() {
    let mut app = TestApp::new();
    let creator = session_with([Permission::Read, Permission::Create]);

    let added = app
        .store
        .add_documents(
            &creator,
            vec![UploadedFile::new("intake.pdf", "PDF", 1)],
            None,
        )
        .unwrap();
    assert_eq!(added.len(), 1);

    // Create does not imply write: editing is still rejected.
    assert_eq!(
        app.store
            .update_document(
                &creator,
                added[0].id,
                dochub_entity::document::DocumentPatch::rename("renamed.pdf")
            )
            .unwrap_err()
            .kind,
        ErrorKind::Authorization
    );
}

#[test]
fn test_anonymous_session_is_fully_denied() {
    let mut app = TestApp::new();
    let anonymous = dochub_entity::session::Session::anonymous();
    assert_eq!(
        app.store
            .create_folder(&anonymous, "Nope", None)
            .unwrap_err()
            .kind,
        ErrorKind::Authorization
    );
}
