//! Integration tests for document mutations and favorites.

use dochub_core::error::ErrorKind;
use dochub_entity::document::{DocumentPatch, UploadedFile};

use crate::helpers::TestApp;

#[test]
fn test_upload_edit_and_delete_round_trip() {
    let mut app = TestApp::new();
    let session = app.admin();

    let doc = app
        .store
        .add_documents(
            &session,
            vec![UploadedFile::new("Draft.doc", "DOC", 4096)],
            None,
        )
        .unwrap()
        .remove(0);

    let updated = app
        .store
        .update_document(
            &session,
            doc.id,
            DocumentPatch {
                name: Some("Final.doc".to_string()),
                description: Some("approved".to_string()),
                tags: Some(vec!["release".to_string()]),
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Final.doc");
    assert_eq!(updated.metadata.description.as_deref(), Some("approved"));

    app.store.delete_document(&session, doc.id).unwrap();
    assert!(app.store.snapshot().document(doc.id).is_none());
}

#[test]
fn test_toggle_favorite_twice_restores_the_set() {
    let mut app = TestApp::new();
    let session = app.normal();

    let doc = app
        .store
        .add_documents(
            &session,
            vec![UploadedFile::new("starred.pdf", "PDF", 100)],
            None,
        )
        .unwrap()
        .remove(0);

    let before = app.store.snapshot().favorites.clone();
    let once = app.store.toggle_favorite(&session, doc.id).unwrap();
    assert!(once.contains(&doc.id));
    let twice = app.store.toggle_favorite(&session, doc.id).unwrap();
    assert_eq!(twice, before);
}

#[test]
fn test_favoriting_a_missing_document_is_not_found() {
    let mut app = TestApp::new();
    let session = app.admin();
    let doc = app
        .store
        .add_documents(
            &session,
            vec![UploadedFile::new("gone.pdf", "PDF", 100)],
            None,
        )
        .unwrap()
        .remove(0);
    app.store.delete_document(&session, doc.id).unwrap();

    let err = app.store.toggle_favorite(&session, doc.id).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_rename_to_empty_is_rejected() {
    let mut app = TestApp::new();
    let session = app.admin();
    let doc = app
        .store
        .add_documents(
            &session,
            vec![UploadedFile::new("named.pdf", "PDF", 100)],
            None,
        )
        .unwrap()
        .remove(0);

    let err = app
        .store
        .update_document(&session, doc.id, DocumentPatch::rename("   "))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(
        app.store.snapshot().document(doc.id).unwrap().name,
        "named.pdf"
    );
}
