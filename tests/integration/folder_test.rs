//! Integration tests for folder mutations and breadcrumb navigation.

use dochub_core::error::ErrorKind;
use dochub_entity::document::UploadedFile;
use dochub_query::{ListRequest, list_entries};
use dochub_store::Navigator;

use crate::helpers::TestApp;

#[test]
fn test_create_folder_inside_documents_and_browse_it() {
    let mut app = TestApp::new();
    let session = app.admin();
    let documents = app.folder_id("Documents");

    let reports = app
        .store
        .create_folder(&session, "Reports", Some(documents))
        .unwrap();

    let mut navigator = Navigator::new();
    navigator
        .enter_folder(&app.store.snapshot(), documents)
        .unwrap();
    navigator
        .enter_folder(&app.store.snapshot(), reports.id)
        .unwrap();
    assert_eq!(navigator.current_folder(), Some(reports.id));
    assert_eq!(navigator.path().len(), 3);

    app.store
        .add_documents(
            &session,
            vec![UploadedFile::new("June Report.pdf", "PDF", 2048)],
            navigator.current_folder(),
        )
        .unwrap();

    // The listing is scoped: only the new document shows up in Reports.
    let page = list_entries(
        &app.store.snapshot(),
        navigator.current_folder(),
        &ListRequest::default(),
    );
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].name(), "June Report.pdf");

    // Stepping back to Documents shows Reports and nothing else.
    navigator.go_back();
    let page = list_entries(
        &app.store.snapshot(),
        navigator.current_folder(),
        &ListRequest::default(),
    );
    let names: Vec<&str> = page.items.iter().map(|entry| entry.name()).collect();
    assert_eq!(names, vec!["Reports"]);
}

#[test]
fn test_breadcrumb_jump_truncates_path() {
    let mut app = TestApp::new();
    let session = app.admin();
    let documents = app.folder_id("Documents");
    let inner = app
        .store
        .create_folder(&session, "Archive", Some(documents))
        .unwrap();

    let mut navigator = Navigator::new();
    navigator
        .enter_folder(&app.store.snapshot(), documents)
        .unwrap();
    navigator
        .enter_folder(&app.store.snapshot(), inner.id)
        .unwrap();

    navigator.jump_to(0).unwrap();
    assert_eq!(navigator.current_folder(), None);
    assert!(navigator.jump_to(2).is_err());
}

#[test]
fn test_delete_folder_cascades_and_navigator_resyncs() {
    let mut app = TestApp::new();
    let session = app.admin();
    let documents = app.folder_id("Documents");
    let reports = app
        .store
        .create_folder(&session, "Reports", Some(documents))
        .unwrap();
    let docs = app
        .store
        .add_documents(
            &session,
            vec![UploadedFile::new("buried.pdf", "PDF", 512)],
            Some(reports.id),
        )
        .unwrap();
    app.store.toggle_favorite(&session, docs[0].id).unwrap();

    let mut navigator = Navigator::new();
    navigator
        .enter_folder(&app.store.snapshot(), documents)
        .unwrap();
    navigator
        .enter_folder(&app.store.snapshot(), reports.id)
        .unwrap();

    app.store.delete_folder(&session, documents).unwrap();

    let snapshot = app.store.snapshot();
    assert!(snapshot.folder(documents).is_none());
    assert!(snapshot.folder(reports.id).is_none());
    assert!(snapshot.document(docs[0].id).is_none());
    assert!(!snapshot.is_favorite(docs[0].id));
    assert!(snapshot.is_well_formed());

    navigator.resync(&snapshot);
    assert_eq!(navigator.current_folder(), None);
}

#[test]
fn test_duplicate_sibling_folder_name_conflicts() {
    let mut app = TestApp::new();
    let session = app.admin();
    let err = app
        .store
        .create_folder(&session, "Projects", None)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}
