//! Integration tests for the listing pipeline over seeded data.

use dochub_core::types::{PageRequest, SortSpec};
use dochub_entity::document::UploadedFile;
use dochub_entity::entry::EntryKind;
use dochub_query::{ListRequest, list_entries};

use crate::helpers::TestApp;

#[test]
fn test_root_listing_shows_folders_first() {
    let app = TestApp::new();
    let page = list_entries(&app.store.snapshot(), None, &ListRequest::default());

    // Three sample folders, then four sample documents.
    assert_eq!(page.total_items, 7);
    let kinds: Vec<EntryKind> = page.items.iter().map(|entry| entry.kind()).collect();
    assert_eq!(&kinds[..3], [EntryKind::Folder; 3]);
    assert_eq!(&kinds[3..], [EntryKind::Document; 4]);
    assert_eq!(page.items[0].name(), "Documents");
}

#[test]
fn test_search_proj_is_case_insensitive() {
    let app = TestApp::new();
    let page = list_entries(&app.store.snapshot(), None, &ListRequest::searching("PROJ"));
    let names: Vec<&str> = page.items.iter().map(|entry| entry.name()).collect();
    assert_eq!(names, vec!["Projects", "Project Proposal"]);
}

#[test]
fn test_type_filter_matches_tag_not_name() {
    let app = TestApp::new();
    let request = ListRequest {
        type_filter: Some("PDF".to_string()),
        ..ListRequest::default()
    };
    let page = list_entries(&app.store.snapshot(), None, &request);
    let names: Vec<&str> = page.items.iter().map(|entry| entry.name()).collect();

    // Every PDF-tagged document passes, extension-less titles included;
    // "Technical Documentation" is DOC-tagged and drops out.
    assert_eq!(
        names,
        vec![
            "Documents",
            "Personal",
            "Projects",
            "Meeting Minutes",
            "Project Proposal",
            "Sample Document.pdf"
        ]
    );
}

#[test]
fn test_favorites_view_lists_only_favorited_documents() {
    let mut app = TestApp::new();
    let session = app.admin();
    let snapshot = app.store.snapshot();
    let proposal = snapshot
        .documents
        .values()
        .find(|doc| doc.name == "Project Proposal")
        .unwrap()
        .id;
    drop(snapshot);
    app.store.toggle_favorite(&session, proposal).unwrap();

    let page = list_entries(&app.store.snapshot(), None, &ListRequest::favorites());
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].name(), "Project Proposal");
    assert_eq!(page.items[0].kind(), EntryKind::Document);
}

#[test]
fn test_modified_sort_puts_newest_document_first() {
    let mut app = TestApp::new();
    let session = app.admin();
    app.store
        .add_documents(
            &session,
            vec![UploadedFile::new("freshest.pdf", "PDF", 10)],
            None,
        )
        .unwrap();

    let request = ListRequest {
        documents_only: true,
        sort: SortSpec::modified_desc(),
        ..ListRequest::default()
    };
    let page = list_entries(&app.store.snapshot(), None, &request);
    assert_eq!(page.items[0].name(), "freshest.pdf");
}

#[test]
fn test_pagination_boundaries() {
    let mut app = TestApp::new();
    let session = app.admin();
    let uploads: Vec<UploadedFile> = (0..9)
        .map(|i| UploadedFile::new(format!("bulk-{i:02}.pdf"), "PDF", 10))
        .collect();
    app.store.add_documents(&session, uploads, None).unwrap();

    // 7 seeded entries + 9 uploads = 16 entries across 2 pages of 10.
    let first = list_entries(
        &app.store.snapshot(),
        None,
        &ListRequest {
            page: PageRequest::new(1, 10),
            ..ListRequest::default()
        },
    );
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_pages, 2);
    assert!(first.has_next);

    let second = list_entries(
        &app.store.snapshot(),
        None,
        &ListRequest {
            page: PageRequest::new(2, 10),
            ..ListRequest::default()
        },
    );
    assert_eq!(second.items.len(), 6);
    assert!(second.has_previous);
    assert!(!second.has_next);

    let past = list_entries(
        &app.store.snapshot(),
        None,
        &ListRequest {
            page: PageRequest::new(5, 10),
            ..ListRequest::default()
        },
    );
    assert!(past.items.is_empty());
    assert_eq!(past.total_items, 16);
}
