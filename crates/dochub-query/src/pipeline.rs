//! The listing pipeline.
//!
//! Stages run in a fixed order: scope to the current folder, search,
//! type filter, favorites filter, sort, paginate. Each stage only narrows
//! or reorders; none of them mutate the snapshot.

use std::cmp::Ordering;

use tracing::debug;
use uuid::Uuid;

use dochub_core::types::{FolderId, PageResponse, SortDirection, SortKey};
use dochub_entity::entry::{Entry, EntryKind};
use dochub_store::Snapshot;

use crate::listing::ListRequest;

/// List the entries of one folder according to the request.
///
/// `current_folder` is `None` for the root. The result is deterministic:
/// the same snapshot and request always produce the same page.
pub fn list_entries(
    snapshot: &Snapshot,
    current_folder: Option<FolderId>,
    request: &ListRequest,
) -> PageResponse<Entry> {
    let mut entries = scope(snapshot, current_folder, request);

    if !request.search.is_empty() {
        let needle = request.search.to_lowercase();
        entries.retain(|entry| entry.name().to_lowercase().contains(&needle));
    }

    if let Some(wanted) = &request.type_filter {
        entries.retain(|entry| match entry {
            Entry::Folder(_) => true,
            Entry::Document(document) => document.content_type.eq_ignore_ascii_case(wanted),
        });
    }

    if request.favorites_only {
        entries.retain(|entry| match entry {
            Entry::Folder(_) => false,
            Entry::Document(document) => snapshot.is_favorite(document.id),
        });
    }

    sort_entries(&mut entries, request);
    debug!(
        total = entries.len(),
        page = request.page.page,
        "Listing pipeline complete"
    );

    PageResponse::paginate(entries, &request.page)
}

/// Collect the candidate entries for the current folder.
fn scope(
    snapshot: &Snapshot,
    current_folder: Option<FolderId>,
    request: &ListRequest,
) -> Vec<Entry> {
    let mut entries = Vec::new();
    if !request.documents_only && !request.favorites_only {
        entries.extend(
            snapshot
                .folders_in(current_folder)
                .cloned()
                .map(Entry::Folder),
        );
    }
    entries.extend(
        snapshot
            .documents_in(current_folder)
            .cloned()
            .map(Entry::Document),
    );
    entries
}

/// Order entries: folders before documents, then by the requested key,
/// with lowercase name and id as stable tiebreakers.
fn sort_entries(entries: &mut [Entry], request: &ListRequest) {
    entries.sort_by(|a, b| {
        kind_rank(a)
            .cmp(&kind_rank(b))
            .then_with(|| keyed_ordering(a, b, request))
            .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
            .then_with(|| entry_uuid(a).cmp(&entry_uuid(b)))
    });
}

fn kind_rank(entry: &Entry) -> u8 {
    match entry.kind() {
        EntryKind::Folder => 0,
        EntryKind::Document => 1,
    }
}

fn keyed_ordering(a: &Entry, b: &Entry, request: &ListRequest) -> Ordering {
    let ordering = match request.sort.key {
        SortKey::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortKey::Modified => a.modified_at().cmp(&b.modified_at()),
    };
    match request.sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn entry_uuid(entry: &Entry) -> Uuid {
    match entry {
        Entry::Folder(folder) => folder.id.into_uuid(),
        Entry::Document(document) => document.id.into_uuid(),
    }
}
