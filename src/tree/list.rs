//! Recursive listing
//!
//! Flattens a folder subtree into annotated entries, guarding against
//! cycles and surviving per-branch backend failures.

use std::collections::HashSet;

use crate::drive::backend::{ChildFilter, StorageBackend};
use crate::drive::types::{DriveFile, ListedEntry, NodeKind};
use crate::drive::utils::join_path;
use crate::error::Result;

/// Options for a recursive listing
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Deepest entry depth to report; the root's direct children are depth 0
    pub max_depth: u32,

    /// Include files in the output
    pub include_files: bool,

    /// Include folders in the output; folders are traversed either way
    pub include_folders: bool,

    /// Restrict reported files to this MIME type; never applied to folders
    pub mime_filter: Option<String>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            max_depth: crate::config::drive::DEFAULT_MAX_DEPTH,
            include_files: true,
            include_folders: true,
            mime_filter: None,
        }
    }
}

/// One discovered entry awaiting emission (and, for folders, expansion)
struct WorkItem {
    file: DriveFile,
    depth: u32,
    path: String,
}

/// Walk the subtree under `root_id` depth-first and return its entries in
/// pre-order, siblings in backend listing order.
///
/// Every entry is annotated with its depth and slash-joined path relative
/// to the root. Folders are expanded at most once per call (a visited set
/// guards against cycles in the backend graph) and only while their depth
/// is below `max_depth`; entries at the boundary depth are still reported.
/// A folder whose listing fails is logged and contributes nothing; the
/// traversal continues with its siblings.
pub async fn list_recursive(
    backend: &dyn StorageBackend,
    root_id: &str,
    options: &ListOptions,
) -> Result<Vec<ListedEntry>> {
    let filter = if options.include_files {
        ChildFilter::all()
    } else {
        ChildFilter::folders()
    };

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(root_id.to_string());

    let mut entries = Vec::new();
    let mut stack: Vec<WorkItem> = Vec::new();

    expand(backend, root_id, "", 0, &filter, &mut stack).await;

    // The stack holds items in reverse listing order, so popping walks the
    // tree depth-first in pre-order.
    while let Some(item) = stack.pop() {
        let is_folder = item.file.is_folder();

        if is_folder {
            if options.include_folders {
                entries.push(annotate(&item.file, &item.path, item.depth));
            }
        } else if options.include_files && mime_matches(&item.file, options) {
            entries.push(annotate(&item.file, &item.path, item.depth));
        }

        if is_folder && item.depth < options.max_depth {
            if visited.insert(item.file.id.clone()) {
                expand(
                    backend,
                    &item.file.id,
                    &item.path,
                    item.depth + 1,
                    &filter,
                    &mut stack,
                )
                .await;
            } else {
                tracing::debug!(folder_id = %item.file.id, "cycle detected, branch skipped");
            }
        }
    }

    Ok(entries)
}

/// List one folder's children and push them as work items, reversed so the
/// first child is popped first. A listing failure is logged and the branch
/// contributes nothing.
async fn expand(
    backend: &dyn StorageBackend,
    folder_id: &str,
    parent_path: &str,
    depth: u32,
    filter: &ChildFilter,
    stack: &mut Vec<WorkItem>,
) {
    let children = match backend.list_children(folder_id, filter).await {
        Ok(children) => children,
        Err(e) => {
            tracing::warn!(
                folder_id,
                path = parent_path,
                error = %e,
                "skipping inaccessible branch"
            );
            return;
        }
    };

    for file in children.into_iter().rev() {
        let path = join_path(parent_path, &file.name);
        stack.push(WorkItem { file, depth, path });
    }
}

fn mime_matches(file: &DriveFile, options: &ListOptions) -> bool {
    match options.mime_filter {
        Some(ref wanted) => file.mime_type.as_deref() == Some(wanted.as_str()),
        None => true,
    }
}

fn annotate(file: &DriveFile, path: &str, depth: u32) -> ListedEntry {
    let kind = if file.is_folder() {
        NodeKind::Folder
    } else {
        NodeKind::File
    };

    ListedEntry {
        id: file.id.clone(),
        name: file.name.clone(),
        path: path.to_string(),
        depth,
        kind,
        mime_type: file.mime_type.clone(),
        size: file.size,
    }
}
