//! Path resolution
//!
//! Walks a slash-delimited folder path one segment at a time, resolving or
//! creating folder ids.

use crate::drive::backend::{ChildFilter, StorageBackend};
use crate::drive::utils::path_segments;
use crate::error::{DriveTreeError, Result};

/// Resolve a slash-delimited folder path to a folder id, starting from
/// `root_id`.
///
/// Empty segments are discarded, so `/a//b/` and `a/b` resolve identically;
/// an empty path returns `root_id` unchanged. Each segment is matched by
/// exact name among the current folder's children. When several folders
/// share the name, the first entry in the backend's listing order wins.
/// A missing segment is created under the current parent when
/// `create_if_missing` is set, and is otherwise a hard `PathNotFound`
/// failure naming the segment and the full requested path.
pub async fn resolve_path(
    backend: &dyn StorageBackend,
    root_id: &str,
    path: &str,
    create_if_missing: bool,
) -> Result<String> {
    let mut current = root_id.to_string();

    for segment in path_segments(path) {
        let matches = backend
            .list_children(&current, &ChildFilter::folder_named(segment))
            .await?;

        current = match matches.into_iter().next() {
            Some(folder) => folder.id,
            None if create_if_missing => {
                let created = backend.create_folder(segment, &current).await?;
                tracing::debug!(segment, id = %created.id, "created missing path segment");
                created.id
            }
            None => {
                return Err(DriveTreeError::PathNotFound {
                    segment: segment.to_string(),
                    path: path.to_string(),
                });
            }
        };
    }

    Ok(current)
}
