//! Tree building
//!
//! Assembles a nested folder tree below a root, bounded by depth.

use std::future::Future;
use std::pin::Pin;

use crate::drive::backend::{ChildFilter, StorageBackend};
use crate::drive::types::TreeNode;
use crate::error::Result;

/// Build a nested tree rooted at `root_id`.
///
/// The root itself is always materialized. Children at relative depth `d`
/// are fetched only while `d < max_depth`, so `max_depth = 0` yields the
/// bare root without a single listing call. With `include_leaves` unset the
/// listing is restricted to folders, and a folder below the top level is
/// kept only when its own subtree contributed at least one node. The
/// `children` field is omitted, never empty. Backend failures abort the
/// whole build.
pub async fn build_tree(
    backend: &dyn StorageBackend,
    root_id: &str,
    max_depth: u32,
    include_leaves: bool,
) -> Result<TreeNode> {
    let root = backend.get_file(root_id).await?;
    let mut node = TreeNode::from_file(&root);

    let children = children_of(backend, root_id, 0, max_depth, include_leaves).await?;
    if !children.is_empty() {
        node.children = Some(children);
    }

    Ok(node)
}

/// Fetch and assemble the child nodes living at `depth` under `folder_id`.
fn children_of<'a>(
    backend: &'a dyn StorageBackend,
    folder_id: &'a str,
    depth: u32,
    max_depth: u32,
    include_leaves: bool,
) -> Pin<Box<dyn Future<Output = Result<Vec<TreeNode>>> + Send + 'a>> {
    Box::pin(async move {
        if depth >= max_depth {
            return Ok(Vec::new());
        }

        let filter = if include_leaves {
            ChildFilter::all()
        } else {
            ChildFilter::folders()
        };

        let entries = backend.list_children(folder_id, &filter).await?;
        let mut nodes = Vec::with_capacity(entries.len());

        for entry in &entries {
            if entry.is_folder() {
                let kids =
                    children_of(backend, &entry.id, depth + 1, max_depth, include_leaves).await?;

                let mut node = TreeNode::from_file(entry);
                if !kids.is_empty() {
                    node.children = Some(kids);
                }

                // Top-level folders are always reported; deeper ones only
                // when they contribute something to the tree.
                if include_leaves || depth == 0 || node.children.is_some() {
                    nodes.push(node);
                }
            } else if include_leaves {
                nodes.push(TreeNode::from_file(entry));
            }
        }

        Ok(nodes)
    })
}
