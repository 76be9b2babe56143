//! Tool-facing operations
//!
//! Typed request/response records for the three folder operations, plus the
//! async entry points a dispatcher invokes. Argument validation happens
//! here; the transport that carries these records lives outside the crate.

use serde::{Deserialize, Serialize};

use crate::config::drive::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use crate::config::Config;
use crate::drive::backend::StorageBackend;
use crate::drive::types::{ListedEntry, TreeNode};
use crate::error::{Result, ValidationError};
use crate::tree::{build_tree, list_recursive, resolve_path, ListOptions};

fn default_true() -> bool {
    true
}

/// Request to resolve a folder path to an id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveFolderRequest {
    /// Slash-delimited folder path, relative to the configured root
    pub path: String,

    /// Create missing segments instead of failing
    #[serde(default)]
    pub create_if_missing: bool,
}

/// Response to a path resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveFolderResponse {
    /// Id of the final segment's folder
    pub folder_id: String,

    /// The path as resolved, normalized to single slashes
    pub path: String,
}

/// Request to build a nested folder tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderTreeRequest {
    /// Folder to start from; the configured root when omitted
    #[serde(default)]
    pub folder_id: Option<String>,

    /// Depth bound; defaults to 3, capped at 10
    #[serde(default)]
    pub max_depth: Option<u32>,

    /// Include files as leaf nodes instead of folders only
    #[serde(default)]
    pub include_files: bool,
}

/// Response carrying an assembled tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderTreeResponse {
    /// The nested tree, rooted at the requested folder
    pub tree: TreeNode,
}

/// Request to recursively list a folder's contents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFolderRequest {
    /// Folder to start from; the configured root when omitted
    #[serde(default)]
    pub folder_id: Option<String>,

    /// Depth bound; defaults to 3, capped at 10
    #[serde(default)]
    pub max_depth: Option<u32>,

    /// Include files in the output
    #[serde(default = "default_true")]
    pub include_files: bool,

    /// Include folders in the output
    #[serde(default = "default_true")]
    pub include_folders: bool,

    /// Restrict files to this MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Response carrying a flattened listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFolderResponse {
    /// Entries in pre-order
    pub entries: Vec<ListedEntry>,

    /// Number of entries
    pub count: usize,
}

/// Resolve a folder path, optionally creating missing segments
pub async fn resolve_folder(
    backend: &dyn StorageBackend,
    config: &Config,
    request: ResolveFolderRequest,
) -> Result<ResolveFolderResponse> {
    let folder_id = resolve_path(
        backend,
        &config.root_folder_id,
        &request.path,
        request.create_if_missing,
    )
    .await?;

    let normalized = crate::drive::utils::path_segments(&request.path).join("/");

    Ok(ResolveFolderResponse {
        folder_id,
        path: normalized,
    })
}

/// Build a nested folder tree
pub async fn folder_tree(
    backend: &dyn StorageBackend,
    config: &Config,
    request: FolderTreeRequest,
) -> Result<FolderTreeResponse> {
    let max_depth = checked_depth(request.max_depth)?;
    let root_id = request
        .folder_id
        .unwrap_or_else(|| config.root_folder_id.clone());

    let tree = build_tree(backend, &root_id, max_depth, request.include_files).await?;

    Ok(FolderTreeResponse { tree })
}

/// Recursively list a folder's contents
pub async fn list_folder(
    backend: &dyn StorageBackend,
    config: &Config,
    request: ListFolderRequest,
) -> Result<ListFolderResponse> {
    if !request.include_files && !request.include_folders {
        return Err(ValidationError::InvalidParameter {
            name: "includeFiles".to_string(),
            message: "includeFiles and includeFolders cannot both be false".to_string(),
        }
        .into());
    }

    let options = ListOptions {
        max_depth: checked_depth(request.max_depth)?,
        include_files: request.include_files,
        include_folders: request.include_folders,
        mime_filter: request.mime_type,
    };

    let root_id = request
        .folder_id
        .unwrap_or_else(|| config.root_folder_id.clone());

    let entries = list_recursive(backend, &root_id, &options).await?;
    let count = entries.len();

    Ok(ListFolderResponse { entries, count })
}

/// Apply the default and the upper bound to a requested depth
fn checked_depth(max_depth: Option<u32>) -> Result<u32> {
    let depth = max_depth.unwrap_or(DEFAULT_MAX_DEPTH);

    if depth > MAX_DEPTH_LIMIT {
        return Err(ValidationError::InvalidParameter {
            name: "maxDepth".to_string(),
            message: format!("must be at most {}", MAX_DEPTH_LIMIT),
        }
        .into());
    }

    Ok(depth)
}
