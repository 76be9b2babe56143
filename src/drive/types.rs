//! Drive API type definitions
//!
//! Wire types mirror the Drive v3 responses; domain types carry traversal
//! results back to the caller.

use serde::{Deserialize, Serialize};

use crate::config::drive::FOLDER_MIME_TYPE;

/// A file or folder as reported by the Drive API
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// Opaque backend-assigned id
    pub id: String,

    /// Display name
    pub name: String,

    /// MIME type; folders carry `application/vnd.google-apps.folder`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Parent folder ids
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,

    /// Size in bytes; the API reports it as a decimal string and omits it
    /// for folders and Google-native documents
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_size"
    )]
    pub size: Option<i64>,

    /// Whether the file is in the trash
    #[serde(default)]
    pub trashed: bool,
}

impl DriveFile {
    /// Whether this entry is a folder
    pub fn is_folder(&self) -> bool {
        self.mime_type.as_deref() == Some(FOLDER_MIME_TYPE)
    }
}

/// `size` arrives as a JSON string ("2048") or occasionally a bare number.
fn deserialize_size<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SizeRepr {
        Text(String),
        Number(i64),
    }

    let value: Option<SizeRepr> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(SizeRepr::Text(s)) => s.parse().ok(),
        Some(SizeRepr::Number(n)) => Some(n),
        None => None,
    })
}

/// One page of a children listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    /// Files in this page
    #[serde(default)]
    pub files: Vec<DriveFile>,

    /// Token for the next page, absent on the last one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Request body for creating a folder
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name
    pub name: String,

    /// Always the folder MIME type
    pub mime_type: String,

    /// Parent folder ids
    pub parents: Vec<String>,
}

impl CreateFolderRequest {
    /// Build a create request for a folder under the given parent
    pub fn new(name: &str, parent_id: &str) -> Self {
        Self {
            name: name.to_string(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            parents: vec![parent_id.to_string()],
        }
    }
}

/// Kind of a tree node
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

/// A node in an assembled folder tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Entry id
    pub id: String,

    /// Display name
    pub name: String,

    /// Folder or file
    pub kind: NodeKind,

    /// Size in bytes, files only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    /// Child nodes; omitted entirely when the folder has no qualifying
    /// descendants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Build a node from a Drive entry, without children
    pub fn from_file(file: &DriveFile) -> Self {
        let kind = if file.is_folder() {
            NodeKind::Folder
        } else {
            NodeKind::File
        };

        Self {
            id: file.id.clone(),
            name: file.name.clone(),
            kind,
            size: file.size,
            children: None,
        }
    }
}

/// A flattened entry produced by a recursive listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedEntry {
    /// Entry id
    pub id: String,

    /// Display name
    pub name: String,

    /// Slash-joined path relative to the traversal root
    pub path: String,

    /// Depth relative to the traversal root; the root's direct children
    /// are depth 0
    pub depth: u32,

    /// Folder or file
    pub kind: NodeKind,

    /// MIME type as reported by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Size in bytes, files only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_deserialize() {
        let json = r#"{"id":"f1","name":"Reports","mimeType":"application/vnd.google-apps.folder","parents":["root"]}"#;
        let file: DriveFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.id, "f1");
        assert!(file.is_folder());
        assert!(!file.trashed);
    }

    #[test]
    fn test_file_size_string() {
        let json = r#"{"id":"f2","name":"x.bin","mimeType":"application/octet-stream","size":"2048"}"#;
        let file: DriveFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.size, Some(2048));
        assert!(!file.is_folder());
    }

    #[test]
    fn test_file_list_deserialize() {
        let json = r#"{"files":[{"id":"a","name":"A"}],"nextPageToken":"tok"}"#;
        let list: FileList = serde_json::from_str(json).unwrap();
        assert_eq!(list.files.len(), 1);
        assert_eq!(list.next_page_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_tree_node_omits_empty_children() {
        let node = TreeNode {
            id: "a".to_string(),
            name: "A".to_string(),
            kind: NodeKind::Folder,
            size: None,
            children: None,
        };
        let json = serde_json::to_string(&node).unwrap();
        assert!(!json.contains("children"));
        assert!(json.contains("\"kind\":\"folder\""));
    }

    #[test]
    fn test_create_folder_request() {
        let req = CreateFolderRequest::new("archive", "root");
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("application/vnd.google-apps.folder"));
        assert!(json.contains("\"parents\":[\"root\"]"));
    }
}
