//! Storage backend contract
//!
//! The traversal algorithms only ever see this trait; the REST client
//! implements it for production and tests substitute an in-memory graph.

use async_trait::async_trait;

use crate::drive::types::DriveFile;
use crate::error::Result;

/// Filters a children listing can push down to the backend
#[derive(Debug, Clone, Default)]
pub struct ChildFilter {
    /// Restrict the listing to folders
    pub folders_only: bool,

    /// Restrict the listing to entries with this exact name
    pub name_equals: Option<String>,
}

impl ChildFilter {
    /// No filtering; all non-trashed children
    pub fn all() -> Self {
        Self::default()
    }

    /// Folders only
    pub fn folders() -> Self {
        Self {
            folders_only: true,
            name_equals: None,
        }
    }

    /// Folders with an exact name, as used by path resolution
    pub fn folder_named(name: &str) -> Self {
        Self {
            folders_only: true,
            name_equals: Some(name.to_string()),
        }
    }
}

/// A storage backend exposing the minimal surface the traversals need
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// List the non-trashed children of a folder, in the backend's listing
    /// order, fetching every page
    async fn list_children(&self, parent_id: &str, filter: &ChildFilter)
        -> Result<Vec<DriveFile>>;

    /// Fetch a single entry's metadata by id
    async fn get_file(&self, file_id: &str) -> Result<DriveFile>;

    /// Create a folder under the given parent, returning the new entry
    async fn create_folder(&self, name: &str, parent_id: &str) -> Result<DriveFile>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_filter_constructors() {
        assert!(!ChildFilter::all().folders_only);
        assert!(ChildFilter::folders().folders_only);

        let named = ChildFilter::folder_named("archive");
        assert!(named.folders_only);
        assert_eq!(named.name_equals.as_deref(), Some("archive"));
    }
}
