//! Configuration for the Drive tree library
//!
//! Handles API constants and environment-variable overrides.

/// Configuration for Drive API access and traversal defaults
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the Drive API (override for tests/proxies)
    pub api_base_url: String,

    /// Page size for children listings
    pub page_size: u32,

    /// Well-known root folder id that path resolution starts from
    pub root_folder_id: String,
}

impl Config {
    /// Create a new configuration, honoring environment overrides
    pub fn new() -> Self {
        let api_base_url = std::env::var("DRIVE_API_BASE_URL")
            .unwrap_or_else(|_| drive::API_BASE_URL.to_string());

        let page_size = std::env::var("DRIVE_PAGE_SIZE")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(drive::DEFAULT_PAGE_SIZE);

        let root_folder_id = std::env::var("DRIVE_ROOT_FOLDER_ID")
            .unwrap_or_else(|_| drive::ROOT_FOLDER_ID.to_string());

        Self {
            api_base_url,
            page_size,
            root_folder_id,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive API constants
pub mod drive {
    /// Base URL for the Drive v3 API
    pub const API_BASE_URL: &str = "https://www.googleapis.com/drive/v3";

    /// MIME type Drive assigns to folders
    pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

    /// Alias Drive accepts for the authenticated user's root folder
    pub const ROOT_FOLDER_ID: &str = "root";

    /// Default page size for children listings
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Default traversal depth when a request omits one
    pub const DEFAULT_MAX_DEPTH: u32 = 3;

    /// Upper bound on caller-supplied traversal depth
    pub const MAX_DEPTH_LIMIT: u32 = 10;
}
