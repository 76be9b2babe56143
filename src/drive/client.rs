//! Drive API client
//!
//! reqwest-based implementation of the storage backend contract.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::drive::backend::{ChildFilter, StorageBackend};
use crate::drive::types::{CreateFolderRequest, DriveFile, FileList};
use crate::drive::utils::children_query;
use crate::error::{DriveApiError, DriveTreeError, Result};

/// Source of a valid access token. Token acquisition and refresh live with
/// the embedding application; the client only asks for the current token.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return a currently valid access token
    async fn access_token(&self) -> Result<String>;
}

/// Drive API client
pub struct DriveClient {
    /// HTTP client
    http_client: reqwest::Client,

    /// API configuration
    config: Config,

    /// Access token source
    token_provider: Arc<dyn TokenProvider>,
}

impl DriveClient {
    /// Create a new Drive client
    pub fn new(config: Config, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
            token_provider,
        }
    }

    /// Get a valid access token
    async fn access_token(&self) -> Result<String> {
        self.token_provider.access_token().await
    }

    /// Base URL for files
    fn files_url(&self) -> String {
        format!("{}/files", self.config.api_base_url)
    }

    /// Field mask requested on every file entry
    const FILE_FIELDS: &'static str = "id, name, mimeType, parents, size, trashed";

    /// Map a non-success response to a typed error
    async fn error_for(response: reqwest::Response, context: &str) -> DriveTreeError {
        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(60);
            return DriveTreeError::Api(DriveApiError::RateLimited { retry_after_secs });
        }

        let text = response.text().await.unwrap_or_default();
        DriveTreeError::Api(DriveApiError::RequestFailed {
            message: format!("{} ({}): {}", context, status, text),
        })
    }
}

#[async_trait]
impl StorageBackend for DriveClient {
    async fn list_children(
        &self,
        parent_id: &str,
        filter: &ChildFilter,
    ) -> Result<Vec<DriveFile>> {
        let token = self.access_token().await?;
        let query = children_query(parent_id, filter);

        let mut files = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = format!(
                "{}?q={}&orderBy=name&pageSize={}&fields={}",
                self.files_url(),
                urlencoding::encode(&query),
                self.config.page_size,
                urlencoding::encode(&format!(
                    "nextPageToken, files({})",
                    Self::FILE_FIELDS
                )),
            );

            if let Some(ref t) = page_token {
                url.push_str(&format!("&pageToken={}", urlencoding::encode(t)));
            }

            let response = self
                .http_client
                .get(&url)
                .bearer_auth(&token)
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(Self::error_for(response, "Failed to list children").await);
            }

            let page: FileList = response.json().await?;
            files.extend(page.files);

            match page.next_page_token {
                Some(t) => page_token = Some(t),
                None => break,
            }
        }

        tracing::debug!(parent_id, count = files.len(), "listed children");
        Ok(files)
    }

    async fn get_file(&self, file_id: &str) -> Result<DriveFile> {
        let token = self.access_token().await?;
        let url = format!(
            "{}/{}?fields={}",
            self.files_url(),
            urlencoding::encode(file_id),
            urlencoding::encode(Self::FILE_FIELDS),
        );

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else if response.status().as_u16() == 404 {
            Err(DriveTreeError::Api(DriveApiError::FileNotFound {
                file_id: file_id.to_string(),
            }))
        } else {
            Err(Self::error_for(response, "Failed to get file").await)
        }
    }

    async fn create_folder(&self, name: &str, parent_id: &str) -> Result<DriveFile> {
        let token = self.access_token().await?;
        let url = format!(
            "{}?fields={}",
            self.files_url(),
            urlencoding::encode(Self::FILE_FIELDS),
        );

        let request = CreateFolderRequest::new(name, parent_id);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&token)
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            let created: DriveFile = response.json().await?;
            tracing::debug!(name, parent_id, id = %created.id, "created folder");
            Ok(created)
        } else {
            Err(Self::error_for(response, "Failed to create folder").await)
        }
    }
}
