use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::diff_scanner::ChangedFile;
use crate::errors::VcsError;
use crate::vcs::{ContentStore, RemoteFile};

/// Default endpoint of the GitHub REST API
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com";

/// GitHub client for interacting with the GitHub REST API
#[derive(Debug)]
pub struct GitHub {
    /// HTTP client for API requests
    client: Client,
    /// Access token for authentication
    token: String,
    /// API endpoint URL (overridable for GitHub Enterprise or test servers)
    endpoint: String,
    /// Repository owner
    owner: String,
    /// Repository name
    repo: String,
}

/// One file entry in a commit response
#[derive(Debug, Deserialize)]
struct CommitFile {
    /// Path of the file within the repository
    filename: String,

    /// Unified-diff patch; absent for binary files and pure renames
    #[serde(default)]
    patch: Option<String>,
}

/// Commit response, reduced to the fields the pipeline reads
#[derive(Debug, Deserialize)]
struct CommitResponse {
    #[serde(default)]
    files: Vec<CommitFile>,
}

/// Contents-API response for a file fetch
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    /// Base64-encoded file content, wrapped with newlines by the API
    content: String,

    /// Blob SHA of the content
    sha: String,
}

/// Contents-API request body for a file update
#[derive(Debug, Serialize)]
struct UpdateRequest {
    /// Commit message
    message: String,

    /// Base64-encoded new content
    content: String,

    /// Blob SHA the update replaces
    sha: String,

    /// Branch the commit lands on
    branch: String,
}

/// Decode a contents-API payload: the API hard-wraps the base64 text with
/// newlines, so all whitespace is stripped before decoding.
pub fn decode_content(encoded: &str) -> Result<String, VcsError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();

    let decoded = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| VcsError::DecodeError(format!("Invalid base64 content: {}", e)))?;

    String::from_utf8(decoded)
        .map_err(|e| VcsError::DecodeError(format!("Content is not valid UTF-8: {}", e)))
}

impl GitHub {
    /// Create a new GitHub client for one repository
    pub fn new(
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self::with_endpoint(token, DEFAULT_ENDPOINT, owner, repo, timeout_secs)
    }

    /// Create a new GitHub client against a specific API endpoint
    pub fn with_endpoint(
        token: impl Into<String>,
        endpoint: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            token: token.into(),
            endpoint: endpoint.into(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    fn repo_url(&self, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.owner,
            self.repo,
            tail
        )
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "transcheck")
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, VcsError> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());

            // GitHub error bodies carry a "message" field; fall back to the
            // raw body when the payload is not JSON
            let message = serde_json::from_str::<serde_json::Value>(&error_text)
                .ok()
                .and_then(|value| {
                    value
                        .get("message")
                        .and_then(|m| m.as_str())
                        .map(|m| m.to_string())
                })
                .unwrap_or(error_text);

            error!("GitHub API error ({}): {}", status, message);
            return Err(VcsError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ContentStore for GitHub {
    async fn commit_files(&self, commit_sha: &str) -> Result<Vec<ChangedFile>, VcsError> {
        let url = self.repo_url(&format!("commits/{}", commit_sha));

        let response = self
            .request(self.client.get(&url))
            .send()
            .await
            .map_err(|e| {
                VcsError::RequestFailed(format!("Failed to fetch commit {}: {}", commit_sha, e))
            })?;

        let commit = Self::check_status(response)
            .await?
            .json::<CommitResponse>()
            .await
            .map_err(|e| VcsError::ParseError(format!("Failed to parse commit response: {}", e)))?;

        Ok(commit
            .files
            .into_iter()
            .map(|file| ChangedFile {
                filename: file.filename,
                diff: file.patch.unwrap_or_default(),
            })
            .collect())
    }

    async fn fetch_file(&self, path: &str, git_ref: &str) -> Result<RemoteFile, VcsError> {
        let url = self.repo_url(&format!("contents/{}", path));

        let response = self
            .request(self.client.get(&url).query(&[("ref", git_ref)]))
            .send()
            .await
            .map_err(|e| {
                VcsError::RequestFailed(format!("Failed to fetch content of {}: {}", path, e))
            })?;

        let contents = Self::check_status(response)
            .await?
            .json::<ContentsResponse>()
            .await
            .map_err(|e| {
                VcsError::ParseError(format!("Failed to parse contents response: {}", e))
            })?;

        let content = decode_content(&contents.content)?;

        Ok(RemoteFile {
            content,
            sha: contents.sha,
        })
    }

    async fn update_file(
        &self,
        path: &str,
        content: &str,
        sha: &str,
        message: &str,
        branch: &str,
    ) -> Result<(), VcsError> {
        let url = self.repo_url(&format!("contents/{}", path));

        let request = UpdateRequest {
            message: message.to_string(),
            content: BASE64.encode(content.as_bytes()),
            sha: sha.to_string(),
            branch: branch.to_string(),
        };

        let response = self
            .request(self.client.put(&url).json(&request))
            .send()
            .await
            .map_err(|e| {
                VcsError::RequestFailed(format!("Failed to update content of {}: {}", path, e))
            })?;

        Self::check_status(response).await?;
        Ok(())
    }
}
