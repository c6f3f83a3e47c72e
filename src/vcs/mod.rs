/*!
 * Clients for the hosting version-control API.
 *
 * This module contains the content-store abstraction the pipeline reads
 * commit diffs and file content through, and writes annotation commits
 * through:
 * - GitHub: GitHub REST v3 implementation
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::diff_scanner::ChangedFile;
use crate::errors::VcsError;

/// A file fetched from the content store, with the blob identity needed to
/// update it safely
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    /// Decoded file content
    pub content: String,

    /// Blob SHA of the fetched content; required by the update call so a
    /// concurrent change fails the write instead of being clobbered
    pub sha: String,
}

/// Common trait for version-control content stores
#[async_trait]
pub trait ContentStore: Send + Sync + Debug {
    /// List the files changed by a commit, each with its unified-diff patch
    async fn commit_files(&self, commit_sha: &str) -> Result<Vec<ChangedFile>, VcsError>;

    /// Fetch the content of one file at a given ref
    async fn fetch_file(&self, path: &str, git_ref: &str) -> Result<RemoteFile, VcsError>;

    /// Replace the content of one file on a branch, guarded by the blob SHA
    /// returned from the preceding fetch
    async fn update_file(
        &self,
        path: &str,
        content: &str,
        sha: &str,
        message: &str,
        branch: &str,
    ) -> Result<(), VcsError>;
}

pub mod github;
