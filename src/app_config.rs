use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module builds the configuration value object once at process start,
/// from environment variables and CLI overrides, and validates it before
/// any file is processed.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Substring patterns selecting translation files from the diff
    #[serde(default = "default_file_patterns")]
    pub file_patterns: Vec<String>,

    /// Source language code sent to the oracle
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code sent to the oracle
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// VCS access token
    #[serde(default = "String::new")]
    pub vcs_token: String,

    /// Translation oracle API key
    #[serde(default = "String::new")]
    pub oracle_api_key: String,

    /// Repository in `owner/repo` form
    #[serde(default = "String::new")]
    pub repository: String,

    /// Commit SHA whose diff is inspected
    #[serde(default = "String::new")]
    pub commit_sha: String,

    /// Fully-qualified ref the run is executing against (e.g. refs/heads/main)
    #[serde(default = "String::new")]
    pub git_ref: String,

    /// Whether to write inline error comments back to files with mismatches
    #[serde(default = "default_annotate")]
    pub annotate: bool,

    /// Maximum number of concurrent oracle requests
    #[serde(default = "default_concurrent_requests")]
    pub concurrent_requests: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_file_patterns() -> Vec<String> {
    vec!["Translations.txt".to_string(), ".i18n".to_string()]
}

fn default_source_language() -> String {
    "EN".to_string()
}

fn default_target_language() -> String {
    "RU".to_string()
}

fn default_annotate() -> bool {
    true
}

fn default_concurrent_requests() -> usize {
    4
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Parse a comma-separated pattern list, trimming whitespace around
    /// each entry and dropping empty entries
    pub fn parse_patterns(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|pattern| pattern.trim().to_string())
            .filter(|pattern| !pattern.is_empty())
            .collect()
    }

    /// The repository owner, from the `owner/repo` pair
    pub fn repo_owner(&self) -> Option<&str> {
        self.repository.split_once('/').map(|(owner, _)| owner)
    }

    /// The repository name, from the `owner/repo` pair
    pub fn repo_name(&self) -> Option<&str> {
        self.repository.split_once('/').map(|(_, name)| name)
    }

    /// The branch name derived from the current ref, used as the target of
    /// annotation commits. A non-branch ref is passed through unchanged.
    pub fn branch(&self) -> &str {
        self.git_ref
            .strip_prefix("refs/heads/")
            .unwrap_or(&self.git_ref)
    }

    /// Validate the configuration before any file is processed.
    /// Missing credentials or repository coordinates are fatal setup errors.
    pub fn validate(&self) -> Result<()> {
        if self.vcs_token.is_empty() {
            return Err(anyhow!("VCS access token is required (GITHUB_TOKEN)"));
        }

        if self.oracle_api_key.is_empty() {
            return Err(anyhow!("Translation API key is required (DEEPL_API_KEY)"));
        }

        if self.repo_owner().is_none() || self.repo_name().map_or(true, str::is_empty) {
            return Err(anyhow!(
                "Repository must be set in owner/repo form (GITHUB_REPOSITORY), got: '{}'",
                self.repository
            ));
        }

        if self.commit_sha.is_empty() {
            return Err(anyhow!("Commit SHA is required (GITHUB_SHA)"));
        }

        if self.file_patterns.is_empty() {
            return Err(anyhow!("At least one translation file pattern is required"));
        }

        if self.concurrent_requests == 0 {
            return Err(anyhow!("Concurrent request limit must be at least 1"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            file_patterns: default_file_patterns(),
            source_language: default_source_language(),
            target_language: default_target_language(),
            vcs_token: String::new(),
            oracle_api_key: String::new(),
            repository: String::new(),
            commit_sha: String::new(),
            git_ref: String::new(),
            annotate: default_annotate(),
            concurrent_requests: default_concurrent_requests(),
            timeout_secs: default_timeout_secs(),
            log_level: LogLevel::default(),
        }
    }
}
