/*!
 * Error types for the transcheck application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when querying the translation oracle
#[derive(Error, Debug)]
pub enum OracleError {
    /// Error when no oracle credential is configured
    #[error("Translation service unavailable: {0}")]
    Unavailable(String),

    /// Error when making an API request fails
    #[error("Translation API request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the API itself
    #[error("Translation API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error when parsing an API response fails
    #[error("Failed to parse translation API response: {0}")]
    ParseError(String),
}

/// Errors that can occur when talking to the version-control API
#[derive(Error, Debug)]
pub enum VcsError {
    /// Error when making an API request fails
    #[error("VCS API request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the API itself
    #[error("VCS API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error when parsing an API response fails
    #[error("Failed to parse VCS API response: {0}")]
    ParseError(String),

    /// Error when decoding file content fails
    #[error("Failed to decode file content: {0}")]
    DecodeError(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Fatal configuration or environment error, aborts the whole run
    #[error("Setup error: {0}")]
    Setup(String),

    /// Error from the translation oracle
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Error from the VCS API
    #[error("VCS error: {0}")]
    Vcs(#[from] VcsError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
