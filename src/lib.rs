/*!
 * # transcheck - CI translation checker
 *
 * A Rust library for verifying bilingual translation entries in changed
 * key/value translation files at CI time.
 *
 * ## Features
 *
 * - Scan a commit's diff for changed translation files
 * - Extract newly added `(source)=(target)` translation pairs
 * - Verify each pair against a machine-translation oracle (DeepL)
 * - Write inline error comments back to offending files, idempotently
 * - Configurable file patterns, language pair and concurrency
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `diff_scanner`: Changed-file selection by filename pattern
 * - `pair_extractor`: Translation pair extraction from diff text
 * - `verifier`: Oracle-backed verification with normalized comparison
 * - `annotation`: Idempotent error-comment merging into file content
 * - `app_controller`: Pipeline orchestrator
 * - `providers`: Translation oracle clients:
 *   - `providers::deepl`: DeepL v2 API client
 * - `vcs`: Version-control content stores:
 *   - `vcs::github`: GitHub REST API client
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod diff_scanner;
pub mod pair_extractor;
pub mod verifier;
pub mod annotation;
pub mod app_controller;
pub mod providers;
pub mod vcs;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, FileVerificationResult, RunReport};
pub use diff_scanner::{ChangedFile, select_translation_diffs};
pub use pair_extractor::{TranslationPair, extract_pairs};
pub use annotation::{MismatchRecord, merge_annotations};
pub use verifier::{TranslationVerifier, VerificationOutcome, normalize_translation};
pub use errors::{AppError, OracleError, VcsError};
