use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use log::{info, warn};
use std::sync::Arc;

use crate::annotation::{MismatchRecord, merge_annotations};
use crate::app_config::Config;
use crate::diff_scanner::{ChangedFile, select_translation_diffs};
use crate::pair_extractor::{TranslationPair, extract_pairs};
use crate::providers::TranslationOracle;
use crate::vcs::ContentStore;
use crate::verifier::{TranslationVerifier, VerificationOutcome};

// @module: Pipeline orchestrator

/// Verification result for one selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileVerificationResult {
    /// Path of the file within the repository
    pub filename: String,

    /// Mismatching pairs, in extraction order
    pub mismatches: Vec<MismatchRecord>,

    /// Descriptions of mismatches and per-pair verification errors,
    /// in extraction order
    pub error_messages: Vec<String>,
}

impl FileVerificationResult {
    fn clean(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            mismatches: Vec::new(),
            error_messages: Vec::new(),
        }
    }
}

/// Aggregate outcome of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// True iff any file produced a mismatch or a per-pair verification error
    pub has_errors: bool,

    /// Per-file results, in commit file order; only selected files appear
    pub files: Vec<FileVerificationResult>,
}

/// Main application controller for the translation check pipeline
///
/// Sequences scanner, extractor, verifier and annotation merger per file,
/// aggregates errors across files without short-circuiting, and persists
/// annotation commits when enabled.
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Content store the diffs and files come from
    store: Arc<dyn ContentStore>,

    // @field: Verifier wrapping the translation oracle
    verifier: TranslationVerifier,
}

impl Controller {
    /// Create a new controller with the given configuration and collaborators
    pub fn with_config(
        config: Config,
        store: Arc<dyn ContentStore>,
        oracle: Arc<dyn TranslationOracle>,
    ) -> Result<Self> {
        let verifier = TranslationVerifier::new(
            oracle,
            config.source_language.clone(),
            config.target_language.clone(),
        );

        Ok(Self {
            config,
            store,
            verifier,
        })
    }

    /// Run the whole pipeline for the configured commit.
    ///
    /// Fails only on setup-level errors (the initial commit fetch); every
    /// per-pair and per-file error is folded into the returned report.
    pub async fn run(&self) -> Result<RunReport> {
        let changed = self
            .store
            .commit_files(&self.config.commit_sha)
            .await
            .context("Failed to fetch commit diff from the VCS API")?;

        let selected = select_translation_diffs(changed, &self.config.file_patterns);

        if selected.is_empty() {
            info!("No translation files found in the diff");
            return Ok(RunReport {
                has_errors: false,
                files: Vec::new(),
            });
        }

        let mut files = Vec::with_capacity(selected.len());
        let mut has_errors = false;

        for file in selected {
            let result = self.check_file(&file).await;
            if !result.error_messages.is_empty() {
                has_errors = true;
            }
            files.push(result);
        }

        Ok(RunReport { has_errors, files })
    }

    /// Check one selected file: extract its pairs, verify each, and
    /// annotate the file when mismatches were found.
    async fn check_file(&self, file: &ChangedFile) -> FileVerificationResult {
        info!("Checking file: {}", file.filename);

        let pairs = extract_pairs(&file.diff);
        if pairs.is_empty() {
            info!("No new translations found in {}", file.filename);
            return FileVerificationResult::clean(&file.filename);
        }

        let mut result = FileVerificationResult::clean(&file.filename);

        // Verify pairs with a bounded, order-preserving concurrency window
        // so outcomes re-associate with pairs by position.
        let outcomes = stream::iter(pairs.iter())
            .map(|pair| self.verifier.verify(&pair.source, &pair.target))
            .buffered(self.config.concurrent_requests)
            .collect::<Vec<_>>()
            .await;

        for (pair, outcome) in pairs.iter().zip(outcomes) {
            self.record_outcome(&file.filename, pair, outcome, &mut result);
        }

        if result.error_messages.is_empty() {
            info!("All translations in {} verified successfully!", file.filename);
            return result;
        }

        info!("Errors found:\n{}", result.error_messages.join("\n\n"));

        if self.config.annotate && !result.mismatches.is_empty() {
            if let Err(e) = self.annotate_file(&file.filename, &result.mismatches).await {
                warn!(
                    "Failed to persist error comments for {}: {}",
                    file.filename, e
                );
            }
        }

        result
    }

    /// Fold one verification outcome into the per-file result
    fn record_outcome(
        &self,
        filename: &str,
        pair: &TranslationPair,
        outcome: Result<VerificationOutcome, crate::errors::OracleError>,
        result: &mut FileVerificationResult,
    ) {
        match outcome {
            Ok(VerificationOutcome { is_match: true, .. }) => {}
            Ok(VerificationOutcome {
                is_match: false,
                reference,
            }) => {
                result.error_messages.push(format!(
                    "Translation mismatch in {}:\nSource: {}\nProvided: {}\nExpected: {}",
                    filename, pair.source, pair.target, reference
                ));
                result.mismatches.push(MismatchRecord {
                    original_line: pair.original_line.clone(),
                    source: pair.source.clone(),
                    target: pair.target.clone(),
                    reference,
                });
            }
            Err(e) => {
                result.error_messages.push(format!(
                    "Error checking translation '{}' in {}: {}",
                    pair.source, filename, e
                ));
            }
        }
    }

    /// Read-modify-write the live file content with error comments.
    ///
    /// The fetched blob SHA guards the update, so a concurrent change to the
    /// file fails the write instead of being overwritten; the failure is
    /// surfaced to the caller as a warning.
    async fn annotate_file(&self, filename: &str, mismatches: &[MismatchRecord]) -> Result<()> {
        let remote = self
            .store
            .fetch_file(filename, &self.config.commit_sha)
            .await?;

        let updated = merge_annotations(&remote.content, mismatches);

        if updated == remote.content {
            info!("No changes needed for {}", filename);
            return Ok(());
        }

        self.store
            .update_file(
                filename,
                &updated,
                &remote.sha,
                &format!("Add translation error comments for {}", filename),
                self.config.branch(),
            )
            .await?;

        info!("Updated {} with error comments", filename);
        Ok(())
    }
}
