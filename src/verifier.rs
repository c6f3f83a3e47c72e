use std::sync::Arc;

use crate::errors::OracleError;
use crate::providers::TranslationOracle;

// @module: Translation verification against an oracle

/// Result of verifying one translation pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    /// Whether the provided target matched the oracle's translation
    pub is_match: bool,

    /// The oracle's translation, kept for reporting and annotation
    pub reference: String,
}

/// Normalize a translation for comparison: strip at most one trailing
/// period, then ASCII-lowercase.
///
/// This rule is intentionally coarse. It ignores case and a single trailing
/// period but nothing else, so punctuation-heavy or multi-sentence text will
/// both over- and under-report mismatches. That trade-off is part of the
/// check's contract; changing it changes what counts as a mismatch.
pub fn normalize_translation(text: &str) -> String {
    text.strip_suffix('.').unwrap_or(text).to_ascii_lowercase()
}

/// Verifies translation pairs by asking an oracle for the expected
/// translation and comparing it, normalized, against the provided target.
///
/// Holds the language pair for the whole run; one outbound oracle call per
/// pair, no caching, no retry. Calls are independent reads, so pairs may be
/// verified concurrently.
#[derive(Debug, Clone)]
pub struct TranslationVerifier {
    /// Oracle used as ground truth
    oracle: Arc<dyn TranslationOracle>,

    /// Source language code
    source_lang: String,

    /// Target language code
    target_lang: String,
}

impl TranslationVerifier {
    /// Create a new verifier for the given oracle and language pair
    pub fn new(
        oracle: Arc<dyn TranslationOracle>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            oracle,
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }

    /// Verify one pair: translate `source` via the oracle and compare the
    /// result against `target` under the normalization rule.
    pub async fn verify(
        &self,
        source: &str,
        target: &str,
    ) -> Result<VerificationOutcome, OracleError> {
        let reference = self
            .oracle
            .translate(source, &self.source_lang, &self.target_lang)
            .await?;

        let is_match = normalize_translation(&reference) == normalize_translation(target);

        Ok(VerificationOutcome { is_match, reference })
    }
}
