/*!
 * Client implementations for machine-translation oracles.
 *
 * This module contains the client used as ground truth for verification:
 * - DeepL: DeepL v2 REST API
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::OracleError;

/// Common trait for machine-translation oracles
///
/// The orchestrator treats the oracle as a black box: given source text and
/// a language pair, return the expected translation or fail. Implementations
/// must be safe to call concurrently; each call is an independent read.
#[async_trait]
pub trait TranslationOracle: Send + Sync + Debug {
    /// Translate `text` from `source_lang` to `target_lang`
    ///
    /// # Returns
    /// * `Result<String, OracleError>` - The oracle's translation, or an error
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, OracleError>;
}

pub mod deepl;
