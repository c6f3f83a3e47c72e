use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::OracleError;
use crate::providers::TranslationOracle;

/// Default endpoint of the free-tier DeepL API
pub const DEFAULT_ENDPOINT: &str = "https://api-free.deepl.com";

/// DeepL client for interacting with the DeepL v2 API
#[derive(Debug)]
pub struct DeepL {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (overridable for the paid tier or test servers)
    endpoint: String,
}

/// DeepL translate request
#[derive(Debug, Serialize)]
pub struct TranslateRequest {
    /// API key, carried in the request body
    auth_key: String,

    /// Text to translate
    text: String,

    /// Source language code
    source_lang: String,

    /// Target language code
    target_lang: String,
}

/// DeepL translate response
#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    /// Translation results; the API returns one entry per input text
    pub translations: Vec<Translation>,
}

/// Individual translation in a DeepL response
#[derive(Debug, Deserialize)]
pub struct Translation {
    /// The translated text
    pub text: String,

    /// Language the API detected for the source text
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

impl DeepL {
    /// Create a new DeepL client against the default free-tier endpoint
    pub fn new(api_key: impl Into<String>, timeout_secs: u64) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT, timeout_secs)
    }

    /// Create a new DeepL client against a specific endpoint
    pub fn with_endpoint(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl TranslationOracle for DeepL {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, OracleError> {
        if self.api_key.is_empty() {
            return Err(OracleError::Unavailable(
                "DeepL API key not found".to_string(),
            ));
        }

        let api_url = format!("{}/v2/translate", self.endpoint.trim_end_matches('/'));

        let request = TranslateRequest {
            auth_key: self.api_key.clone(),
            text: text.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        };

        let response = self
            .client
            .post(&api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                OracleError::RequestFailed(format!("Failed to send request to DeepL API: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("DeepL API error ({}): {}", status, error_text);
            return Err(OracleError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let translate_response = response.json::<TranslateResponse>().await.map_err(|e| {
            OracleError::ParseError(format!("Failed to parse DeepL API response: {}", e))
        })?;

        // The response must expose at least one translated-text result;
        // anything else is a protocol error.
        translate_response
            .translations
            .into_iter()
            .next()
            .map(|translation| translation.text)
            .ok_or_else(|| {
                OracleError::ParseError("DeepL API response contained no translations".to_string())
            })
    }
}
