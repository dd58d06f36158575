//! Gemini `generateContent` executor with fallback across the
//! (model × API version) candidate matrix.

use crate::config::ProviderConfig;
use crate::error::LlmError;
use crate::llm::http_client::build_gemini_client;
use crate::llm::retry::{RetryDecision, classify};
use crate::llm::scrub::{extract_error_message, sanitize_api_error};
use crate::text::{PunctuationMode, normalize_punctuation};
use reqwest::Client;
use serde_json::Value;

mod types;
pub use types::{Content, GenerateContentRequest, GenerationConfig, MAX_OUTPUT_TOKENS, Part};
use types::GenerateContentResponse;

/// Successful generation from one candidate.
#[derive(Debug, Clone)]
pub struct Generation {
    pub output_text: String,
    /// Full response body, kept for diagnostics.
    pub raw_response: Value,
    pub model: String,
    pub api_version: String,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
}

impl GeminiClient {
    pub fn new(timeout_secs: u64) -> Self {
        Self::with_client(build_gemini_client(timeout_secs))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Try every candidate until one yields non-empty text.
    ///
    /// Models are the outer loop, API versions the inner one. A
    /// [`RetryDecision::NextModel`] failure skips the rest of the current
    /// model's versions. When every candidate fails the last error is
    /// returned.
    pub async fn execute(
        &self,
        provider: &ProviderConfig,
        request: &GenerateContentRequest,
        punctuation: Option<PunctuationMode>,
    ) -> Result<Generation, LlmError> {
        let mut last_error = None;
        let candidates = provider.candidate_count();
        let mut tried = 0;

        'models: for model in &provider.models {
            for api_version in &provider.api_versions {
                tried += 1;
                match self.call_once(provider, model, api_version, request).await {
                    Ok((text, raw_response)) => {
                        tracing::debug!(
                            model = model.as_str(),
                            api_version = api_version.as_str(),
                            chars = text.chars().count(),
                            "Gemini candidate succeeded"
                        );
                        let output_text = match punctuation {
                            Some(mode) => normalize_punctuation(&text, mode),
                            None => text,
                        };
                        return Ok(Generation {
                            output_text,
                            raw_response,
                            model: model.clone(),
                            api_version: api_version.clone(),
                        });
                    }
                    Err(err) => {
                        let decision = classify(&err);
                        tracing::warn!(
                            model = model.as_str(),
                            api_version = api_version.as_str(),
                            status = err.upstream_status(),
                            candidate = tried,
                            candidates,
                            ?decision,
                            "Gemini candidate failed: {err}"
                        );
                        last_error = Some(err);
                        if decision == RetryDecision::NextModel {
                            continue 'models;
                        }
                    }
                }
            }
        }

        Err(last_error.unwrap_or(LlmError::NoCandidates))
    }

    async fn call_once(
        &self,
        provider: &ProviderConfig,
        model: &str,
        api_version: &str,
        request: &GenerateContentRequest,
    ) -> Result<(String, Value), LlmError> {
        let url = format!(
            "{}/{api_version}/{}:generateContent",
            provider.base_url,
            model_path(model)
        );

        let network = |err: reqwest::Error| LlmError::Network {
            message: sanitize_api_error(&err.without_url().to_string()),
            model: model.to_string(),
            api_version: api_version.to_string(),
        };

        let response = self
            .client
            .post(url)
            .query(&[("key", provider.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Http {
                status: status.as_u16(),
                message: sanitize_api_error(&extract_error_message(&body)),
                model: model.to_string(),
                api_version: api_version.to_string(),
            });
        }

        let decode = |message: String| LlmError::Decode {
            message: sanitize_api_error(&message),
            model: model.to_string(),
            api_version: api_version.to_string(),
        };

        let raw: Value = response
            .json()
            .await
            .map_err(|err| decode(err.without_url().to_string()))?;

        if let Some(message) = raw.pointer("/error/message").and_then(Value::as_str) {
            return Err(LlmError::Provider {
                message: sanitize_api_error(message),
                model: model.to_string(),
                api_version: api_version.to_string(),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_value(raw.clone()).map_err(|err| decode(err.to_string()))?;
        let text = parsed.first_candidate_text();
        if text.trim().is_empty() {
            tracing::debug!(
                model,
                api_version,
                finish_reason = parsed.finish_reason(),
                "Gemini returned no text"
            );
            return Err(LlmError::EmptyOutput {
                model: model.to_string(),
                api_version: api_version.to_string(),
            });
        }

        if let Some(reason) = parsed.incomplete_finish_reason() {
            return Err(LlmError::Truncated {
                finish_reason: reason.to_string(),
                model: model.to_string(),
                api_version: api_version.to_string(),
            });
        }

        Ok((text, raw))
    }
}

fn model_path(model: &str) -> String {
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}
