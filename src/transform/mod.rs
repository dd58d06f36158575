//! Style-transform orchestration: prompt, generate, normalize, validate and
//! retry with escalating enforcement.

pub mod attempt;
pub mod normalize;
pub mod validate;

pub use attempt::{AttemptConfig, AttemptPlan, EnforcementLevel};
pub use normalize::{normalize_output, strip_code_fences};
pub use validate::{ValidationResult, validate_style};

use crate::config::Config;
use crate::error::{BuntaiError, LlmError, Result};
use crate::llm::{GeminiClient, GenerateContentRequest};
use crate::prompt::PromptBuilder;
use crate::style::WritingStyle;
use crate::text::PunctuationMode;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Upper bound on input length, in characters.
pub const MAX_INPUT_CHARS: usize = 10_000;

/// Reject empty or oversized input before any network call.
pub fn ensure_input_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(BuntaiError::InvalidInput("text must not be empty".into()));
    }
    let chars = text.chars().count();
    if chars > MAX_INPUT_CHARS {
        return Err(BuntaiError::InvalidInput(format!(
            "text is {chars} characters; the limit is {MAX_INPUT_CHARS}"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformRequest {
    pub text: String,
    pub style: WritingStyle,
    pub punctuation: PunctuationMode,
    /// Overrides the configured default temperature.
    pub temperature: Option<f64>,
    /// Put the configured high-accuracy model first.
    pub high_accuracy: bool,
}

impl TransformRequest {
    pub fn new(
        text: impl Into<String>,
        style: WritingStyle,
        punctuation: PunctuationMode,
    ) -> Result<Self> {
        let text = text.into();
        ensure_input_text(&text)?;
        Ok(Self {
            text,
            style,
            punctuation,
            temperature: None,
            high_accuracy: false,
        })
    }

    pub fn with_temperature(mut self, temperature: f64) -> Result<Self> {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(BuntaiError::InvalidInput(format!(
                "temperature must be within 0.0..=2.0, got {temperature}"
            )));
        }
        self.temperature = Some(temperature);
        Ok(self)
    }

    #[must_use]
    pub fn with_high_accuracy(mut self, high_accuracy: bool) -> Self {
        self.high_accuracy = high_accuracy;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    pub output_text: String,
    #[serde(skip)]
    pub raw_response: Value,
    pub style: WritingStyle,
    pub punctuation: PunctuationMode,
    /// Attempts used, including the successful one.
    pub attempts: usize,
    pub model: String,
    pub api_version: String,
}

/// Runs the bounded attempt loop for one [`TransformRequest`].
#[derive(Debug, Clone)]
pub struct StyleTransformer {
    config: Arc<Config>,
    client: GeminiClient,
    prompts: PromptBuilder,
}

impl StyleTransformer {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = GeminiClient::new(config.provider.timeout_secs);
        Self::with_client(config, client)
    }

    pub fn with_client(config: Arc<Config>, client: GeminiClient) -> Result<Self> {
        Ok(Self {
            config,
            client,
            prompts: PromptBuilder::new()?,
        })
    }

    /// Transform `request.text` into the requested style.
    ///
    /// Fails with [`BuntaiError::NonCompliant`] carrying the last validation
    /// reason when every attempt is exhausted, or with
    /// [`BuntaiError::UpstreamFailed`] when no attempt produced text to
    /// validate.
    pub async fn transform(&self, request: &TransformRequest) -> Result<TransformResult> {
        let provider = self.config.provider_config(request.high_accuracy)?;
        let temperature = request
            .temperature
            .unwrap_or_else(|| self.config.default_temperature());
        let plan = AttemptPlan::new(request.style, temperature);

        let mut index = 0;
        let mut attempt = plan.first();
        let mut corrective: Option<String> = None;
        let mut last_reason: Option<String> = None;
        let mut last_error: Option<LlmError> = None;

        loop {
            tracing::debug!(
                attempt = index + 1,
                style = %request.style,
                strict = attempt.strict_mode,
                temperature = attempt.temperature,
                enforcement = %attempt.enforcement,
                "Starting transform attempt"
            );

            let prompt = self
                .prompts
                .transform_prompt(request, &attempt, corrective.as_deref())?;
            let payload = GenerateContentRequest::from_prompt(prompt, attempt.temperature);

            let escalate = match self
                .client
                .execute(&provider, &payload, Some(request.punctuation))
                .await
            {
                Ok(generation) => {
                    let output = normalize_output(&generation.output_text, request.style);
                    if output.is_empty() {
                        tracing::warn!(
                            attempt = index + 1,
                            model = generation.model.as_str(),
                            "Output was empty after normalization"
                        );
                        last_error = Some(LlmError::EmptyOutput {
                            model: generation.model,
                            api_version: generation.api_version,
                        });
                        false
                    } else {
                        match validate_style(&output, request.style) {
                            ValidationResult::Compliant => {
                                tracing::info!(
                                    attempt = index + 1,
                                    style = %request.style,
                                    model = generation.model.as_str(),
                                    api_version = generation.api_version.as_str(),
                                    "Transform succeeded"
                                );
                                return Ok(TransformResult {
                                    output_text: output,
                                    raw_response: generation.raw_response,
                                    style: request.style,
                                    punctuation: request.punctuation,
                                    attempts: index + 1,
                                    model: generation.model,
                                    api_version: generation.api_version,
                                });
                            }
                            ValidationResult::NonCompliant {
                                reason,
                                corrective_directive,
                                offending_sentences,
                            } => {
                                tracing::warn!(
                                    attempt = index + 1,
                                    style = %request.style,
                                    offenders = offending_sentences.len(),
                                    "Output failed style validation: {reason}"
                                );
                                last_reason = Some(reason);
                                corrective = Some(corrective_directive);
                                true
                            }
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        attempt = index + 1,
                        style = %request.style,
                        "Transform attempt failed upstream: {err}"
                    );
                    last_error = Some(err);
                    false
                }
            };

            match plan.next(index, escalate) {
                Some(next) => {
                    attempt = next;
                    index += 1;
                }
                None => break,
            }
        }

        Err(match last_reason {
            Some(reason) => BuntaiError::NonCompliant { reason },
            None => BuntaiError::UpstreamFailed(last_error.unwrap_or(LlmError::NoCandidates)),
        })
    }
}
