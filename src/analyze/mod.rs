//! Single-shot estimate of how machine-generated a passage reads.

use crate::config::Config;
use crate::error::{BuntaiError, Result};
use crate::llm::{GeminiClient, GenerateContentRequest};
use crate::prompt::PromptBuilder;
use crate::text::normalize_line_endings;
use crate::transform::{ensure_input_text, strip_code_fences};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use strum::Display;

pub const AI_CHECK_TEMPERATURE: f64 = 0.2;

const SCORE_KEYS: &[&str] = &[
    "score",
    "ai_score",
    "aiScore",
    "ai_likelihood",
    "aiLikelihood",
    "likelihood",
    "probability",
];
const CONFIDENCE_KEYS: &[&str] = &["confidence", "confidence_level", "confidenceLevel", "certainty"];
const REASONING_KEYS: &[&str] = &["reasoning", "reason", "rationale", "explanation", "comment"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Free-text label, in English or Japanese.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" | "strong" | "高" | "高い" | "強" | "強い" => Some(Self::High),
            "medium" | "mid" | "moderate" | "中" | "中程度" | "普通" => Some(Self::Medium),
            "low" | "weak" | "低" | "低い" | "弱" | "弱い" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn from_score(score: u8) -> Self {
        match score {
            66.. => Self::High,
            34.. => Self::Medium,
            _ => Self::Low,
        }
    }

    fn default_reasoning(self) -> &'static str {
        match self {
            Self::High => "AI生成の文章に典型的な特徴が多く見られる。",
            Self::Medium => "AI生成の特徴と人間らしい特徴が混在している。",
            Self::Low => "AI生成に特有の特徴はほとんど見られない。",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiCheckResult {
    /// 0 (human) to 100 (machine).
    pub score: u8,
    pub confidence: Confidence,
    pub reasoning: String,
}

// First alias whose value is present and not blank.
fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| match value {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
}

fn coerce_score(value: &Value) -> Option<u8> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = raw.round().clamp(0.0, 100.0) as u8;
    Some(score)
}

fn json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Parse the model's verdict, tolerating aliases and loose formatting.
pub fn parse_ai_check_response(raw: &str) -> Result<AiCheckResult> {
    let text = strip_code_fences(&normalize_line_endings(raw));
    let span = json_span(&text)
        .ok_or_else(|| BuntaiError::Parse("no JSON object in model response".into()))?;
    let value: Value = serde_json::from_str(span)
        .map_err(|err| BuntaiError::Parse(format!("invalid JSON in model response: {err}")))?;
    let obj = value
        .as_object()
        .ok_or_else(|| BuntaiError::Parse("model response is not a JSON object".into()))?;

    let score = first_present(obj, SCORE_KEYS)
        .and_then(coerce_score)
        .ok_or_else(|| BuntaiError::Parse("model response has no usable score".into()))?;

    let confidence = first_present(obj, CONFIDENCE_KEYS)
        .and_then(Value::as_str)
        .and_then(Confidence::from_label)
        .unwrap_or_else(|| Confidence::from_score(score));

    let reasoning = first_present(obj, REASONING_KEYS)
        .and_then(Value::as_str)
        .map_or_else(
            || confidence.default_reasoning().to_string(),
            |s| s.trim().to_string(),
        );

    Ok(AiCheckResult {
        score,
        confidence,
        reasoning,
    })
}

#[derive(Debug, Clone)]
pub struct AiLikelihoodAnalyzer {
    config: Arc<Config>,
    client: GeminiClient,
    prompts: PromptBuilder,
}

impl AiLikelihoodAnalyzer {
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

    /// One generation call, no retry on parse failure.
    ///
    /// Transport errors keep their upstream status.
    pub async fn analyze(&self, text: &str) -> Result<AiCheckResult> {
        ensure_input_text(text)?;
        let provider = self.config.provider_config(false)?;
        let prompt = self.prompts.ai_check_prompt(text)?;
        let payload = GenerateContentRequest::from_prompt(prompt, AI_CHECK_TEMPERATURE);

        let generation = self.client.execute(&provider, &payload, None).await?;
        let result = parse_ai_check_response(&generation.output_text).inspect_err(|err| {
            tracing::warn!(
                model = generation.model.as_str(),
                api_version = generation.api_version.as_str(),
                "Could not parse AI check response: {err}"
            );
        })?;

        tracing::info!(
            score = result.score,
            confidence = ?result.confidence,
            model = generation.model.as_str(),
            "AI check completed"
        );
        Ok(result)
    }
}
