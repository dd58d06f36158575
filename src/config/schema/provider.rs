use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `[provider]` section: where and how to reach the Gemini API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// API key. Prefer the `GEMINI_API_KEY` environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL without a version segment (default: Google's public endpoint)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Candidate models, tried in order
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    /// Candidate API versions, tried in order for every model
    #[serde(default = "default_api_versions")]
    pub api_versions: Vec<String>,
    /// Model tried first when a request asks for high accuracy
    #[serde(default = "default_high_accuracy_model")]
    pub high_accuracy_model: Option<String>,
    /// Per-request timeout in seconds (default: 120)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".into()
}

fn default_models() -> Vec<String> {
    vec!["gemini-2.5-flash".into(), "gemini-2.0-flash".into()]
}

fn default_api_versions() -> Vec<String> {
    vec!["v1beta".into(), "v1".into()]
}

#[allow(clippy::unnecessary_wraps)]
fn default_high_accuracy_model() -> Option<String> {
    Some("gemini-2.5-pro".into())
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            models: default_models(),
            api_versions: default_api_versions(),
            high_accuracy_model: default_high_accuracy_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderSettings {
    /// Resolve the immutable per-call configuration.
    ///
    /// Fails with [`ConfigError::MissingApiKey`] before any network call when
    /// no credential is available.
    pub fn resolve(&self, high_accuracy: bool) -> Result<ProviderConfig, ConfigError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?
            .to_string();

        let mut models = Vec::with_capacity(self.models.len() + 1);
        if high_accuracy && let Some(privileged) = self.high_accuracy_model.as_deref() {
            models.push(privileged.to_string());
        }
        for model in &self.models {
            if !models.contains(model) {
                models.push(model.clone());
            }
        }

        Ok(ProviderConfig {
            api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            models,
            api_versions: self.api_versions.clone(),
        })
    }

    /// Upper bound, in seconds, on one executor call across the widest
    /// candidate matrix (high-accuracy model included).
    pub fn worst_case_call_secs(&self) -> u64 {
        let extra = self
            .high_accuracy_model
            .as_ref()
            .filter(|model| !self.models.contains(model))
            .map_or(0, |_| 1);
        let candidates = (self.models.len() + extra) * self.api_versions.len();
        u64::try_from(candidates)
            .unwrap_or(u64::MAX)
            .saturating_mul(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.models.iter().all(|m| m.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "[provider] models must list at least one model".into(),
            ));
        }
        if self.api_versions.iter().all(|v| v.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "[provider] api_versions must list at least one version".into(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "[provider] timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Immutable provider configuration handed to the request executor.
///
/// Built once per call by [`ProviderSettings::resolve`]; the credential is
/// always present.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub models: Vec<String>,
    pub api_versions: Vec<String>,
}

impl ProviderConfig {
    /// Number of (model, API version) pairs the executor may try.
    pub fn candidate_count(&self) -> usize {
        self.models.len() * self.api_versions.len()
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("models", &self.models)
            .field("api_versions", &self.api_versions)
            .finish()
    }
}
