use super::super::{GatewayConfig, ProviderConfig, ProviderSettings, TransformConfig};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub provider: ProviderSettings,

    #[serde(default)]
    pub transform: TransformConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.provider.validate()?;
        self.transform.validate()?;
        self.gateway.validate()
    }

    /// Resolve the provider configuration for one call.
    pub fn provider_config(&self, high_accuracy: bool) -> Result<ProviderConfig, ConfigError> {
        self.provider.resolve(high_accuracy)
    }

    pub fn default_temperature(&self) -> f64 {
        self.transform.default_temperature
    }

    pub fn has_api_key(&self) -> bool {
        self.provider
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
