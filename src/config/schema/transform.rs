use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// `[transform]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Sampling temperature when a request does not override it (default: 0.7)
    #[serde(default = "default_temperature")]
    pub default_temperature: f64,
}

fn default_temperature() -> f64 {
    0.7
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            default_temperature: default_temperature(),
        }
    }
}

impl TransformConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.default_temperature) {
            return Err(ConfigError::Validation(format!(
                "[transform] default_temperature must be within 0.0..=2.0, got {}",
                self.default_temperature
            )));
        }
        Ok(())
    }
}
