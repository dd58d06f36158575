use crate::style::WritingStyle;
use serde::Serialize;
use strum::Display;

/// How hard the prompt pushes the model to self-check its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnforcementLevel {
    Standard,
    /// Adds a worked before/after example.
    Reinforced,
    /// Adds a sentence-by-sentence self-audit.
    Maximum,
}

/// Parameters for one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttemptConfig {
    pub strict_mode: bool,
    pub temperature: f64,
    pub enforcement: EnforcementLevel,
}

const STRICT_TEMPERATURE_CAP: f64 = 0.3;
const REINFORCED_TEMPERATURE_CAP: f64 = 0.15;

/// Bounded attempt schedule for one transform.
///
/// Strict styles plan two attempts up front (relaxed, then strict). Two more
/// with stronger enforcement are unlocked one at a time, only when the
/// previous attempt produced a validation failure. Other styles get exactly
/// one attempt. Temperatures never increase from one attempt to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptPlan {
    strict: bool,
    base_temperature: f64,
}

impl AttemptPlan {
    pub const MAX_ATTEMPTS: usize = 4;
    const PLANNED_STRICT_ATTEMPTS: usize = 2;

    pub fn new(style: WritingStyle, base_temperature: f64) -> Self {
        Self {
            strict: style.requires_strict_enforcement(),
            base_temperature: base_temperature.clamp(0.0, 2.0),
        }
    }

    pub fn first(&self) -> AttemptConfig {
        self.config_at(0)
    }

    /// The attempt after `completed` (zero-based), if any.
    ///
    /// `escalate` is true when `completed` ended in a validation failure;
    /// only that unlocks attempts beyond the initial plan.
    pub fn next(&self, completed: usize, escalate: bool) -> Option<AttemptConfig> {
        if !self.strict {
            return None;
        }
        let index = completed + 1;
        if index >= Self::MAX_ATTEMPTS {
            return None;
        }
        if index >= Self::PLANNED_STRICT_ATTEMPTS && !escalate {
            return None;
        }
        Some(self.config_at(index))
    }

    fn config_at(&self, index: usize) -> AttemptConfig {
        let t = self.base_temperature;
        match index {
            0 => AttemptConfig {
                strict_mode: false,
                temperature: t,
                enforcement: EnforcementLevel::Standard,
            },
            1 => AttemptConfig {
                strict_mode: true,
                temperature: t.min(STRICT_TEMPERATURE_CAP),
                enforcement: EnforcementLevel::Standard,
            },
            2 => AttemptConfig {
                strict_mode: true,
                temperature: t.min(REINFORCED_TEMPERATURE_CAP),
                enforcement: EnforcementLevel::Reinforced,
            },
            _ => AttemptConfig {
                strict_mode: true,
                temperature: 0.0,
                enforcement: EnforcementLevel::Maximum,
            },
        }
    }
}
