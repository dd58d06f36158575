#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod analyze;
pub mod config;
pub mod error;
pub mod gateway;
pub mod llm;
pub mod prompt;
pub mod style;
pub mod text;
pub mod transform;

pub use analyze::{AiCheckResult, AiLikelihoodAnalyzer, Confidence};
pub use config::Config;
pub use error::{BuntaiError, ConfigError, LlmError};
pub use style::WritingStyle;
pub use text::{PunctuationMode, TextStats};
pub use transform::{StyleTransformer, TransformRequest, TransformResult};
