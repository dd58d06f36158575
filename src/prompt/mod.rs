pub mod builder;
pub mod engine;
mod templates;

pub use builder::PromptBuilder;
pub use engine::{PromptKind, TeraEngine};
