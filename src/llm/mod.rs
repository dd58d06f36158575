pub mod gemini;
pub mod http_client;
pub mod retry;
pub mod scrub;

pub use gemini::{GeminiClient, GenerateContentRequest, Generation};
pub use http_client::build_gemini_client;
pub use retry::{RetryDecision, classify};
pub use scrub::{sanitize_api_error, scrub_secret_patterns};
