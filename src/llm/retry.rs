//! Failure classification for the (model × API version) candidate matrix.

use crate::error::LlmError;

/// Where the executor goes after a failed candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Try the next API version of the same model.
    NextVersion,
    /// Skip the remaining versions of this model.
    NextModel,
}

const MODEL_EXHAUSTED_STATUSES: [u16; 4] = [429, 500, 503, 507];

fn is_version_mismatch(message: &str) -> bool {
    message
        .to_ascii_lowercase()
        .contains("not found for api version")
}

fn is_capacity_exhausted(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("quota")
        || lower.contains("resource_exhausted")
        || lower.contains("resource has been exhausted")
        || lower.contains("rate limit")
        || lower.contains("rate-limit")
        || lower.contains("too many requests")
        || lower.contains("overloaded")
        || lower.contains("unavailable")
}

/// Decide how to continue after `err`.
///
/// Structured status comes first; message keywords are the fallback.
/// Anything unrecognized moves to the next version so the whole matrix is
/// still explored.
pub fn classify(err: &LlmError) -> RetryDecision {
    match err {
        LlmError::Http {
            status, message, ..
        } => {
            if *status == 404 || (*status == 400 && is_version_mismatch(message)) {
                RetryDecision::NextVersion
            } else if MODEL_EXHAUSTED_STATUSES.contains(status) || is_capacity_exhausted(message) {
                RetryDecision::NextModel
            } else {
                RetryDecision::NextVersion
            }
        }
        LlmError::Provider { message, .. } if is_capacity_exhausted(message) => {
            RetryDecision::NextModel
        }
        // Another version of the same model hits the same output budget.
        LlmError::Truncated { .. } => RetryDecision::NextModel,
        _ => RetryDecision::NextVersion,
    }
}
