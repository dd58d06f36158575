use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `buntai`.
///
/// Every failure that leaves the transform or AI-check core is one of these
/// variants. Callers switch on the variant (or on [`BuntaiError::status_code`])
/// to build their response; application plumbing keeps using
/// `anyhow::Result` for context chains.
#[derive(Debug, Error)]
pub enum BuntaiError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── LLM / Provider ──────────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── Transform ───────────────────────────────────────────────────────
    #[error("upstream produced non-compliant output: {reason}")]
    NonCompliant { reason: String },

    #[error("upstream request failed: {0}")]
    UpstreamFailed(LlmError),

    // ── AI check ────────────────────────────────────────────────────────
    #[error("could not parse model response: {0}")]
    Parse(String),

    // ── Caller input ────────────────────────────────────────────────────
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BuntaiError {
    /// HTTP-style status derived from the failure's severity.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Config(_) | Self::Other(_) => 500,
            Self::Llm(err) => err.status_code(),
            Self::NonCompliant { .. } | Self::UpstreamFailed(_) | Self::Parse(_) => 502,
            Self::InvalidInput(_) => 400,
        }
    }
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Gemini API key is not configured (set GEMINI_API_KEY or [provider] api_key)")]
    MissingApiKey,

    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

/// A failure produced by one call to the generation endpoint.
///
/// Messages are already scrubbed of credentials when constructed.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("Gemini API error ({status}) from {model}@{api_version}: {message}")]
    Http {
        status: u16,
        message: String,
        model: String,
        api_version: String,
    },

    #[error("request to {model}@{api_version} failed: {message}")]
    Network {
        message: String,
        model: String,
        api_version: String,
    },

    #[error("could not decode response from {model}@{api_version}: {message}")]
    Decode {
        message: String,
        model: String,
        api_version: String,
    },

    #[error("Gemini API error from {model}@{api_version}: {message}")]
    Provider {
        message: String,
        model: String,
        api_version: String,
    },

    #[error("no text in response from {model}@{api_version}")]
    EmptyOutput { model: String, api_version: String },

    #[error("response from {model}@{api_version} stopped early ({finish_reason})")]
    Truncated {
        finish_reason: String,
        model: String,
        api_version: String,
    },

    #[error("no candidate models or API versions configured")]
    NoCandidates,
}

impl LlmError {
    /// Upstream HTTP status when the provider answered with one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Http { status, .. } if (400..600).contains(status) => *status,
            Self::NoCandidates => 500,
            _ => 502,
        }
    }
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, BuntaiError>;
