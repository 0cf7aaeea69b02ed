use thiserror::Error;

/// Top-level error type for the `skyprov-api` crate.
///
/// Covers client construction (configuration contract), transport,
/// and service-level failures. `skyprov-core` and the CLI surface these
/// unchanged; nothing in this crate retries.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// A recognized client configuration key is missing or has the wrong shape.
    #[error("invalid client configuration key '{key}': {reason}")]
    Configuration { key: String, reason: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Service ─────────────────────────────────────────────────────
    /// Structured error returned by the service.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        message: String,
        code: Option<String>,
        status: u16,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    pub(crate) fn configuration(key: &str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            key: key.to_owned(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the caller handed in a malformed configuration mapping.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            Self::Api { code: Some(code), .. } => code == "NotFoundException",
            _ => false,
        }
    }

    /// Extract the service error code, if available.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
