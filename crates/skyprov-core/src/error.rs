use thiserror::Error;

/// Errors from encoding or decoding a policy document.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A field holds a value of the wrong shape for its encoding rule.
    #[error("{field}: expected {expected}, found {found}")]
    UnexpectedShape {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML decoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
