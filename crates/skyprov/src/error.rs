//! CLI error types with miette diagnostics.
//!
//! Maps library errors into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use skyprov_config::ConfigError;
use skyprov_core::PolicyError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const VALIDATION: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(skyprov::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Add one under [profiles.{name}] in {path}"
        )
    )]
    ProfileNotFound {
        name: String,
        available: String,
        path: String,
    },

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(skyprov::config),
        help("Check your profile, or override it with --region / --endpoint.")
    )]
    Config(#[from] ConfigError),

    #[error("Could not build the service client")]
    #[diagnostic(
        code(skyprov::client_config),
        help("Check the region and endpoint of the active profile.")
    )]
    ClientConfig(#[source] skyprov_api::Error),

    // ── Service ──────────────────────────────────────────────────────

    #[error("Resource '{identifier}' not found")]
    #[diagnostic(
        code(skyprov::not_found),
        help("Run: skyprov kafkaconnect {list_command} to see available resources")
    )]
    NotFound {
        identifier: String,
        list_command: String,
    },

    #[error("API error ({code}): {message}")]
    #[diagnostic(code(skyprov::api_error))]
    Api { code: String, message: String },

    #[error(transparent)]
    #[diagnostic(code(skyprov::transport))]
    Transport(skyprov_api::Error),

    // ── Policy documents ─────────────────────────────────────────────

    #[error("Unsupported policy document extension for {path}")]
    #[diagnostic(
        code(skyprov::unsupported_format),
        help("Use a .json, .yaml or .yml file.")
    )]
    UnsupportedFormat { path: String },

    #[error("Could not read policy document {path}")]
    #[diagnostic(code(skyprov::policy_read))]
    PolicyRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid policy document {path}")]
    #[diagnostic(code(skyprov::policy))]
    Policy {
        path: String,
        #[source]
        source: PolicyError,
    },

    #[error("Policy document has {count} error(s)")]
    #[diagnostic(
        code(skyprov::validation_failed),
        help("Fix the issues listed above and run `skyprov policy validate` again.")
    )]
    ValidationFailed { count: usize },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not serialize output: {0}")]
    #[diagnostic(code(skyprov::output))]
    Output(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ProfileNotFound { .. } | Self::Config(_) | Self::ClientConfig(_) => {
                exit_code::CONFIG
            }
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::UnsupportedFormat { .. } => exit_code::USAGE,
            Self::Policy { .. } | Self::ValidationFailed { .. } => exit_code::VALIDATION,
            _ => exit_code::GENERAL,
        }
    }
}

// ── skyprov_api::Error → CliError mapping ────────────────────────────

impl From<skyprov_api::Error> for CliError {
    fn from(err: skyprov_api::Error) -> Self {
        match err {
            err if err.is_configuration() => CliError::ClientConfig(err),
            skyprov_api::Error::Api {
                message,
                code,
                status,
            } => CliError::Api {
                code: code.unwrap_or_else(|| format!("HTTP {status}")),
                message,
            },
            other => CliError::Transport(other),
        }
    }
}
