//! Shared configuration for skyprov.
//!
//! TOML profiles layered with `SKYPROV_` environment variables, and the
//! translation from a profile into the generic client construction mapping
//! that service packages consume.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use skyprov_api::{ClientConfig, SdkConfig, TlsMode, TransportConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{profile}' not found")]
    UnknownProfile { profile: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named provider profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            region: default_region(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_region() -> String {
    "us-east-1".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named profile: where the service clients should point.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Region; falls back to `defaults.region`.
    pub region: Option<String>,

    /// Endpoint override (e.g. a local emulator or VPC endpoint).
    pub endpoint: Option<String>,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Accept invalid certificates (emulators only).
    pub insecure: Option<bool>,

    /// Request timeout override, in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "skyprov", "skyprov").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("skyprov");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file, layered as defaults < file < `SKYPROV_*` env.
///
/// Nested keys use a double underscore: `SKYPROV_PROFILES__PROD__REGION`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SKYPROV_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Client configuration ────────────────────────────────────────────

impl Config {
    /// Look up a profile by name. The implicit `default` profile resolves
    /// to an empty profile so a bare install works off `defaults`.
    pub fn profile(&self, name: &str) -> Result<Profile, ConfigError> {
        match self.profiles.get(name) {
            Some(profile) => Ok(profile.clone()),
            None if name == "default" => Ok(Profile::default()),
            None => Err(ConfigError::UnknownProfile {
                profile: name.into(),
            }),
        }
    }
}

impl Profile {
    /// Build the base SDK configuration for this profile.
    pub fn sdk_config(&self, defaults: &Defaults) -> Result<SdkConfig, ConfigError> {
        let region = self.region.clone().unwrap_or_else(|| defaults.region.clone());
        if region.is_empty() {
            return Err(ConfigError::Validation {
                field: "region".into(),
                reason: "must not be empty".into(),
            });
        }

        let tls = if self.insecure.unwrap_or(false) {
            TlsMode::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.ca_cert {
            TlsMode::CustomCa(ca_path.clone())
        } else {
            TlsMode::System
        };

        let timeout = Duration::from_secs(self.timeout.unwrap_or(defaults.timeout));
        let transport = TransportConfig::default()
            .with_tls(tls)
            .with_timeout(timeout);

        Ok(SdkConfig::new(region).with_transport(transport))
    }

    /// Build the generic client construction mapping for this profile.
    ///
    /// Both recognized keys are always populated; no endpoint override is
    /// encoded as the empty string.
    pub fn client_config(&self, defaults: &Defaults) -> Result<ClientConfig, ConfigError> {
        let sdk = self.sdk_config(defaults)?;

        let endpoint = self.endpoint.clone().unwrap_or_default();
        if !endpoint.is_empty() {
            url::Url::parse(&endpoint).map_err(|e| ConfigError::Validation {
                field: "endpoint".into(),
                reason: format!("invalid URL {endpoint}: {e}"),
            })?;
        }

        Ok(ClientConfig::from_parts(sdk, endpoint))
    }
}
