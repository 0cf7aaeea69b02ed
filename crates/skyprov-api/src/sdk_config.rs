// ── Client construction configuration ──
//
// The host runtime hands every service package the same loosely keyed
// mapping. Only two keys mean anything to a service client: the base SDK
// configuration and the endpoint override. Everything else is ignored.

use std::collections::HashMap;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Key holding the base SDK configuration value.
pub const SDK_CONFIG_KEY: &str = "aws_sdkv2_config";

/// Key holding the endpoint override string. An empty string means "no override".
pub const ENDPOINT_KEY: &str = "endpoint";

/// Base SDK configuration shared by every service client.
#[derive(Debug, Clone, Default)]
pub struct SdkConfig {
    /// Region used to derive the default service endpoint.
    pub region: String,
    /// Transport settings for the HTTP client built from this config.
    pub transport: TransportConfig,
    /// Pre-built HTTP client (e.g. one carrying request signing middleware).
    /// When set, `transport` is ignored.
    pub http: Option<reqwest::Client>,
}

impl SdkConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// The HTTP client service clients should use.
    pub(crate) fn http_client(&self) -> Result<reqwest::Client, Error> {
        match &self.http {
            Some(http) => Ok(http.clone()),
            None => self.transport.build_client(),
        }
    }
}

/// A value in the client construction mapping.
#[derive(Debug, Clone)]
pub enum ConfigValue {
    Sdk(Box<SdkConfig>),
    Text(String),
}

impl ConfigValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Sdk(_) => "SDK configuration",
            Self::Text(_) => "string",
        }
    }
}

impl From<SdkConfig> for ConfigValue {
    fn from(config: SdkConfig) -> Self {
        Self::Sdk(Box::new(config))
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// Generic client construction mapping, keyed by [`SDK_CONFIG_KEY`] and [`ENDPOINT_KEY`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfig(HashMap<String, ConfigValue>);

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor populating both recognized keys.
    pub fn from_parts(sdk: SdkConfig, endpoint: impl Into<String>) -> Self {
        let mut config = Self::new();
        config.insert(SDK_CONFIG_KEY, sdk);
        config.insert(ENDPOINT_KEY, endpoint.into());
        config
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// The base SDK configuration. Missing or mistyped is a contract violation.
    pub fn sdk_config(&self) -> Result<&SdkConfig, Error> {
        match self.get(SDK_CONFIG_KEY) {
            Some(ConfigValue::Sdk(config)) => Ok(config),
            Some(other) => Err(Error::configuration(
                SDK_CONFIG_KEY,
                format!("expected SDK configuration, found {}", other.kind()),
            )),
            None => Err(Error::configuration(SDK_CONFIG_KEY, "key is missing")),
        }
    }

    /// The endpoint override, `None` when the configured string is empty.
    pub fn endpoint_override(&self) -> Result<Option<&str>, Error> {
        match self.get(ENDPOINT_KEY) {
            Some(ConfigValue::Text(endpoint)) if endpoint.is_empty() => Ok(None),
            Some(ConfigValue::Text(endpoint)) => Ok(Some(endpoint)),
            Some(other) => Err(Error::configuration(
                ENDPOINT_KEY,
                format!("expected string, found {}", other.kind()),
            )),
            None => Err(Error::configuration(ENDPOINT_KEY, "key is missing")),
        }
    }
}
