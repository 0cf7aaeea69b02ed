//! Kafka Connect (MSK Connect) response types.
//!
//! All types match the JSON bodies returned under `/v1/`. Field names use
//! camelCase via `#[serde(rename_all = "camelCase")]`. Nested blocks the
//! provider never inspects (capacity, plugin list, cluster settings) are
//! kept as opaque JSON in `extra`.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Pagination ───────────────────────────────────────────────────────

/// One page of a list operation. The caller decides whether to follow `next_token`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_token: Option<String>,
}

/// Common filters for list operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub name_prefix: Option<String>,
    pub next_token: Option<String>,
    pub max_results: Option<u32>,
}

impl ListOptions {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            name_prefix: Some(prefix.into()),
            ..Self::default()
        }
    }

    /// Query parameters, with the name prefix under the operation-specific key.
    pub(crate) fn query(&self, prefix_key: &'static str) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(prefix) = &self.name_prefix {
            params.push((prefix_key, prefix.clone()));
        }
        if let Some(token) = &self.next_token {
            params.push(("nextToken", token.clone()));
        }
        if let Some(max) = self.max_results {
            params.push(("maxResults", max.to_string()));
        }
        params
    }
}

// ── Connectors ───────────────────────────────────────────────────────

/// Connector overview from `GET /v1/connectors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorSummary {
    pub connector_arn: String,
    pub connector_name: String,
    #[serde(default)]
    pub connector_description: Option<String>,
    /// One of: `RUNNING`, `CREATING`, `UPDATING`, `DELETING`, `FAILED`.
    #[serde(default)]
    pub connector_state: Option<String>,
    #[serde(default)]
    pub current_version: Option<String>,
    #[serde(default)]
    pub kafka_connect_version: Option<String>,
    #[serde(default)]
    pub service_execution_role_arn: Option<String>,
    /// ISO 8601 date-time.
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListConnectorsResponse {
    #[serde(default)]
    pub connectors: Vec<ConnectorSummary>,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// Connector details from `GET /v1/connectors/{connectorArn}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorDescription {
    pub connector_arn: String,
    pub connector_name: String,
    #[serde(default)]
    pub connector_description: Option<String>,
    #[serde(default)]
    pub connector_state: Option<String>,
    #[serde(default)]
    pub current_version: Option<String>,
    #[serde(default)]
    pub kafka_connect_version: Option<String>,
    #[serde(default)]
    pub service_execution_role_arn: Option<String>,
    #[serde(default)]
    pub connector_configuration: BTreeMap<String, String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    /// Present when the connector is in a failed state.
    #[serde(default)]
    pub state_description: Option<StateDescription>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDescription {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ── Custom plugins ───────────────────────────────────────────────────

/// Custom plugin overview from `GET /v1/custom-plugins`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPluginSummary {
    pub custom_plugin_arn: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// One of: `CREATING`, `CREATE_FAILED`, `ACTIVE`, `UPDATING`, `UPDATE_FAILED`, `DELETING`.
    #[serde(default)]
    pub custom_plugin_state: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub latest_revision: Option<CustomPluginRevision>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListCustomPluginsResponse {
    #[serde(default)]
    pub custom_plugins: Vec<CustomPluginSummary>,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// Custom plugin details from `GET /v1/custom-plugins/{customPluginArn}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPluginDescription {
    pub custom_plugin_arn: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub custom_plugin_state: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub latest_revision: Option<CustomPluginRevision>,
    #[serde(default)]
    pub state_description: Option<StateDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPluginRevision {
    pub revision: i64,
    /// `JAR` or `ZIP`.
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    /// S3 location and file description; opaque to the provider.
    #[serde(default)]
    pub location: Option<Value>,
}

// ── Worker configurations ────────────────────────────────────────────

/// Worker configuration overview from `GET /v1/worker-configurations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerConfigurationSummary {
    pub worker_configuration_arn: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub latest_revision: Option<WorkerConfigurationRevision>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListWorkerConfigurationsResponse {
    #[serde(default)]
    pub worker_configurations: Vec<WorkerConfigurationSummary>,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// Worker configuration details from `GET /v1/worker-configurations/{arn}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerConfigurationDescription {
    pub worker_configuration_arn: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub latest_revision: Option<WorkerConfigurationRevision>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerConfigurationRevision {
    pub revision: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    /// Base64-encoded `connect-distributed.properties` content. Only on describe.
    #[serde(default)]
    pub properties_file_content: Option<String>,
}

// ── Tags ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct ListTagsForResourceResponse {
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

// ── Errors ───────────────────────────────────────────────────────────

/// REST-JSON error body. The service is inconsistent about capitalisation.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
    #[serde(default, rename = "__type")]
    pub error_type: Option<String>,
}
