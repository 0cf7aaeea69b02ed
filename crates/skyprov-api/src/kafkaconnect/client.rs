// Async HTTP client for the Kafka Connect (MSK Connect) REST API.
//
// Base path: /v1/
// Request signing is the HTTP client's concern: hosts that need it pass a
// pre-built client through `SdkConfig::with_http_client`.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::types::{
    ConnectorDescription, ConnectorSummary, CustomPluginDescription, CustomPluginSummary,
    ErrorResponse, ListConnectorsResponse, ListCustomPluginsResponse, ListOptions,
    ListTagsForResourceResponse, ListWorkerConfigurationsResponse, Page,
    WorkerConfigurationDescription, WorkerConfigurationSummary,
};
use crate::error::Error;
use crate::sdk_config::{ClientConfig, ENDPOINT_KEY, SDK_CONFIG_KEY, SdkConfig};

const SERVICE_ENDPOINT_PREFIX: &str = "kafkaconnect";
const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

/// Async client for the Kafka Connect API.
///
/// Built once per session by the service package's client factory. The
/// client holds no per-request state and can be shared across operations.
#[derive(Debug, Clone)]
pub struct KafkaConnectClient {
    http: reqwest::Client,
    base_url: Url,
    region: String,
}

impl KafkaConnectClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from the generic client construction mapping.
    ///
    /// Fails with [`Error::Configuration`] when either recognized key is
    /// missing or mistyped.
    pub fn from_client_config(config: &ClientConfig) -> Result<Self, Error> {
        let sdk = config.sdk_config()?;
        let endpoint = config.endpoint_override()?;
        Self::from_sdk_config(sdk, endpoint)
    }

    /// Build from a base SDK configuration and an optional endpoint override.
    pub fn from_sdk_config(sdk: &SdkConfig, base_endpoint: Option<&str>) -> Result<Self, Error> {
        let base_url = Self::resolve_endpoint(&sdk.region, base_endpoint)?;
        let http = sdk.http_client()?;
        debug!(region = %sdk.region, endpoint = %base_url, "kafkaconnect client configured");

        Ok(Self {
            http,
            base_url,
            region: sdk.region.clone(),
        })
    }

    /// Resolve the service endpoint: the override when given, otherwise the
    /// regional default `https://kafkaconnect.{region}.amazonaws.com/`.
    pub fn resolve_endpoint(region: &str, base_endpoint: Option<&str>) -> Result<Url, Error> {
        let raw = match base_endpoint {
            Some(endpoint) => endpoint.to_owned(),
            None if region.is_empty() => {
                return Err(Error::configuration(
                    SDK_CONFIG_KEY,
                    "region is empty and no endpoint override is set",
                ));
            }
            None => format!("https://{SERVICE_ENDPOINT_PREFIX}.{region}.amazonaws.com"),
        };

        let mut url = Url::parse(&raw)
            .map_err(|e| Error::configuration(ENDPOINT_KEY, format!("invalid URL {raw}: {e}")))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration(
                ENDPOINT_KEY,
                format!("not an http(s) base URL: {raw}"),
            ));
        }

        // Always end in `/` so segment appends stay under the base path.
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The resolved service endpoint.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The region this client was configured for.
    pub fn region(&self) -> &str {
        &self.region
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments to the base URL. Segments are percent-encoded,
    /// so ARNs containing `/` stay a single segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // resolve_endpoint guarantees a base URL, so this never fails.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(segments);
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        // `x-amzn-ErrorType: NotFoundException:http://internal.amazon.com/...`
        let header_code = resp
            .headers()
            .get(ERROR_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(':').next().unwrap_or(v).to_owned());

        let raw = resp.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<ErrorResponse>(&raw).unwrap_or_default();

        let code = header_code.or_else(|| {
            parsed
                .error_type
                .as_deref()
                .map(|t| t.rsplit('#').next().unwrap_or(t).to_owned())
        });
        let message = match parsed.message {
            Some(message) => message,
            None if raw.is_empty() => status.to_string(),
            None => raw,
        };

        Error::Api {
            status: status.as_u16(),
            message,
            code,
        }
    }

    // ── Connectors ───────────────────────────────────────────────────

    pub async fn list_connectors(
        &self,
        options: &ListOptions,
    ) -> Result<Page<ConnectorSummary>, Error> {
        let resp: ListConnectorsResponse = self
            .get(&["v1", "connectors"], &options.query("connectorNamePrefix"))
            .await?;
        Ok(Page {
            items: resp.connectors,
            next_token: resp.next_token,
        })
    }

    pub async fn describe_connector(&self, arn: &str) -> Result<ConnectorDescription, Error> {
        self.get(&["v1", "connectors", arn], &[]).await
    }

    // ── Custom plugins ───────────────────────────────────────────────

    pub async fn list_custom_plugins(
        &self,
        options: &ListOptions,
    ) -> Result<Page<CustomPluginSummary>, Error> {
        let resp: ListCustomPluginsResponse = self
            .get(&["v1", "custom-plugins"], &options.query("namePrefix"))
            .await?;
        Ok(Page {
            items: resp.custom_plugins,
            next_token: resp.next_token,
        })
    }

    pub async fn describe_custom_plugin(&self, arn: &str) -> Result<CustomPluginDescription, Error> {
        self.get(&["v1", "custom-plugins", arn], &[]).await
    }

    // ── Worker configurations ────────────────────────────────────────

    pub async fn list_worker_configurations(
        &self,
        options: &ListOptions,
    ) -> Result<Page<WorkerConfigurationSummary>, Error> {
        let resp: ListWorkerConfigurationsResponse = self
            .get(&["v1", "worker-configurations"], &options.query("namePrefix"))
            .await?;
        Ok(Page {
            items: resp.worker_configurations,
            next_token: resp.next_token,
        })
    }

    pub async fn describe_worker_configuration(
        &self,
        arn: &str,
    ) -> Result<WorkerConfigurationDescription, Error> {
        self.get(&["v1", "worker-configurations", arn], &[]).await
    }

    // ── Tags ─────────────────────────────────────────────────────────

    /// Tags on any Kafka Connect resource, keyed by its ARN.
    pub async fn list_tags_for_resource(
        &self,
        arn: &str,
    ) -> Result<std::collections::BTreeMap<String, String>, Error> {
        let resp: ListTagsForResourceResponse = self.get(&["v1", "tags", arn], &[]).await?;
        Ok(resp.tags)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_regional() {
        let url = KafkaConnectClient::resolve_endpoint("eu-central-1", None).unwrap();
        assert_eq!(url.as_str(), "https://kafkaconnect.eu-central-1.amazonaws.com/");
    }

    #[test]
    fn override_wins_over_region() {
        let url =
            KafkaConnectClient::resolve_endpoint("eu-central-1", Some("http://localhost:4566/"))
                .unwrap();
        assert_eq!(url.as_str(), "http://localhost:4566/");
    }

    #[test]
    fn override_keeps_base_path() {
        let url =
            KafkaConnectClient::resolve_endpoint("", Some("https://proxy.internal/kafkaconnect"))
                .unwrap();
        assert_eq!(url.as_str(), "https://proxy.internal/kafkaconnect/");
    }

    #[test]
    fn empty_region_without_override_fails() {
        let err = KafkaConnectClient::resolve_endpoint("", None).unwrap_err();
        assert!(err.is_configuration(), "got: {err:?}");
    }

    #[test]
    fn non_http_override_fails() {
        let err =
            KafkaConnectClient::resolve_endpoint("us-east-1", Some("mailto:ops@example.com"))
                .unwrap_err();
        assert!(
            matches!(&err, Error::Configuration { key, .. } if key == ENDPOINT_KEY),
            "got: {err:?}"
        );
    }

    #[test]
    fn unparsable_override_names_endpoint_key() {
        let err = KafkaConnectClient::resolve_endpoint("us-east-1", Some("not a url")).unwrap_err();
        assert!(
            matches!(&err, Error::Configuration { key, .. } if key == ENDPOINT_KEY),
            "got: {err:?}"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn arn_segments_are_escaped() {
        let client = KafkaConnectClient::from_sdk_config(
            &SdkConfig::new("us-east-1"),
            Some("https://kafkaconnect.test/base"),
        )
        .unwrap();
        let url = client.url(&[
            "v1",
            "connectors",
            "arn:aws:kafkaconnect:us-east-1:123456789012:connector/orders/abc",
        ]);
        assert_eq!(
            url.as_str(),
            "https://kafkaconnect.test/base/v1/connectors/arn:aws:kafkaconnect:us-east-1:123456789012:connector%2Forders%2Fabc"
        );
    }
}
