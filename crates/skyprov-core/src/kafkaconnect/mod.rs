//! Kafka Connect (MSK Connect) service package.
//!
//! Registers the connector, custom plugin and worker configuration kinds as
//! both SDK resources and SDK data sources, all tagged by `arn`. There are
//! no framework-style kinds in this service.

mod connector;
mod custom_plugin;
mod worker_configuration;

use skyprov_api::{ClientConfig, KafkaConnectClient};
use tracing::debug;

use crate::names::{ATTR_ARN, KAFKA_CONNECT};
use crate::registry::{
    FrameworkDataSource, FrameworkResource, ResourceTags, SdkDataSource, SdkResource,
    ServicePackage,
};

pub use connector::{data_source_connector, resource_connector};
pub use custom_plugin::{data_source_custom_plugin, resource_custom_plugin};
pub use worker_configuration::{data_source_worker_configuration, resource_worker_configuration};

const ARN_TAGS: Option<ResourceTags> = Some(ResourceTags {
    identifier_attribute: ATTR_ARN,
});

#[derive(Debug, Clone, Copy, Default)]
pub struct KafkaConnectPackage;

/// Entry point the host runtime calls to load this package.
pub fn service_package() -> KafkaConnectPackage {
    KafkaConnectPackage
}

impl ServicePackage for KafkaConnectPackage {
    type Client = KafkaConnectClient;

    fn framework_data_sources(&self) -> Vec<FrameworkDataSource> {
        Vec::new()
    }

    fn framework_resources(&self) -> Vec<FrameworkResource> {
        Vec::new()
    }

    fn sdk_data_sources(&self) -> Vec<SdkDataSource> {
        vec![
            SdkDataSource {
                factory: data_source_connector,
                type_name: connector::TYPE_NAME,
                name: Some(connector::DISPLAY_NAME),
                tags: ARN_TAGS,
            },
            SdkDataSource {
                factory: data_source_custom_plugin,
                type_name: custom_plugin::TYPE_NAME,
                name: None,
                tags: ARN_TAGS,
            },
            SdkDataSource {
                factory: data_source_worker_configuration,
                type_name: worker_configuration::TYPE_NAME,
                name: None,
                tags: ARN_TAGS,
            },
        ]
    }

    fn sdk_resources(&self) -> Vec<SdkResource> {
        vec![
            SdkResource {
                factory: resource_connector,
                type_name: connector::TYPE_NAME,
                name: Some(connector::DISPLAY_NAME),
                tags: ARN_TAGS,
            },
            SdkResource {
                factory: resource_custom_plugin,
                type_name: custom_plugin::TYPE_NAME,
                name: None,
                tags: ARN_TAGS,
            },
            SdkResource {
                factory: resource_worker_configuration,
                type_name: worker_configuration::TYPE_NAME,
                name: None,
                tags: ARN_TAGS,
            },
        ]
    }

    fn service_package_name(&self) -> &'static str {
        KAFKA_CONNECT
    }

    fn new_client(&self, config: &ClientConfig) -> Result<KafkaConnectClient, skyprov_api::Error> {
        debug!(service = KAFKA_CONNECT, "constructing API client");
        KafkaConnectClient::from_client_config(config)
    }
}
