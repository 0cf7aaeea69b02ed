// ── aws_mskconnect_connector ──

use crate::names::{ATTR_ARN, ATTR_DESCRIPTION, ATTR_NAME};
use crate::schema::{Attribute, AttributeKind as Kind, Resource};

pub(super) const TYPE_NAME: &str = "aws_mskconnect_connector";
pub(super) const DISPLAY_NAME: &str = "Connector";

/// Managed connector: capacity, cluster wiring, plugins and worker config.
pub fn resource_connector() -> Resource {
    Resource::new("Provides an MSK Connect connector.")
        .attribute(ATTR_ARN, Attribute::computed(Kind::String))
        .attribute(ATTR_NAME, Attribute::required(Kind::String).force_new())
        .attribute(ATTR_DESCRIPTION, Attribute::optional(Kind::String).force_new())
        .attribute("capacity", Attribute::required(Kind::List))
        .attribute(
            "connector_configuration",
            Attribute::required(Kind::Map).force_new(),
        )
        .attribute("kafka_cluster", Attribute::required(Kind::List).force_new())
        .attribute(
            "kafka_cluster_client_authentication",
            Attribute::required(Kind::List).force_new(),
        )
        .attribute(
            "kafka_cluster_encryption_in_transit",
            Attribute::required(Kind::List).force_new(),
        )
        .attribute(
            "kafkaconnect_version",
            Attribute::required(Kind::String).force_new(),
        )
        .attribute("log_delivery", Attribute::optional(Kind::List).force_new())
        .attribute("plugin", Attribute::required(Kind::List).force_new())
        .attribute(
            "service_execution_role_arn",
            Attribute::required(Kind::String).force_new(),
        )
        .attribute("version", Attribute::computed(Kind::String))
        .attribute("worker_configuration", Attribute::optional(Kind::List).force_new())
        .attribute("worker_count", Attribute::computed(Kind::Int))
        .with_tags()
}

/// Look up a connector by name.
pub fn data_source_connector() -> Resource {
    Resource::new("Get information on an MSK Connect connector.")
        .attribute(ATTR_ARN, Attribute::computed(Kind::String))
        .attribute(ATTR_NAME, Attribute::required(Kind::String))
        .attribute(ATTR_DESCRIPTION, Attribute::computed(Kind::String))
        .attribute("version", Attribute::computed(Kind::String))
        .with_computed_tags()
}
