// ── aws_mskconnect_worker_configuration ──

use crate::names::{ATTR_ARN, ATTR_DESCRIPTION, ATTR_NAME};
use crate::schema::{Attribute, AttributeKind as Kind, Resource};

pub(super) const TYPE_NAME: &str = "aws_mskconnect_worker_configuration";

pub fn resource_worker_configuration() -> Resource {
    Resource::new("Provides an MSK Connect worker configuration.")
        .attribute(ATTR_ARN, Attribute::computed(Kind::String))
        .attribute(ATTR_NAME, Attribute::required(Kind::String).force_new())
        .attribute(ATTR_DESCRIPTION, Attribute::optional(Kind::String).force_new())
        .attribute("latest_revision", Attribute::computed(Kind::Int))
        .attribute(
            "properties_file_content",
            Attribute::required(Kind::String).force_new(),
        )
        .with_tags()
}

pub fn data_source_worker_configuration() -> Resource {
    Resource::new("Get information on an MSK Connect worker configuration.")
        .attribute(ATTR_ARN, Attribute::computed(Kind::String))
        .attribute(ATTR_NAME, Attribute::required(Kind::String))
        .attribute(ATTR_DESCRIPTION, Attribute::computed(Kind::String))
        .attribute("latest_revision", Attribute::computed(Kind::Int))
        .attribute("properties_file_content", Attribute::computed(Kind::String))
        .with_computed_tags()
}
