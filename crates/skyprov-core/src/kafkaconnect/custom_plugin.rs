// ── aws_mskconnect_custom_plugin ──

use crate::names::{ATTR_ARN, ATTR_DESCRIPTION, ATTR_NAME};
use crate::schema::{Attribute, AttributeKind as Kind, Resource};

pub(super) const TYPE_NAME: &str = "aws_mskconnect_custom_plugin";

pub fn resource_custom_plugin() -> Resource {
    Resource::new("Provides an MSK Connect custom plugin.")
        .attribute(ATTR_ARN, Attribute::computed(Kind::String))
        .attribute(ATTR_NAME, Attribute::required(Kind::String).force_new())
        .attribute(ATTR_DESCRIPTION, Attribute::optional(Kind::String).force_new())
        // JAR or ZIP
        .attribute("content_type", Attribute::required(Kind::String).force_new())
        .attribute("latest_revision", Attribute::computed(Kind::Int))
        .attribute("location", Attribute::required(Kind::List).force_new())
        .attribute("state", Attribute::computed(Kind::String))
        .with_tags()
}

pub fn data_source_custom_plugin() -> Resource {
    Resource::new("Get information on an MSK Connect custom plugin.")
        .attribute(ATTR_ARN, Attribute::computed(Kind::String))
        .attribute(ATTR_NAME, Attribute::required(Kind::String))
        .attribute(ATTR_DESCRIPTION, Attribute::computed(Kind::String))
        .attribute("latest_revision", Attribute::computed(Kind::Int))
        .attribute("state", Attribute::computed(Kind::String))
        .with_computed_tags()
}
