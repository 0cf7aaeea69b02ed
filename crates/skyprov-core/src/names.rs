// Shared attribute and service identifiers.

/// Service package name for Kafka Connect (MSK Connect).
pub const KAFKA_CONNECT: &str = "kafkaconnect";

pub const ATTR_ARN: &str = "arn";
pub const ATTR_DESCRIPTION: &str = "description";
pub const ATTR_NAME: &str = "name";
pub const ATTR_TAGS: &str = "tags";
pub const ATTR_TAGS_ALL: &str = "tags_all";
