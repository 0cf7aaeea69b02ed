// ── Service package registration ──
//
// The shape a host plugin runtime reads at start-up. Every collection is a
// plain `Vec`: a service with no framework-style kinds returns an empty one.

use serde::Serialize;

use skyprov_api::ClientConfig;

use crate::schema::Resource;

/// Construction function for a kind's runtime handler.
pub type Factory = fn() -> Resource;

/// Tag wiring for a kind: which attribute holds the ARN-like identifier
/// used when listing or updating tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceTags {
    pub identifier_attribute: &'static str,
}

/// A data source implemented against the plugin SDK.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SdkDataSource {
    #[serde(skip)]
    pub factory: Factory,
    pub type_name: &'static str,
    pub name: Option<&'static str>,
    pub tags: Option<ResourceTags>,
}

/// A managed resource implemented against the plugin SDK.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SdkResource {
    #[serde(skip)]
    pub factory: Factory,
    pub type_name: &'static str,
    pub name: Option<&'static str>,
    pub tags: Option<ResourceTags>,
}

/// A data source implemented against the plugin framework. The type name
/// comes from the handler itself, so only the factory is registered.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameworkDataSource {
    #[serde(skip)]
    pub factory: Factory,
    pub name: Option<&'static str>,
    pub tags: Option<ResourceTags>,
}

/// A managed resource implemented against the plugin framework.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameworkResource {
    #[serde(skip)]
    pub factory: Factory,
    pub name: Option<&'static str>,
    pub tags: Option<ResourceTags>,
}

/// Registration unit a host runtime loads to learn a service's kinds.
pub trait ServicePackage {
    /// The API client this package's handlers talk through.
    type Client;

    fn framework_data_sources(&self) -> Vec<FrameworkDataSource>;

    fn framework_resources(&self) -> Vec<FrameworkResource>;

    fn sdk_data_sources(&self) -> Vec<SdkDataSource>;

    fn sdk_resources(&self) -> Vec<SdkResource>;

    fn service_package_name(&self) -> &'static str;

    /// Build the API client from the host's configuration mapping.
    ///
    /// Called once per session. A missing or mistyped recognized key is a
    /// caller-contract violation and fails with a configuration error.
    fn new_client(&self, config: &ClientConfig) -> Result<Self::Client, skyprov_api::Error>;
}

/// Flat, serializable view of a package's table, for listing and diffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationEntry {
    pub service: &'static str,
    pub kind: EntryKind,
    pub type_name: Option<&'static str>,
    pub name: Option<&'static str>,
    pub tag_identifier: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntryKind {
    FrameworkDataSource,
    FrameworkResource,
    SdkDataSource,
    SdkResource,
}

/// Collect every entry a package registers, framework kinds first.
pub fn entries<P: ServicePackage>(package: &P) -> Vec<RegistrationEntry> {
    let service = package.service_package_name();
    let tag_id = |tags: Option<ResourceTags>| tags.map(|t| t.identifier_attribute);

    let framework_data_sources = package
        .framework_data_sources()
        .into_iter()
        .map(|d| RegistrationEntry {
            service,
            kind: EntryKind::FrameworkDataSource,
            type_name: None,
            name: d.name,
            tag_identifier: tag_id(d.tags),
        });
    let framework_resources = package
        .framework_resources()
        .into_iter()
        .map(|r| RegistrationEntry {
            service,
            kind: EntryKind::FrameworkResource,
            type_name: None,
            name: r.name,
            tag_identifier: tag_id(r.tags),
        });
    let sdk_data_sources = package
        .sdk_data_sources()
        .into_iter()
        .map(|d| RegistrationEntry {
            service,
            kind: EntryKind::SdkDataSource,
            type_name: Some(d.type_name),
            name: d.name,
            tag_identifier: tag_id(d.tags),
        });
    let sdk_resources = package
        .sdk_resources()
        .into_iter()
        .map(|r| RegistrationEntry {
            service,
            kind: EntryKind::SdkResource,
            type_name: Some(r.type_name),
            name: r.name,
            tag_identifier: tag_id(r.tags),
        });

    framework_data_sources
        .chain(framework_resources)
        .chain(sdk_data_sources)
        .chain(sdk_resources)
        .collect()
}
