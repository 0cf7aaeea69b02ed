// ── Resource schema descriptors ──
//
// What a resource or data-source factory hands back to the host: the
// attribute set the kind exposes. CRUD handlers live in the host runtime.

use std::collections::BTreeMap;

use serde::Serialize;
use strum::Display;

use crate::names::{ATTR_TAGS, ATTR_TAGS_ALL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttributeKind {
    String,
    Int,
    Bool,
    List,
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttributeMode {
    /// Must be set in configuration.
    Required,
    /// May be set in configuration.
    Optional,
    /// Set by the provider only.
    Computed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub kind: AttributeKind,
    pub mode: AttributeMode,
    /// Changing the value replaces the remote object.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub force_new: bool,
}

impl Attribute {
    pub const fn new(kind: AttributeKind, mode: AttributeMode) -> Self {
        Self {
            kind,
            mode,
            force_new: false,
        }
    }

    pub const fn required(kind: AttributeKind) -> Self {
        Self::new(kind, AttributeMode::Required)
    }

    pub const fn optional(kind: AttributeKind) -> Self {
        Self::new(kind, AttributeMode::Optional)
    }

    pub const fn computed(kind: AttributeKind) -> Self {
        Self::new(kind, AttributeMode::Computed)
    }

    #[must_use]
    pub const fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }
}

/// A resource or data-source descriptor produced by a factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub description: &'static str,
    pub schema: BTreeMap<&'static str, Attribute>,
}

impl Resource {
    pub fn new(description: &'static str) -> Self {
        Self {
            description,
            schema: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn attribute(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.schema.insert(name, attribute);
        self
    }

    /// `tags` (optional) and `tags_all` (computed) for taggable resources.
    #[must_use]
    pub fn with_tags(self) -> Self {
        self.attribute(ATTR_TAGS, Attribute::optional(AttributeKind::Map))
            .attribute(ATTR_TAGS_ALL, Attribute::computed(AttributeKind::Map))
    }

    /// `tags` as a computed attribute, for data sources.
    #[must_use]
    pub fn with_computed_tags(self) -> Self {
        self.attribute(ATTR_TAGS, Attribute::computed(AttributeKind::Map))
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.schema.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.schema.contains_key(name)
    }
}
