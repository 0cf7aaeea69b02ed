//! Service registration and policy document model for skyprov.
//!
//! Two independent slices live here:
//!
//! - **Registration** ([`registry`], [`kafkaconnect`]): the static table a
//!   host plugin runtime reads at start-up: which resource and data-source
//!   kinds a service package supports, the factory for each, its wire type
//!   name and its tag identifier attribute, plus a client factory that
//!   builds the service's API client from the host's configuration mapping.
//!
//! - **Policy documents** ([`policy`]): the core network policy document as
//!   typed records. Encoding is field-by-field with omit-if-default rules,
//!   except for segment actions, whose share scope goes through
//!   [`policy::share`].

pub mod error;
pub mod kafkaconnect;
pub mod names;
pub mod policy;
pub mod registry;
pub mod schema;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::PolicyError;
pub use policy::{
    AttachmentPolicy, AttachmentPolicyAction, AttachmentPolicyCondition,
    CoreNetworkConfiguration, EdgeLocation, EdgeOverride, PolicyDocument, PolicyValue, Segment,
    SegmentAction, Via, WhenSentTo, sorted_descending,
};
pub use registry::{
    FrameworkDataSource, FrameworkResource, ResourceTags, SdkDataSource, SdkResource,
    ServicePackage,
};
pub use schema::{Attribute, AttributeKind, AttributeMode, Resource};
