//! Core network policy document model.
//!
//! [`PolicyDocument`] is built by the caller, encoded once with
//! [`PolicyDocument::to_json`], and never mutated afterwards. Loosely typed
//! fields use [`PolicyValue`]. Segment-action share scopes are resolved by
//! [`share::encode_share`]; [`validate::validate`] checks the invariants the
//! model does not enforce.

mod document;
mod expand;
pub mod share;
pub mod validate;
mod value;

pub use document::{
    AttachmentPolicy, AttachmentPolicyAction, AttachmentPolicyCondition,
    CoreNetworkConfiguration, EdgeLocation, EdgeOverride, PolicyDocument, Segment, SegmentAction,
    Via, WhenSentTo,
};
pub use expand::{sorted_descending, sorted_value_list};
pub use share::SharedWith;
pub use validate::{Issue, Report, Severity, validate};
pub use value::PolicyValue;
