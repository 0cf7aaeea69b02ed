// ── Core network policy document ──
//
// Every record encodes field by field with kebab-case names and
// omit-if-default rules. Segment actions are the one exception: they
// serialize through `SegmentActionWire` so the share-scope rule in
// `share.rs` decides what lands under `share-with`, and decode through
// `SegmentActionRepr` so that value splits back into the same view.

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::share::{self, SharedWith};
use super::value::PolicyValue;
use crate::error::PolicyError;

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero_u32(n: &u32) -> bool {
    *n == 0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero_u64(n: &u64) -> bool {
    *n == 0
}

// ── Document ─────────────────────────────────────────────────────────

/// Root of a core network policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PolicyDocument {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    /// Always emitted; `null` when unset.
    #[serde(default)]
    pub core_network_configuration: Option<CoreNetworkConfiguration>,
    /// Names must be unique; see [`validate`](super::validate).
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segment_actions: Vec<SegmentAction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachment_policies: Vec<AttachmentPolicy>,
}

impl PolicyDocument {
    /// Compact canonical JSON.
    pub fn to_json(&self) -> Result<String, PolicyError> {
        self.check_encodable()?;
        Ok(serde_json::to_string(self)?)
    }

    /// Indented canonical JSON.
    pub fn to_json_pretty(&self) -> Result<String, PolicyError> {
        self.check_encodable()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, PolicyError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Run the share-scope rule for every action up front, so a malformed
    /// action is reported as a typed error naming its position.
    fn check_encodable(&self) -> Result<(), PolicyError> {
        for (index, action) in self.segment_actions.iter().enumerate() {
            action.shared_with().map_err(|err| match err {
                PolicyError::UnexpectedShape {
                    field,
                    expected,
                    found,
                } => PolicyError::UnexpectedShape {
                    field: format!("segment-actions[{index}].{field}"),
                    expected,
                    found,
                },
                other => other,
            })?;
        }
        Ok(())
    }
}

// ── Core network configuration ───────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CoreNetworkConfiguration {
    /// Always emitted; `null` when unset.
    #[serde(default)]
    pub asn_ranges: Option<PolicyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inside_cidr_blocks: Option<PolicyValue>,
    #[serde(default)]
    pub vpn_ecmp_support: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edge_locations: Vec<EdgeLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EdgeLocation {
    pub location: String,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub asn: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inside_cidr_blocks: Option<PolicyValue>,
}

// ── Segments ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Segment {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_locations: Option<PolicyValue>,
    #[serde(default)]
    pub isolate_attachments: bool,
    #[serde(default)]
    pub require_attachment_acceptance: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny_filter: Option<PolicyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_filter: Option<PolicyValue>,
}

// ── Segment actions ──────────────────────────────────────────────────

/// A route or sharing rule applied to a segment.
///
/// `share_with` and `share_with_except` are two views of one concept; when
/// both are set the exclusion list is what gets encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentAction {
    pub action: String,
    pub segment: String,
    pub mode: String,
    pub share_with: Option<PolicyValue>,
    pub share_with_except: Option<PolicyValue>,
    pub destination_cidr_blocks: Option<PolicyValue>,
    pub destinations: Option<PolicyValue>,
    pub description: String,
    pub when_sent_to: Option<WhenSentTo>,
    pub via: Option<Via>,
}

impl SegmentAction {
    /// The value that will be encoded under `share-with`.
    pub fn shared_with(&self) -> Result<Option<SharedWith>, PolicyError> {
        share::encode_share(self.share_with.as_ref(), self.share_with_except.as_ref())
    }
}

/// Wire layout of a segment action, with the share scope already resolved.
#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct SegmentActionWire<'a> {
    action: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    segment: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    mode: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_with: Option<SharedWith>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_cidr_blocks: Option<&'a PolicyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destinations: Option<&'a PolicyValue>,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    when_sent_to: Option<&'a WhenSentTo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    via: Option<&'a Via>,
}

impl Serialize for SegmentAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let share_with = self.shared_with().map_err(S::Error::custom)?;

        SegmentActionWire {
            action: &self.action,
            segment: &self.segment,
            mode: &self.mode,
            share_with,
            destination_cidr_blocks: self.destination_cidr_blocks.as_ref(),
            destinations: self.destinations.as_ref(),
            description: &self.description,
            when_sent_to: self.when_sent_to.as_ref(),
            via: self.via.as_ref(),
        }
        .serialize(serializer)
    }
}

/// Decoded form of a segment action, before the share views are split.
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct SegmentActionRepr {
    action: String,
    #[serde(default)]
    segment: String,
    #[serde(default)]
    mode: String,
    #[serde(default)]
    share_with: Option<PolicyValue>,
    #[serde(default)]
    except: Option<PolicyValue>,
    #[serde(default)]
    destination_cidr_blocks: Option<PolicyValue>,
    #[serde(default)]
    destinations: Option<PolicyValue>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    when_sent_to: Option<WhenSentTo>,
    #[serde(default)]
    via: Option<Via>,
}

impl<'de> Deserialize<'de> for SegmentAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = SegmentActionRepr::deserialize(deserializer)?;
        let (share_with, share_with_except) = share::decode_share(repr.share_with, repr.except);

        Ok(Self {
            action: repr.action,
            segment: repr.segment,
            mode: repr.mode,
            share_with,
            share_with_except,
            destination_cidr_blocks: repr.destination_cidr_blocks,
            destinations: repr.destinations,
            description: repr.description,
            when_sent_to: repr.when_sent_to,
            via: repr.via,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WhenSentTo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<PolicyValue>,
}

/// Routing override: send traffic through network function groups,
/// optionally pinning the edge used for specific edge sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Via {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_function_groups: Option<PolicyValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub with_edge_overrides: Vec<EdgeOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EdgeOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_sets: Option<PolicyValue>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub use_edge: String,
}

// ── Attachment policies ──────────────────────────────────────────────

/// Maps attachments onto segments. Rule numbers order evaluation and must
/// be unique; see [`validate`](super::validate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AttachmentPolicy {
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub rule_number: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// `and` / `or`; not checked here.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub condition_logic: String,
    #[serde(default)]
    pub conditions: Vec<AttachmentPolicyCondition>,
    #[serde(default)]
    pub action: AttachmentPolicyAction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AttachmentPolicyCondition {
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub condition_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operator: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AttachmentPolicyAction {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub association_method: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub segment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag_value_of_key: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub require_acceptance: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub add_to_network_function_group: String,
}
