//! Caller-side checks for a policy document.
//!
//! The model encodes whatever it is given. These checks cover the
//! invariants the model leaves to its callers: unique segment names, unique
//! rule numbers, references to declared segments, and the share-scope
//! conflict the encoder resolves silently.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use strum::Display;
use tracing::warn;

use super::document::PolicyDocument;

/// Inclusive range of attachment-policy rule numbers the service accepts.
pub const RULE_NUMBER_RANGE: std::ops::RangeInclusive<u32> = 1..=65535;

const CONDITION_LOGIC: [&str; 2] = ["and", "or"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    /// JSON-pointer-ish location, e.g. `segments[2].name`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.path, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub issues: Vec<Issue>,
}

impl Report {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    fn error(&mut self, path: String, message: String) {
        self.issues.push(Issue {
            severity: Severity::Error,
            path,
            message,
        });
    }

    fn warning(&mut self, path: String, message: String) {
        warn!(%path, "{message}");
        self.issues.push(Issue {
            severity: Severity::Warning,
            path,
            message,
        });
    }
}

/// Check a document. Never fails; every finding goes into the report.
pub fn validate(doc: &PolicyDocument) -> Report {
    let mut report = Report::default();
    let declared = check_segments(doc, &mut report);
    check_segment_actions(doc, &declared, &mut report);
    check_attachment_policies(doc, &declared, &mut report);
    report
}

fn check_segments<'a>(doc: &'a PolicyDocument, report: &mut Report) -> HashSet<&'a str> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, segment) in doc.segments.iter().enumerate() {
        let path = format!("segments[{index}].name");
        if segment.name.is_empty() {
            report.error(path, "segment name is empty".into());
            continue;
        }
        match seen.entry(segment.name.as_str()) {
            Entry::Occupied(first) => report.error(
                path,
                format!(
                    "duplicate segment name '{}' (first declared at segments[{}])",
                    segment.name,
                    first.get()
                ),
            ),
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }
    seen.into_keys().collect()
}

fn check_segment_actions(doc: &PolicyDocument, declared: &HashSet<&str>, report: &mut Report) {
    for (index, action) in doc.segment_actions.iter().enumerate() {
        let base = format!("segment-actions[{index}]");

        if !action.segment.is_empty() && !declared.contains(action.segment.as_str()) {
            report.error(
                format!("{base}.segment"),
                format!("segment '{}' is not declared", action.segment),
            );
        }

        if action.share_with.is_some() && action.share_with_except.is_some() {
            report.warning(
                format!("{base}.share-with"),
                "both share-with and except are set; except takes precedence".into(),
            );
        }

        if let Err(err) = action.shared_with() {
            report.error(base.clone(), err.to_string());
        }

        let when_sent_to = action
            .when_sent_to
            .as_ref()
            .and_then(|w| w.segments.as_ref());
        if let Some(segments) = when_sent_to {
            for name in segments.texts() {
                if name != super::share::WILDCARD && !declared.contains(name) {
                    report.error(
                        format!("{base}.when-sent-to.segments"),
                        format!("segment '{name}' is not declared"),
                    );
                }
            }
        }
    }
}

fn check_attachment_policies(doc: &PolicyDocument, declared: &HashSet<&str>, report: &mut Report) {
    let mut seen: HashMap<u32, usize> = HashMap::new();
    for (index, policy) in doc.attachment_policies.iter().enumerate() {
        let base = format!("attachment-policies[{index}]");

        if !RULE_NUMBER_RANGE.contains(&policy.rule_number) {
            report.error(
                format!("{base}.rule-number"),
                format!(
                    "rule number {} is outside {}..={}",
                    policy.rule_number,
                    RULE_NUMBER_RANGE.start(),
                    RULE_NUMBER_RANGE.end()
                ),
            );
        } else {
            match seen.entry(policy.rule_number) {
                Entry::Occupied(first) => report.error(
                    format!("{base}.rule-number"),
                    format!(
                        "duplicate rule number {} (first used at attachment-policies[{}])",
                        policy.rule_number,
                        first.get()
                    ),
                ),
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
        }

        if !policy.condition_logic.is_empty()
            && !CONDITION_LOGIC.contains(&policy.condition_logic.as_str())
        {
            report.error(
                format!("{base}.condition-logic"),
                format!(
                    "expected 'and' or 'or', got '{}'",
                    policy.condition_logic
                ),
            );
        }

        let target = &policy.action.segment;
        if !target.is_empty() && !declared.contains(target.as_str()) {
            report.error(
                format!("{base}.action.segment"),
                format!("segment '{target}' is not declared"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{
        AttachmentPolicy, AttachmentPolicyAction, PolicyValue, Segment, SegmentAction, WhenSentTo,
    };

    fn segment(name: &str) -> Segment {
        Segment {
            name: name.into(),
            ..Segment::default()
        }
    }

    fn rule(number: u32, target: &str) -> AttachmentPolicy {
        AttachmentPolicy {
            rule_number: number,
            action: AttachmentPolicyAction {
                association_method: "constant".into(),
                segment: target.into(),
                ..AttachmentPolicyAction::default()
            },
            ..AttachmentPolicy::default()
        }
    }

    #[test]
    fn clean_document_has_no_issues() {
        let doc = PolicyDocument {
            segments: vec![segment("prod"), segment("dev")],
            attachment_policies: vec![rule(100, "prod"), rule(200, "dev")],
            ..PolicyDocument::default()
        };
        assert_eq!(validate(&doc), Report::default());
    }

    #[test]
    fn duplicate_segment_names() {
        let doc = PolicyDocument {
            segments: vec![segment("prod"), segment("prod")],
            ..PolicyDocument::default()
        };
        let report = validate(&doc);
        assert!(report.has_errors());
        assert_eq!(report.issues[0].path, "segments[1].name");
        assert!(report.issues[0].message.contains("segments[0]"));
    }

    #[test]
    fn duplicate_and_out_of_range_rule_numbers() {
        let doc = PolicyDocument {
            segments: vec![segment("prod")],
            attachment_policies: vec![rule(100, "prod"), rule(100, "prod"), rule(0, "prod")],
            ..PolicyDocument::default()
        };
        let paths: Vec<_> = validate(&doc).errors().map(|i| i.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                "attachment-policies[1].rule-number",
                "attachment-policies[2].rule-number"
            ]
        );
    }

    #[test]
    fn unknown_condition_logic() {
        let mut policy = rule(1, "prod");
        policy.condition_logic = "xor".into();
        let doc = PolicyDocument {
            segments: vec![segment("prod")],
            attachment_policies: vec![policy],
            ..PolicyDocument::default()
        };
        let report = validate(&doc);
        assert_eq!(report.errors().count(), 1);
        assert!(report.issues[0].message.contains("xor"));
    }

    #[test]
    fn share_conflict_is_a_warning() {
        let doc = PolicyDocument {
            segments: vec![segment("shared")],
            segment_actions: vec![SegmentAction {
                action: "share".into(),
                segment: "shared".into(),
                share_with: Some(PolicyValue::text_list(["*"])),
                share_with_except: Some(PolicyValue::text_list(["shared"])),
                ..SegmentAction::default()
            }],
            ..PolicyDocument::default()
        };
        let report = validate(&doc);
        assert!(!report.has_errors());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn undeclared_references() {
        let doc = PolicyDocument {
            segments: vec![segment("prod")],
            segment_actions: vec![SegmentAction {
                action: "send-to".into(),
                segment: "staging".into(),
                when_sent_to: Some(WhenSentTo {
                    segments: Some(PolicyValue::text_list(["prod", "qa"])),
                }),
                ..SegmentAction::default()
            }],
            attachment_policies: vec![rule(10, "legacy")],
            ..PolicyDocument::default()
        };
        let messages: Vec<_> = validate(&doc)
            .errors()
            .map(|i| i.message.clone())
            .collect();
        assert_eq!(
            messages,
            vec![
                "segment 'staging' is not declared",
                "segment 'qa' is not declared",
                "segment 'legacy' is not declared"
            ]
        );
    }

    #[test]
    fn malformed_share_is_an_error() {
        let doc = PolicyDocument {
            segment_actions: vec![SegmentAction {
                action: "share".into(),
                share_with: Some(PolicyValue::from("prod")),
                ..SegmentAction::default()
            }],
            ..PolicyDocument::default()
        };
        assert!(validate(&doc).has_errors());
    }

    #[test]
    fn issue_display() {
        let issue = Issue {
            severity: Severity::Warning,
            path: "segment-actions[0].share-with".into(),
            message: "conflict".into(),
        };
        assert_eq!(
            issue.to_string(),
            "warning: segment-actions[0].share-with: conflict"
        );
    }
}
