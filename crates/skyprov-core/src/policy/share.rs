// ── Segment action share-scope encoding ──
//
// A segment action carries two views of who it shares with: a positive list
// (`share-with`) and an exclusion list (`except`). Only one value goes on
// the wire, under `share-with`:
//
//   1. positive list whose first element is "*"  ->  the scalar "*"
//   2. any other positive list                   ->  the list, verbatim
//   3. an exclusion list, when present, replaces whatever 1-2 produced
//
// Rule 3 is silent: setting both views is not rejected here. The caller-side
// validator reports it as a warning.

use serde::{Serialize, Serializer};

use super::value::PolicyValue;
use crate::error::PolicyError;

/// The share-everyone token.
pub const WILDCARD: &str = "*";

pub const SHARE_WITH_FIELD: &str = "share-with";
pub const EXCEPT_FIELD: &str = "except";

/// The encoded `share-with` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharedWith {
    /// Encoded as the scalar `"*"`.
    All,
    /// Encoded as a list of segment names.
    Segments(Vec<String>),
}

impl Serialize for SharedWith {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str(WILDCARD),
            Self::Segments(segments) => segments.serialize(serializer),
        }
    }
}

/// Compute the `share-with` value from both views. `Ok(None)` when neither
/// is set, in which case the field is omitted.
pub fn encode_share(
    share_with: Option<&PolicyValue>,
    except: Option<&PolicyValue>,
) -> Result<Option<SharedWith>, PolicyError> {
    let mut share = None;

    if let Some(value) = share_with {
        let segments = text_list(value, SHARE_WITH_FIELD)?;
        share = Some(match segments.first() {
            Some(first) if first == WILDCARD => SharedWith::All,
            _ => SharedWith::Segments(segments),
        });
    }

    if let Some(value) = except {
        share = Some(SharedWith::Segments(text_list(value, EXCEPT_FIELD)?));
    }

    Ok(share)
}

fn text_list(value: &PolicyValue, field: &str) -> Result<Vec<String>, PolicyError> {
    value
        .as_text_list()
        .map(|items| items.into_iter().map(str::to_owned).collect())
        .ok_or_else(|| PolicyError::UnexpectedShape {
            field: field.to_owned(),
            expected: "list of strings",
            found: value.kind(),
        })
}

/// Split a decoded `share-with` value back into the two views so the action
/// re-encodes to the same bytes.
///
/// - the scalar `"*"` becomes the positive list `["*"]`;
/// - a list starting with `"*"` can only have come from an exclusion list
///   (a positive one would have collapsed to the scalar), so it becomes the
///   exclusion view;
/// - anything else stays a positive list.
///
/// An explicit `except` on input is kept as given.
pub(crate) fn decode_share(
    share_with: Option<PolicyValue>,
    except: Option<PolicyValue>,
) -> (Option<PolicyValue>, Option<PolicyValue>) {
    match (share_with, except) {
        (Some(PolicyValue::Text(s)), except) if s == WILDCARD => {
            (Some(PolicyValue::text_list([WILDCARD])), except)
        }
        (Some(list), None) if starts_with_wildcard(&list) => (None, Some(list)),
        other => other,
    }
}

fn starts_with_wildcard(value: &PolicyValue) -> bool {
    value
        .as_text_list()
        .is_some_and(|items| items.first() == Some(&WILDCARD))
}
