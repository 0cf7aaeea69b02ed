// ── Loosely typed policy values ──
//
// ASN ranges, CIDR blocks, edge selectors, filters and share lists accept
// several shapes on the wire. They are modelled as one sum type so every
// encode site has to handle each shape explicitly.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolicyValue {
    /// A single string, e.g. `"64512-65534"` or `"*"`.
    Text(String),
    /// A single integer, e.g. an ASN.
    Integer(i64),
    /// A list of values, usually all text.
    List(Vec<PolicyValue>),
    /// A structured filter expression. Keys are kept sorted so encoding is stable.
    Object(BTreeMap<String, PolicyValue>),
}

impl PolicyValue {
    /// A list of text values, in the given order.
    pub fn text_list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::List(items.into_iter().map(|item| Self::Text(item.into())).collect())
    }

    /// Borrow as a list of strings. `None` unless this is a list whose
    /// elements are all text.
    pub fn as_text_list(&self) -> Option<Vec<&str>> {
        match self {
            Self::List(items) => items
                .iter()
                .map(|item| match item {
                    Self::Text(s) => Some(s.as_str()),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }

    /// Human-readable shape name, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Integer(_) => "integer",
            Self::List(items) if items.iter().all(|i| matches!(i, Self::Text(_))) => {
                "list of strings"
            }
            Self::List(_) => "mixed list",
            Self::Object(_) => "object",
        }
    }

    /// Every text value in this tree, depth first. Used for reference checks.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Self::Text(s) => vec![s.as_str()],
            Self::Integer(_) => Vec::new(),
            Self::List(items) => items.iter().flat_map(Self::texts).collect(),
            Self::Object(map) => map.values().flat_map(Self::texts).collect(),
        }
    }
}

impl fmt::Display for PolicyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::List(_) | Self::Object(_) => match serde_json::to_string(self) {
                Ok(json) => write!(f, "{json}"),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

impl From<&str> for PolicyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for PolicyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for PolicyValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<Vec<String>> for PolicyValue {
    fn from(items: Vec<String>) -> Self {
        Self::text_list(items)
    }
}

impl From<Vec<&str>> for PolicyValue {
    fn from(items: Vec<&str>) -> Self {
        Self::text_list(items)
    }
}
