use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use super::error::FetchError;

/// Opaque region identifier as reported by the API (e.g. "Kyiv")
pub type RegionId = String;

/// One decoded snapshot: region → status tag
pub type StatusMap = HashMap<RegionId, RegionStatus>;

/// Status tag reported for a single region.
///
/// Only `full` and `partial` count as an active alert. `no_data`, JSON
/// `null` and any tag outside the known vocabulary are inactive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegionStatus {
    /// No alert information (`"no_data"` or `null`)
    NoData,
    /// Alert covers the whole region
    Full,
    /// Alert covers part of the region
    Partial,
    /// Anything else the API sent, kept verbatim for display
    Other(String),
}

impl RegionStatus {
    /// Classify a raw string tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "no_data" => RegionStatus::NoData,
            "full" => RegionStatus::Full,
            "partial" => RegionStatus::Partial,
            other => RegionStatus::Other(other.to_string()),
        }
    }

    /// Classify a JSON value from the response body.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => RegionStatus::NoData,
            Value::String(tag) => Self::from_tag(tag),
            other => RegionStatus::Other(other.to_string()),
        }
    }

    /// Whether this tag means an alert is currently active
    pub fn is_active(&self) -> bool {
        matches!(self, RegionStatus::Full | RegionStatus::Partial)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RegionStatus::NoData => "no_data",
            RegionStatus::Full => "full",
            RegionStatus::Partial => "partial",
            RegionStatus::Other(tag) => tag,
        }
    }
}

impl fmt::Display for RegionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode a response body into a [`StatusMap`].
///
/// The body must be a JSON object; arrays, scalars and malformed JSON are
/// rejected as a whole so that nothing is merged from a bad payload.
pub fn decode_status_map(body: &[u8]) -> Result<StatusMap, FetchError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| FetchError::parse(format!("malformed JSON: {}", e)))?;

    match value {
        Value::Object(entries) => Ok(entries
            .into_iter()
            .map(|(region, tag)| {
                let status = RegionStatus::from_json(&tag);
                (region, status)
            })
            .collect()),
        other => Err(FetchError::parse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
