//! The dual-shape `type` field of an uptime check.
//!
//! List endpoints report the check type as a bare label (`"http"`), while
//! per-id endpoints return a nested object keyed by protocol
//! (`{"http": {"url": "/health", ...}}`). Both shapes are resolved once, at
//! deserialization time, into a [`CheckTypeVariant`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// Resolved form of a check's `type` field.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckTypeVariant {
    /// Bare label as returned by list endpoints.
    RawLabel(String),
    /// Protocol-keyed object as returned by detail endpoints.
    ///
    /// Sub-keys such as `http`, `tcp`, `ping` and `dns` have shapes that vary
    /// by check kind, so they are looked up by key instead of being typed.
    DetailObject(Map<String, Value>),
}

impl CheckTypeVariant {
    /// Resolves a raw JSON value into a variant.
    ///
    /// Strings become [`CheckTypeVariant::RawLabel`], objects become
    /// [`CheckTypeVariant::DetailObject`]. `null` resolves to an empty label.
    pub fn resolve(value: &Value) -> Result<Self, CoreError> {
        Self::from_value(value.clone())
    }

    /// Owned variant of [`CheckTypeVariant::resolve`].
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::String(label) => Ok(Self::RawLabel(label)),
            Value::Object(map) => Ok(Self::DetailObject(map)),
            Value::Null => Ok(Self::default()),
            Value::Bool(_) => Err(CoreError::UnsupportedCheckType("boolean".to_string())),
            Value::Number(_) => Err(CoreError::UnsupportedCheckType("number".to_string())),
            Value::Array(_) => Err(CoreError::UnsupportedCheckType("array".to_string())),
        }
    }

    /// Returns the label if this is the list shape.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::RawLabel(label) => Some(label),
            Self::DetailObject(_) => None,
        }
    }

    /// Returns the protocol map if this is the detail shape.
    pub fn detail(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::RawLabel(_) => None,
            Self::DetailObject(map) => Some(map),
        }
    }

    /// Returns true for the detail shape.
    pub fn is_detail(&self) -> bool {
        matches!(self, Self::DetailObject(_))
    }

    /// Looks up a protocol section (`http`, `tcp`, ...) of the detail shape.
    pub fn section(&self, key: &str) -> Option<&Map<String, Value>> {
        self.detail()?.get(key)?.as_object()
    }

    /// Looks up a single field inside a protocol section.
    pub fn lookup(&self, section: &str, field: &str) -> Option<&Value> {
        self.section(section)?.get(field)
    }

    /// Looks up a string field inside a protocol section.
    ///
    /// Empty strings are treated as absent.
    pub fn lookup_str(&self, section: &str, field: &str) -> Option<&str> {
        self.lookup(section, field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Lowercased text used for kind matching.
    ///
    /// The label itself for the list shape, the comma-joined protocol keys
    /// for the detail shape.
    pub fn kind_hint(&self) -> String {
        match self {
            Self::RawLabel(label) => label.to_lowercase(),
            Self::DetailObject(map) => map
                .keys()
                .map(|k| k.to_lowercase())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl Default for CheckTypeVariant {
    fn default() -> Self {
        Self::RawLabel(String::new())
    }
}

impl Serialize for CheckTypeVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::RawLabel(label) => serializer.serialize_str(label),
            Self::DetailObject(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CheckTypeVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}
