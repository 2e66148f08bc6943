//! Transaction (scripted multi-step) check types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::de::null_as_default;

// ============================================================================
// Argument Values
// ============================================================================

/// A dynamic step argument or authentication value.
///
/// Step arguments and authentication blocks carry heterogeneous values
/// (selectors, URLs, flags, nested credentials), so they are modelled as a
/// small tagged union instead of an untyped blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// JSON `null`.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Whole number.
    Integer(i64),
    /// Non-integral number.
    Float(f64),
    /// Text value.
    Text(String),
    /// Ordered list of values.
    List(Vec<ArgValue>),
    /// Nested structure, in the order the API sent it.
    Map(IndexMap<String, ArgValue>),
}

impl ArgValue {
    /// Returns the text value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Argument name to value, in the order the API sent them.
pub type ArgMap = IndexMap<String, ArgValue>;

// ============================================================================
// Transaction Check
// ============================================================================

/// A scripted transaction monitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionCheck {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub modified_at: i64,
    pub last_downtime_start: Option<i64>,
    pub last_downtime_end: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_message: String,
    /// Check interval in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub interval: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub send_notification_when_down: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub severity_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub steps: Vec<Step>,
    #[serde(deserialize_with = "null_as_default")]
    pub team_ids: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_ids: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub integration_ids: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub check_type: Vec<String>,
    pub metadata: Option<TransactionMetadata>,
}

/// One step of a transaction script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    /// Function name, e.g. `go_to` or `click`.
    #[serde(rename = "fn", deserialize_with = "null_as_default")]
    pub function: String,
    #[serde(deserialize_with = "null_as_default")]
    pub args: ArgMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_navigate: Option<bool>,
}

/// Viewport and authentication metadata of a transaction check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub width: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub height: i64,
    #[serde(rename = "disableWebSecurity", deserialize_with = "null_as_default")]
    pub disable_web_security: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentications: Option<ArgMap>,
}

// ============================================================================
// List Response
// ============================================================================

/// Response of the transaction check list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionChecksResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub checks: Vec<TransactionCheck>,
    #[serde(deserialize_with = "null_as_default")]
    pub limit: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_step_args_keep_scalar_kinds() {
        let step: Step = serde_json::from_value(json!({
            "fn": "fill",
            "args": {
                "input": "#user",
                "value": "alice",
                "timeout": 30,
                "ratio": 0.5,
                "optional": false,
                "missing": null,
                "keys": ["a", "b"],
                "nested": { "x": 1 }
            },
            "guid": "abc"
        }))
        .unwrap();

        assert_eq!(step.function, "fill");
        assert_eq!(step.args["input"], ArgValue::Text("#user".into()));
        assert_eq!(step.args["timeout"], ArgValue::Integer(30));
        assert_eq!(step.args["ratio"], ArgValue::Float(0.5));
        assert_eq!(step.args["optional"], ArgValue::Bool(false));
        assert_eq!(step.args["missing"], ArgValue::Null);
        assert!(matches!(step.args["keys"], ArgValue::List(ref v) if v.len() == 2));
        assert!(matches!(step.args["nested"], ArgValue::Map(_)));
        assert_eq!(step.guid.as_deref(), Some("abc"));
        assert_eq!(step.contains_navigate, None);
    }

    #[test]
    fn test_steps_preserve_order() {
        let check: TransactionCheck = serde_json::from_value(json!({
            "id": 7,
            "steps": [
                { "fn": "go_to", "args": { "url": "https://example.com" } },
                { "fn": "click", "args": { "element": "#login" } },
                { "fn": "exists", "args": { "element": ".welcome" } }
            ]
        }))
        .unwrap();

        let names: Vec<_> = check.steps.iter().map(|s| s.function.as_str()).collect();
        assert_eq!(names, ["go_to", "click", "exists"]);
    }

    #[test]
    fn test_metadata_field_names() {
        let check: TransactionCheck = serde_json::from_value(json!({
            "metadata": {
                "width": 1920,
                "height": 1080,
                "disableWebSecurity": true,
                "authentications": { "basic": { "user": "u" } }
            }
        }))
        .unwrap();

        let metadata = check.metadata.unwrap();
        assert_eq!(metadata.width, 1920);
        assert!(metadata.disable_web_security);
        assert!(metadata.authentications.unwrap().contains_key("basic"));
    }

    #[test]
    fn test_step_args_keep_api_order() {
        let raw = r##"{ "fn": "fill", "args": { "value": "alice", "input": "#user", "delay": 5 } }"##;
        let step: Step = serde_json::from_str(raw).unwrap();

        let keys: Vec<&str> = step.args.keys().map(String::as_str).collect();
        assert_eq!(keys, ["value", "input", "delay"]);

        let written = serde_json::to_string(&step.args).unwrap();
        assert_eq!(written, r##"{"value":"alice","input":"#user","delay":5}"##);
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let check: TransactionCheck = serde_json::from_value(json!({
            "id": 3,
            "custom_message": null,
            "tags": null,
            "type": null,
            "steps": [{ "fn": "go_to", "args": null }],
            "metadata": { "width": null, "disableWebSecurity": null }
        }))
        .unwrap();

        assert_eq!(check.custom_message, "");
        assert!(check.tags.is_empty());
        assert!(check.check_type.is_empty());
        assert!(check.steps[0].args.is_empty());
        assert_eq!(check.metadata.unwrap().width, 0);
    }
}
