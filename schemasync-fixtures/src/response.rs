use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

pub const VALID_DATA_KEY: &str = "ValidData";
pub const INVALID_DATA_KEY: &str = "InvalidData";

/// The two fixture payloads extracted from a generation response.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    pub valid: Value,
    pub invalid: Value,
    /// Expected members that were absent and defaulted to `{}`.
    pub missing_keys: Vec<&'static str>,
}

/// The generation service returned text that is not a JSON object.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("generation output is not a JSON object: {reason}")]
pub struct MalformedGenerationOutput {
    pub reason: String,
    /// Verbatim service output, kept for display.
    pub raw: String,
}

/// Validate raw generation output and split it into fixture payloads.
///
/// Absent members are not an error; each defaults to an empty object and is
/// listed in [`FixtureSet::missing_keys`].
pub fn validate_response(raw: &str) -> Result<FixtureSet, MalformedGenerationOutput> {
    let parsed: Value = serde_json::from_str(raw).map_err(|e| MalformedGenerationOutput {
        reason: e.to_string(),
        raw: raw.to_string(),
    })?;

    let mut members = match parsed {
        Value::Object(members) => members,
        other => {
            return Err(MalformedGenerationOutput {
                reason: format!("expected an object at top level, found {}", kind_of(&other)),
                raw: raw.to_string(),
            });
        }
    };

    let mut missing_keys = Vec::new();
    let mut take = |key: &'static str| match members.remove(key) {
        Some(value) => value,
        None => {
            warn!(key, "generation output lacks member; using empty object");
            missing_keys.push(key);
            Value::Object(Map::new())
        }
    };

    let valid = take(VALID_DATA_KEY);
    let invalid = take(INVALID_DATA_KEY);

    if !members.is_empty() {
        let extra: Vec<&str> = members.keys().map(String::as_str).collect();
        debug!(?extra, "ignoring unexpected top-level members");
    }

    Ok(FixtureSet {
        valid,
        invalid,
        missing_keys,
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn splits_both_payloads() {
        let set = validate_response(r#"{"ValidData": {"a":1}, "InvalidData": {}}"#)
            .expect("well-formed");
        assert_eq!(set.valid, json!({ "a": 1 }));
        assert_eq!(set.invalid, json!({}));
        assert!(set.missing_keys.is_empty());
    }

    #[test]
    fn non_json_is_malformed_and_keeps_raw_text() {
        let err = validate_response("not json").expect_err("malformed");
        assert_eq!(err.raw, "not json");
        assert!(!err.reason.is_empty());
    }

    #[test]
    fn missing_members_default_to_empty_objects() {
        let set = validate_response(r#"{"ValidData": {"user": {"id": "1"}}}"#).expect("ok");
        assert_eq!(set.valid, json!({ "user": { "id": "1" } }));
        assert_eq!(set.invalid, json!({}));
        assert_eq!(set.missing_keys, vec![INVALID_DATA_KEY]);

        let set = validate_response("{}").expect("ok");
        assert_eq!(set.missing_keys, vec![VALID_DATA_KEY, INVALID_DATA_KEY]);
    }

    #[test]
    fn non_object_top_level_is_malformed() {
        let err = validate_response(r#"[{"ValidData": {}}]"#).expect_err("array");
        assert!(err.reason.contains("an array"));

        let err = validate_response(r#""just a string""#).expect_err("string");
        assert!(err.reason.contains("a string"));
    }

    #[test]
    fn fenced_output_is_not_repaired() {
        let raw = "```json\n{\"ValidData\": {}, \"InvalidData\": {}}\n```";
        let err = validate_response(raw).expect_err("fenced");
        assert_eq!(err.raw, raw);
    }

    #[test]
    fn payloads_may_be_any_json_value() {
        let set = validate_response(r#"{"ValidData": [1, 2], "InvalidData": null}"#).expect("ok");
        assert_eq!(set.valid, json!([1, 2]));
        assert_eq!(set.invalid, Value::Null);
    }
}
