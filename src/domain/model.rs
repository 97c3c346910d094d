use crate::utils::error::{GradeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The list of CSS selectors loaded from a checks file.
///
/// The checks file must hold a top-level JSON array of non-empty selector
/// strings. Duplicates are allowed; they collapse into a single report entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckSuite {
    pub selectors: Vec<String>,
}

impl CheckSuite {
    pub fn new(selectors: Vec<String>) -> Self {
        Self { selectors }
    }

    pub fn from_json(raw: &[u8]) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_slice(raw).map_err(|e| GradeError::ChecksError {
                message: format!("checks file is not valid JSON: {}", e),
            })?;

        let items = value.as_array().ok_or_else(|| GradeError::ChecksError {
            message: format!(
                "checks file must contain a JSON array of selector strings, found {}",
                json_type_name(&value)
            ),
        })?;

        let mut selectors = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let selector = item.as_str().ok_or_else(|| GradeError::ChecksError {
                message: format!("check #{} is not a string", index),
            })?;
            if selector.is_empty() {
                return Err(GradeError::ChecksError {
                    message: format!("check #{} is an empty selector", index),
                });
            }
            selectors.push(selector.to_string());
        }

        Ok(Self { selectors })
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Everything the transform stage needs: the raw HTML and the checks to run.
#[derive(Debug, Clone)]
pub struct GradeInput {
    pub html: Vec<u8>,
    pub suite: CheckSuite,
}

/// Selector → presence mapping, the sole output artifact.
///
/// Backed by a `BTreeMap` so serialization always emits keys in sorted
/// selector order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresenceReport {
    pub entries: BTreeMap<String, bool>,
}

impl PresenceReport {
    /// Renders the report as a JSON object pretty-printed with 4-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_array_of_strings() {
        let suite = CheckSuite::from_json(br#"["h1", "a[href]"]"#).unwrap();
        assert_eq!(suite.selectors, vec!["h1".to_string(), "a[href]".to_string()]);
    }

    #[test]
    fn test_from_json_empty_array() {
        let suite = CheckSuite::from_json(b"[]").unwrap();
        assert!(suite.selectors.is_empty());
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        let err = CheckSuite::from_json(b"not json").unwrap_err();
        assert!(matches!(err, GradeError::ChecksError { .. }));
    }

    #[test]
    fn test_from_json_rejects_truncated_json() {
        let err = CheckSuite::from_json(br#"["h1", "h2""#).unwrap_err();
        assert!(matches!(err, GradeError::ChecksError { .. }));
    }

    #[test]
    fn test_from_json_rejects_non_array_top_level() {
        let err = CheckSuite::from_json(br#"{"selectors": ["h1"]}"#).unwrap_err();
        match err {
            GradeError::ChecksError { message } => assert!(message.contains("an object")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_non_string_element() {
        let err = CheckSuite::from_json(br#"["h1", 42]"#).unwrap_err();
        match err {
            GradeError::ChecksError { message } => assert!(message.contains("check #1")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_empty_selector() {
        let err = CheckSuite::from_json(br#"[""]"#).unwrap_err();
        assert!(matches!(err, GradeError::ChecksError { .. }));
    }

    #[test]
    fn test_pretty_json_uses_four_space_indent() {
        let mut entries = BTreeMap::new();
        entries.insert("h1".to_string(), true);
        entries.insert("a[href]".to_string(), true);
        let report = PresenceReport { entries };

        let rendered = report.to_pretty_json().unwrap();
        assert_eq!(
            rendered,
            "{\n    \"a[href]\": true,\n    \"h1\": true\n}"
        );
    }

    #[test]
    fn test_pretty_json_empty_report() {
        let report = PresenceReport {
            entries: BTreeMap::new(),
        };
        assert_eq!(report.to_pretty_json().unwrap(), "{}");
    }
}
