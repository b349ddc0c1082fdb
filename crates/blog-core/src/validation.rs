//! Create-payload validation.
//!
//! Checks run in a fixed order (`title`, `body`, `tags`, then unknown keys)
//! and stop at the first failure. The report format is the one clients of
//! this API already parse: a `ValidationError` with a single detail entry.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::NewPost;

/// Fields accepted by the create operation, in checking order.
const NEW_POST_KEYS: [&str; 3] = ["title", "body", "tags"];

/// One segment of the path to the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Which rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rule {
    #[serde(rename = "object.base")]
    ObjectBase,
    #[serde(rename = "any.required")]
    Required,
    #[serde(rename = "string.base")]
    StringBase,
    #[serde(rename = "array.base")]
    ArrayBase,
    #[serde(rename = "any.empty")]
    Empty,
    #[serde(rename = "object.allowUnknown")]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailContext {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetail {
    pub message: String,
    pub path: Vec<PathSegment>,
    #[serde(rename = "type")]
    pub rule: Rule,
    pub context: DetailContext,
}

/// Structured description of why a payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub name: &'static str,
    pub details: Vec<ValidationDetail>,
}

impl ValidationReport {
    fn single(path: Vec<PathSegment>, label: String, rule: Rule) -> Self {
        let message = match rule {
            Rule::ObjectBase => format!("\"{label}\" must be an object"),
            Rule::Required => format!("\"{label}\" is required"),
            Rule::StringBase => format!("\"{label}\" must be a string"),
            Rule::ArrayBase => format!("\"{label}\" must be an array"),
            Rule::Empty => format!("\"{label}\" is not allowed to be empty"),
            Rule::Unknown => format!("\"{label}\" is not allowed"),
        };

        Self {
            name: "ValidationError",
            details: vec![ValidationDetail {
                message,
                path,
                rule,
                context: DetailContext {
                    key: label.clone(),
                    label,
                },
            }],
        }
    }

    fn at_key(key: &str, rule: Rule) -> Self {
        Self::single(vec![PathSegment::Key(key.to_string())], key.to_string(), rule)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.details.iter().map(|d| d.message.as_str()).collect();
        write!(f, "{}", messages.join(", "))
    }
}

/// Validate a create payload and extract the post fields.
pub fn validate_new_post(payload: &Value) -> Result<NewPost, ValidationReport> {
    let Some(object) = payload.as_object() else {
        return Err(ValidationReport::single(
            Vec::new(),
            "value".to_string(),
            Rule::ObjectBase,
        ));
    };

    let title = required_string(object, "title")?;
    let body = required_string(object, "body")?;
    let tags = required_string_list(object, "tags")?;

    if let Some(unknown) = object.keys().find(|k| !NEW_POST_KEYS.contains(&k.as_str())) {
        return Err(ValidationReport::at_key(unknown, Rule::Unknown));
    }

    Ok(NewPost { title, body, tags })
}

fn required_string(object: &Map<String, Value>, key: &str) -> Result<String, ValidationReport> {
    match object.get(key) {
        None => Err(ValidationReport::at_key(key, Rule::Required)),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationReport::at_key(key, Rule::Empty)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationReport::at_key(key, Rule::StringBase)),
    }
}

fn required_string_list(
    object: &Map<String, Value>,
    key: &str,
) -> Result<Vec<String>, ValidationReport> {
    let items = match object.get(key) {
        None => return Err(ValidationReport::at_key(key, Rule::Required)),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationReport::at_key(key, Rule::ArrayBase)),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let rule = match item {
                Value::String(s) if !s.is_empty() => return Ok(s.clone()),
                Value::String(_) => Rule::Empty,
                _ => Rule::StringBase,
            };
            Err(ValidationReport::single(
                vec![PathSegment::Key(key.to_string()), PathSegment::Index(index)],
                index.to_string(),
                rule,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rejected(payload: Value) -> ValidationDetail {
        let report = validate_new_post(&payload).unwrap_err();
        assert_eq!(report.details.len(), 1);
        report.details[0].clone()
    }

    #[test]
    fn test_accepts_complete_payload() {
        let post = validate_new_post(&json!({
            "title": "A",
            "body": "B",
            "tags": ["t", "u"],
        }))
        .unwrap();

        assert_eq!(post.title, "A");
        assert_eq!(post.body, "B");
        assert_eq!(post.tags, vec!["t".to_string(), "u".to_string()]);
    }

    #[test]
    fn test_accepts_empty_tag_list() {
        let post = validate_new_post(&json!({"title": "A", "body": "B", "tags": []})).unwrap();
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_reports_first_missing_field() {
        let detail = rejected(json!({"tags": []}));
        assert_eq!(detail.message, "\"title\" is required");
        assert_eq!(detail.rule, Rule::Required);
        assert_eq!(detail.path, vec![PathSegment::Key("title".to_string())]);

        let detail = rejected(json!({"title": "A", "tags": []}));
        assert_eq!(detail.message, "\"body\" is required");

        let detail = rejected(json!({"title": "A", "body": "B"}));
        assert_eq!(detail.message, "\"tags\" is required");
    }

    #[test]
    fn test_rejects_wrong_shapes() {
        assert_eq!(
            rejected(json!({"title": 1, "body": "B", "tags": []})).rule,
            Rule::StringBase
        );
        assert_eq!(
            rejected(json!({"title": null, "body": "B", "tags": []})).rule,
            Rule::StringBase
        );
        assert_eq!(
            rejected(json!({"title": "A", "body": "B", "tags": "t"})).message,
            "\"tags\" must be an array"
        );
        assert_eq!(rejected(json!(["A"])).rule, Rule::ObjectBase);
    }

    #[test]
    fn test_rejects_empty_strings() {
        let detail = rejected(json!({"title": "", "body": "B", "tags": []}));
        assert_eq!(detail.message, "\"title\" is not allowed to be empty");
        assert_eq!(detail.rule, Rule::Empty);
    }

    #[test]
    fn test_reports_bad_tag_item_with_index() {
        let detail = rejected(json!({"title": "A", "body": "B", "tags": ["ok", 3]}));
        assert_eq!(detail.message, "\"1\" must be a string");
        assert_eq!(
            detail.path,
            vec![PathSegment::Key("tags".to_string()), PathSegment::Index(1)]
        );

        let detail = rejected(json!({"title": "A", "body": "B", "tags": [""]}));
        assert_eq!(detail.rule, Rule::Empty);
    }

    #[test]
    fn test_rejects_unknown_keys_after_known_ones() {
        let detail = rejected(json!({"title": "A", "body": "B", "tags": [], "author": "x"}));
        assert_eq!(detail.message, "\"author\" is not allowed");
        assert_eq!(detail.rule, Rule::Unknown);

        // A missing known key is reported before an unknown one.
        let detail = rejected(json!({"author": "x", "body": "B", "tags": []}));
        assert_eq!(detail.rule, Rule::Required);
    }

    #[test]
    fn test_report_serializes_with_type_field() {
        let report = validate_new_post(&json!({"body": "B", "tags": []})).unwrap_err();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["name"], "ValidationError");
        assert_eq!(value["details"][0]["type"], "any.required");
        assert_eq!(value["details"][0]["path"], json!(["title"]));
        assert_eq!(value["details"][0]["context"]["key"], "title");
    }
}
