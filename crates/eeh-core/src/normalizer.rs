//! Form 34 payload normalization.
//!
//! The form front end posts whatever its plugin produces, so every
//! recognized field is coerced independently:
//! - missing, `null` or wrongly shaped values fall back to a default
//! - integers may arrive as numbers or numeric strings
//! - unknown fields are dropped
//!
//! Normalization itself never fails. Only a body whose top level is not a
//! JSON object is rejected, by [`parse_submission`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::EehError;
use crate::SCHEMA_VERSION;

/// Fully specified Form 34 submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form34Submission {
    pub age: i64,
    pub country: String,
    pub marital_status: String,
    pub education: String,
    pub test_type: String,

    pub clb_listening: i64,
    pub clb_reading: i64,
    pub clb_writing: i64,
    pub clb_speaking: i64,

    pub foreign_exp: i64,
    pub canadian_exp: i64,
    pub teer: i64,

    pub schema_version: String,
    pub submitted_at: Option<String>,
}

impl Default for Form34Submission {
    fn default() -> Self {
        Self {
            age: 0,
            country: String::new(),
            marital_status: String::new(),
            education: String::new(),
            test_type: String::new(),
            clb_listening: 0,
            clb_reading: 0,
            clb_writing: 0,
            clb_speaking: 0,
            foreign_exp: 0,
            canadian_exp: 0,
            teer: 0,
            schema_version: SCHEMA_VERSION.to_string(),
            submitted_at: None,
        }
    }
}

/// Parse a raw request body into a submission.
///
/// An empty (or whitespace-only) body counts as `{}`.
pub fn parse_submission(body: &[u8]) -> Result<Form34Submission, EehError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Form34Submission::default());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| EehError::MalformedInput(format!("body is not valid JSON: {}", e)))?;

    match value {
        Value::Object(fields) => Ok(normalize(&fields)),
        other => Err(EehError::MalformedInput(format!(
            "expected a JSON object, got {}",
            kind_of(&other)
        ))),
    }
}

/// Fill every recognized field, defaulting what is absent or unusable
pub fn normalize(fields: &Map<String, Value>) -> Form34Submission {
    let defaults = Form34Submission::default();
    let int = |key: &str| fields.get(key).and_then(coerce_int).unwrap_or(0);
    let text = |key: &str| fields.get(key).and_then(coerce_text).unwrap_or_default();

    Form34Submission {
        age: int("age"),
        country: text("country"),
        marital_status: text("marital_status"),
        education: text("education"),
        test_type: text("test_type"),
        clb_listening: int("clb_listening"),
        clb_reading: int("clb_reading"),
        clb_writing: int("clb_writing"),
        clb_speaking: int("clb_speaking"),
        foreign_exp: int("foreign_exp"),
        canadian_exp: int("canadian_exp"),
        teer: int("teer"),
        schema_version: fields
            .get("schema_version")
            .and_then(coerce_text)
            .unwrap_or(defaults.schema_version),
        submitted_at: fields.get("submitted_at").and_then(|v| v.as_str()).map(str::to_string),
    }
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
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
