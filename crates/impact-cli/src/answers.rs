//! Conversion of an answers JSON file into a submitted answer set.
//!
//! The file is a flat object mapping field names to values. Scalars map to
//! single answers; arrays (for multi-select questions) map to multi-valued
//! answers; `null` entries are treated as unanswered.

use anyhow::{Context, Result, bail};
use serde_json::Value;

use impact_transform::SubmittedAnswers;

pub fn answers_from_json(raw: &str) -> Result<SubmittedAnswers> {
    let value: Value = serde_json::from_str(raw).context("parse answers JSON")?;
    let Value::Object(entries) = value else {
        bail!("answers file must contain a JSON object of field -> value");
    };

    let mut answers = SubmittedAnswers::new();
    for (field, entry) in entries {
        match entry {
            Value::Null => {}
            Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(scalar_to_string(&field, &item)?);
                }
                answers.set_many(field, values);
            }
            other => {
                let value = scalar_to_string(&field, &other)?;
                answers.set(field, value);
            }
        }
    }
    Ok(answers)
}

fn scalar_to_string(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            bail!("field {field} has an unsupported value shape: {value}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_arrays_and_nulls() {
        let answers = answers_from_json(
            r#"{
                "participant_id": "P001",
                "age": 42,
                "sec_q1": true,
                "as_q1": ["Aide administrative", "Autre"],
                "session_id": null
            }"#,
        )
        .expect("parse answers");
        assert_eq!(answers.single("participant_id"), Some("P001"));
        assert_eq!(answers.single("age"), Some("42"));
        assert_eq!(answers.single("sec_q1"), Some("true"));
        assert_eq!(answers.all("as_q1"), vec!["Aide administrative", "Autre"]);
        assert!(!answers.has_answer("session_id"));
    }

    #[test]
    fn rejects_non_object_payloads() {
        assert!(answers_from_json("[1, 2]").is_err());
        assert!(answers_from_json("\"texte\"").is_err());
    }

    #[test]
    fn rejects_nested_shapes() {
        assert!(answers_from_json(r#"{"as_q1": [["nested"]]}"#).is_err());
        assert!(answers_from_json(r#"{"meta": {"a": 1}}"#).is_err());
    }
}
