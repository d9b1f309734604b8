//! Submitted answer sets, as captured by the presentation layer.

use std::collections::BTreeMap;

/// The value(s) submitted for one form field.
///
/// Multi-select questions produce `Many`; everything else produces `One`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmittedValue {
    One(String),
    Many(Vec<String>),
}

/// A completed questionnaire as a field-name -> value mapping.
///
/// Input is assumed already validated by the presentation layer; lookups on
/// absent fields simply yield nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedAnswers {
    values: BTreeMap<String, SubmittedValue>,
}

impl SubmittedAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(name.into(), SubmittedValue::One(value.into()));
    }

    pub fn set_many(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.values.insert(name.into(), SubmittedValue::Many(values));
    }

    /// The single submitted value for a field (the first one, for a
    /// multi-valued answer).
    pub fn single(&self, name: &str) -> Option<&str> {
        match self.values.get(name)? {
            SubmittedValue::One(value) => Some(value.as_str()),
            SubmittedValue::Many(values) => values.first().map(String::as_str),
        }
    }

    /// All submitted values for a field.
    pub fn all(&self, name: &str) -> Vec<&str> {
        match self.values.get(name) {
            Some(SubmittedValue::One(value)) => vec![value.as_str()],
            Some(SubmittedValue::Many(values)) => values.iter().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    /// Whether the field carries a non-blank answer.
    pub fn has_answer(&self, name: &str) -> bool {
        match self.values.get(name) {
            Some(SubmittedValue::One(value)) => !value.trim().is_empty(),
            Some(SubmittedValue::Many(values)) => {
                values.iter().any(|value| !value.trim().is_empty())
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_takes_first_of_many() {
        let mut answers = SubmittedAnswers::new();
        answers.set_many("as_q1", vec!["Autre".to_string(), "Accès aux soins".to_string()]);
        assert_eq!(answers.single("as_q1"), Some("Autre"));
        assert_eq!(answers.all("as_q1"), vec!["Autre", "Accès aux soins"]);
    }

    #[test]
    fn blank_answers_do_not_count() {
        let mut answers = SubmittedAnswers::new();
        answers.set("age", "  ");
        answers.set_many("as_q1", Vec::new());
        assert!(!answers.has_answer("age"));
        assert!(!answers.has_answer("as_q1"));
        assert!(!answers.has_answer("genre"));

        answers.set("age", "42");
        assert!(answers.has_answer("age"));
    }
}
