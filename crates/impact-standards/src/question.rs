use std::fmt;
use std::str::FromStr;

/// Input kind of a questionnaire question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Five-point agreement/competence scale (1-5).
    Scale1To5,
    /// Oui/Non answer, stored as "true"/"false".
    Boolean,
    /// Single choice from a fixed option list.
    Select,
    /// Any number of choices from a fixed option list, stored `;`-joined.
    MultiSelect,
    /// Free numeric entry (non-negative).
    Numeric,
    /// Free text.
    FreeText,
}

impl InputKind {
    /// Returns the wire name as stored in questionnaire templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Scale1To5 => "scale_1_5",
            InputKind::Boolean => "boolean",
            InputKind::Select => "select",
            InputKind::MultiSelect => "multiselect",
            InputKind::Numeric => "number",
            InputKind::FreeText => "text",
        }
    }

    /// Returns true for kinds whose answers come from a fixed option list.
    pub fn has_options(&self) -> bool {
        matches!(self, InputKind::Select | InputKind::MultiSelect)
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scale_1_5" => Ok(InputKind::Scale1To5),
            "boolean" => Ok(InputKind::Boolean),
            "select" => Ok(InputKind::Select),
            "multiselect" => Ok(InputKind::MultiSelect),
            "number" => Ok(InputKind::Numeric),
            "text" => Ok(InputKind::FreeText),
            _ => Err(format!("Unknown input kind: {s}")),
        }
    }
}

/// One activity-specific question, registered for exactly one
/// (activity, phase) pair.
///
/// Definitions are static catalog entries; they are never mutated at
/// runtime. The `id` doubles as the CSV field name for the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionDefinition {
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: InputKind,
    pub options: &'static [&'static str],
    /// Name of the indicator this question feeds, when it maps to one.
    pub indicator: Option<&'static str>,
    pub required: bool,
}
