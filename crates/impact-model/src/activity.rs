use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the social-program activity types tracked by the tool.
///
/// The set is a fixed catalog: activities are never created or removed at
/// runtime, and each one owns its own questionnaire definitions and its own
/// per-phase CSV files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    InclusionNumerique,
    Secourisme,
    AccompagnementSocial,
    FormationCitoyenne,
}

impl ActivityType {
    /// All activity types in catalog order.
    pub const ALL: [ActivityType; 4] = [
        ActivityType::InclusionNumerique,
        ActivityType::Secourisme,
        ActivityType::AccompagnementSocial,
        ActivityType::FormationCitoyenne,
    ];

    /// Returns the wire key used in file paths and CSV payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::InclusionNumerique => "inclusion_numerique",
            ActivityType::Secourisme => "secourisme",
            ActivityType::AccompagnementSocial => "accompagnement_social",
            ActivityType::FormationCitoyenne => "formation_citoyenne",
        }
    }

    /// Returns the French display label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::InclusionNumerique => "Inclusion Numérique",
            ActivityType::Secourisme => "Secourisme",
            ActivityType::AccompagnementSocial => "Accompagnement Social",
            ActivityType::FormationCitoyenne => "Formation Citoyenne",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    /// Parse a wire key into an `ActivityType` (trimmed, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "inclusion_numerique" => Ok(ActivityType::InclusionNumerique),
            "secourisme" => Ok(ActivityType::Secourisme),
            "accompagnement_social" => Ok(ActivityType::AccompagnementSocial),
            "formation_citoyenne" => Ok(ActivityType::FormationCitoyenne),
            _ => Err(format!("Unknown activity type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_keys() {
        assert_eq!(
            "inclusion_numerique".parse::<ActivityType>().unwrap(),
            ActivityType::InclusionNumerique
        );
        assert_eq!(
            " SECOURISME ".parse::<ActivityType>().unwrap(),
            ActivityType::Secourisme
        );
        assert!("premiers_secours".parse::<ActivityType>().is_err());
    }

    #[test]
    fn wire_keys_round_trip() {
        for activity in ActivityType::ALL {
            assert_eq!(activity.as_str().parse::<ActivityType>(), Ok(activity));
        }
    }
}
