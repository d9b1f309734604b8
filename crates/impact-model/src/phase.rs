use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A temporal checkpoint at which participants are surveyed.
///
/// The order of variants is semantically meaningful: it is the temporal
/// sequence of the survey campaign, and `Avant`/`Apres` are the pair used
/// for before/after comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "avant")]
    Avant,
    #[serde(rename = "apres")]
    Apres,
    #[serde(rename = "suivi_3mois")]
    Suivi3Mois,
    #[serde(rename = "suivi_6mois")]
    Suivi6Mois,
}

impl Phase {
    /// All phases in temporal order.
    pub const ALL: [Phase; 4] = [
        Phase::Avant,
        Phase::Apres,
        Phase::Suivi3Mois,
        Phase::Suivi6Mois,
    ];

    /// Returns the wire key used in file names and CSV payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Avant => "avant",
            Phase::Apres => "apres",
            Phase::Suivi3Mois => "suivi_3mois",
            Phase::Suivi6Mois => "suivi_6mois",
        }
    }

    /// Returns the French display label.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Avant => "Avant (Diagnostic)",
            Phase::Apres => "Après (Évaluation immédiate)",
            Phase::Suivi3Mois => "Suivi à 3 mois",
            Phase::Suivi6Mois => "Suivi à 6 mois",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Phase {
    type Err = String;

    /// Parse a wire key into a `Phase` (trimmed, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "avant" => Ok(Phase::Avant),
            "apres" => Ok(Phase::Apres),
            "suivi_3mois" => Ok(Phase::Suivi3Mois),
            "suivi_6mois" => Ok(Phase::Suivi6Mois),
            _ => Err(format!("Unknown phase: {s}")),
        }
    }
}
