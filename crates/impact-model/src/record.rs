//! Submitted questionnaire records.
//!
//! A record is schema-on-read: different submissions of the same
//! (activity, phase) may carry different optional field sets, so every
//! lookup treats an absent field the same as an empty one. Field order is
//! preserved because it becomes the CSV column order on first write.

use std::collections::BTreeMap;

use crate::phase::Phase;

/// Field names shared by every questionnaire, in submission order.
pub mod fields {
    pub const TIMESTAMP: &str = "timestamp";
    pub const PARTICIPANT_ID: &str = "participant_id";
    pub const SESSION_ID: &str = "session_id";
    pub const AGE: &str = "age";
    pub const GENRE: &str = "genre";
    pub const ORIGINE: &str = "origine";
    pub const STATUT_PROFESSIONNEL: &str = "statut_professionnel";
    pub const NIVEAU_ETUDES: &str = "niveau_etudes";
    pub const CODE_POSTAL: &str = "code_postal";
    pub const AUTONOMIE_PERCUE: &str = "autonomie_percue";
    pub const CONFIANCE_EN_SOI: &str = "confiance_en_soi";
    pub const SATISFACTION_GLOBALE: &str = "satisfaction_globale";
    pub const RECOMMANDATION_NPS: &str = "recommandation_nps";
    pub const REMARQUES_OUVERTES: &str = "remarques_ouvertes";

    /// The fixed fields written for every submission, in column order.
    pub const FIXED: [&str; 14] = [
        TIMESTAMP,
        PARTICIPANT_ID,
        SESSION_ID,
        AGE,
        GENRE,
        ORIGINE,
        STATUT_PROFESSIONNEL,
        NIVEAU_ETUDES,
        CODE_POSTAL,
        AUTONOMIE_PERCUE,
        CONFIANCE_EN_SOI,
        SATISFACTION_GLOBALE,
        RECOMMANDATION_NPS,
        REMARQUES_OUVERTES,
    ];

    /// Transversal indicators aggregated across every activity type, with
    /// their display labels. `autonomie_percue` and `confiance_en_soi` are
    /// the two used for before/after comparisons.
    pub const COMPARISON_INDICATORS: [(&str, &str); 2] = [
        (AUTONOMIE_PERCUE, "Autonomie Perçue"),
        (CONFIANCE_EN_SOI, "Confiance en Soi"),
    ];
}

/// Alternate column name accepted for a demographic field.
///
/// Early exports used capitalized headers; the dashboard keeps reading them.
pub fn legacy_alias(name: &str) -> Option<&'static str> {
    match name {
        fields::GENRE => Some("Sexe"),
        fields::ORIGINE => Some("Origine"),
        fields::STATUT_PROFESSIONNEL => Some("Statut"),
        fields::NIVEAU_ETUDES => Some("Etudes"),
        _ => None,
    }
}

/// One submitted questionnaire, as an ordered sequence of field/value pairs.
///
/// Immutable after submission; persisted as one CSV row. Records loaded from
/// different file vintages may carry different field sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseRecord {
    pairs: Vec<(String, String)>,
}

impl ResponseRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, preserving first-seen field order.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(pair) = self.pairs.iter_mut().find(|(n, _)| *n == name) {
            pair.1 = value;
        } else {
            self.pairs.push((name, value));
        }
    }

    /// Look up a field by exact name. Absent fields yield `None`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a field, falling back to its legacy column name when the
    /// primary is absent or blank.
    pub fn get_or_legacy(&self, name: &str) -> Option<&str> {
        let primary = self.get(name).filter(|v| !v.trim().is_empty());
        primary.or_else(|| {
            legacy_alias(name)
                .and_then(|alias| self.get(alias))
                .filter(|v| !v.trim().is_empty())
        })
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(n, _)| n.as_str())
    }

    /// Field/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(String, String)> for ResponseRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut record = ResponseRecord::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// All loaded records for one activity, keyed by phase.
///
/// A phase with no CSV file is simply absent (or maps to an empty list);
/// both shapes mean "zero records".
pub type DatasetByPhase = BTreeMap<Phase, Vec<ResponseRecord>>;
