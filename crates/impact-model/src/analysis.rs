//! Aggregated analytics payloads.
//!
//! An [`AnalysisResult`] is a pure function of one activity's loaded
//! dataset (plus the analysis instant for the data-age metric): recomputing
//! from the same input yields an identical payload. Nothing here is
//! persisted; the dashboard, report export, and JSON output all consume
//! these structures directly.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::activity::ActivityType;
use crate::phase::Phase;

/// Mean of one indicator before and after the activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub avant: f64,
    pub apres: f64,
}

impl Comparison {
    /// Progression of the indicator across the activity.
    pub fn delta(&self) -> f64 {
        self.apres - self.avant
    }
}

/// One free-text remark, with a back-reference to its source activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remark {
    pub id: String,
    pub text: String,
    pub activity: ActivityType,
}

/// Frequency tallies per demographic attribute.
///
/// Buckets are raw submitted values (case-sensitive, no normalization)
/// except for `age`, which is bucketed into `18-30` / `31-50` / `51+`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: BTreeMap<String, usize>,
    pub genre: BTreeMap<String, usize>,
    pub origine: BTreeMap<String, usize>,
    pub statut_professionnel: BTreeMap<String, usize>,
    pub niveau_etudes: BTreeMap<String, usize>,
}

impl Demographics {
    /// Add another activity's tallies into this one, bucket by bucket.
    pub fn merge(&mut self, other: &Demographics) {
        merge_tally(&mut self.age, &other.age);
        merge_tally(&mut self.genre, &other.genre);
        merge_tally(&mut self.origine, &other.origine);
        merge_tally(&mut self.statut_professionnel, &other.statut_professionnel);
        merge_tally(&mut self.niveau_etudes, &other.niveau_etudes);
    }

    pub fn is_empty(&self) -> bool {
        self.age.is_empty()
            && self.genre.is_empty()
            && self.origine.is_empty()
            && self.statut_professionnel.is_empty()
            && self.niveau_etudes.is_empty()
    }
}

fn merge_tally(into: &mut BTreeMap<String, usize>, from: &BTreeMap<String, usize>) {
    for (bucket, count) in from {
        *into.entry(bucket.clone()).or_insert(0) += count;
    }
}

/// The transversal KPI block common to every activity type.
///
/// Rates are percentages; `satisfaction_moyenne` and the comparison pairs
/// are 1-5 scores; `comment_depth` is a character count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransversalKpis {
    pub satisfaction_moyenne: f64,
    pub nps_score: f64,
    pub autonomie: Comparison,
    pub confiance: Comparison,
    pub satisfaction_rate: f64,
    pub non_response_rate: f64,
    pub data_age_days: f64,
    pub quality_engagement_rate: f64,
    pub comment_depth: f64,
}

/// The full analytics payload for one activity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub activity: ActivityType,
    pub total_participants: usize,
    /// Record counts for all four phases, zero-filled.
    pub participants_by_phase: BTreeMap<Phase, usize>,
    /// Phases with at least one record.
    pub available_phases: BTreeSet<Phase>,
    pub demographics: Demographics,
    pub transversal: TransversalKpis,
    /// Before/after means per indicator label, present only when both the
    /// `avant` and `apres` phases hold records.
    pub comparisons: BTreeMap<String, Comparison>,
    /// Non-blank remarks in flattened dataset order.
    pub remarques: Vec<Remark>,
}

impl AnalysisResult {
    pub fn has_participants(&self) -> bool {
        self.total_participants > 0
    }
}

/// One activity's before/after pair for a single indicator, as plotted in
/// the cross-activity comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityComparison {
    pub activity: ActivityType,
    pub avant: f64,
    pub apres: f64,
}

/// The cross-activity aggregate backing the global dashboard view.
///
/// Activities with zero participants are excluded entirely; they do not
/// appear as zero bars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalAnalysis {
    pub total_participants: usize,
    pub demographics: Demographics,
    /// Indicator label -> one entry per activity that compares it.
    pub comparisons: BTreeMap<String, Vec<ActivityComparison>>,
}
