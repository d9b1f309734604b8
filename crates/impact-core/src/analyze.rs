//! Per-activity aggregation.
//!
//! [`analyze`] is a pure function of the loaded dataset, the activity and
//! the analysis instant: no I/O, no shared state, and no failure path for
//! data-quality problems. Unparseable or absent values are excluded from
//! both numerator and denominator, never substituted with zero — except for
//! the before/after comparison means, which keep the dashboard's historical
//! zero-fallback form.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use impact_model::{
    ActivityType, AnalysisResult, Comparison, DatasetByPhase, Demographics, Phase, Remark,
    ResponseRecord, TransversalKpis, fields,
};

use crate::numeric::{parse_age, parse_f64, round0, round1};

/// Free-text value participants pick when they have nothing to say. Counted
/// in the remarks list but not as qualitative engagement.
pub const NO_REMARK_SENTINEL: &str = "Aucune remarque";

const MS_PER_DAY: f64 = 86_400_000.0;

/// Computes the full analytics payload for one activity.
///
/// `now` anchors the data-age metric; injecting it keeps the result a pure
/// function of its inputs.
pub fn analyze(dataset: &DatasetByPhase, activity: ActivityType, now: DateTime<Utc>) -> AnalysisResult {
    let empty: Vec<ResponseRecord> = Vec::new();
    let by_phase: Vec<(Phase, &Vec<ResponseRecord>)> = Phase::ALL
        .iter()
        .map(|phase| (*phase, dataset.get(phase).unwrap_or(&empty)))
        .collect();
    let all: Vec<&ResponseRecord> = by_phase
        .iter()
        .flat_map(|(_, records)| records.iter())
        .collect();

    let participants_by_phase = by_phase
        .iter()
        .map(|(phase, records)| (*phase, records.len()))
        .collect();
    let available_phases = by_phase
        .iter()
        .filter(|(_, records)| !records.is_empty())
        .map(|(phase, _)| *phase)
        .collect();

    let avant = dataset.get(&Phase::Avant).unwrap_or(&empty);
    let apres = dataset.get(&Phase::Apres).unwrap_or(&empty);

    let autonomie = Comparison {
        avant: phase_mean_zero_filled(avant, fields::AUTONOMIE_PERCUE),
        apres: phase_mean_zero_filled(apres, fields::AUTONOMIE_PERCUE),
    };
    let confiance = Comparison {
        avant: phase_mean_zero_filled(avant, fields::CONFIANCE_EN_SOI),
        apres: phase_mean_zero_filled(apres, fields::CONFIANCE_EN_SOI),
    };

    let mut comparisons = BTreeMap::new();
    if !avant.is_empty() && !apres.is_empty() {
        for (field, label) in fields::COMPARISON_INDICATORS {
            let comparison = if field == fields::AUTONOMIE_PERCUE {
                autonomie
            } else {
                confiance
            };
            comparisons.insert(label.to_string(), comparison);
        }
    }

    let transversal = TransversalKpis {
        satisfaction_moyenne: mean_of_parseable(&all, fields::SATISFACTION_GLOBALE),
        nps_score: nps_score(&all),
        autonomie,
        confiance,
        satisfaction_rate: satisfaction_rate(&all),
        non_response_rate: non_response_rate(&by_phase, all.len()),
        data_age_days: mean_data_age_days(&all, now),
        quality_engagement_rate: quality_engagement_rate(&all),
        comment_depth: comment_depth(&all),
    };

    let result = AnalysisResult {
        activity,
        total_participants: all.len(),
        participants_by_phase,
        available_phases,
        demographics: tally_demographics(&all),
        transversal,
        comparisons,
        remarques: collect_remarks(&all, activity),
    };
    debug!(
        activity = %activity,
        participants = result.total_participants,
        remarks = result.remarques.len(),
        "analysis complete"
    );
    result
}

/// Mean over parseable values only; absent and unparseable values are
/// excluded from both numerator and denominator. 0 when none parse.
fn mean_of_parseable(records: &[&ResponseRecord], field: &str) -> f64 {
    let values: Vec<f64> = records
        .iter()
        .filter_map(|record| record.get(field).and_then(parse_f64))
        .collect();
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Per-phase indicator mean in the dashboard's zero-fallback form:
/// unparseable values count as 0 and the divisor is the full phase size.
fn phase_mean_zero_filled(records: &[ResponseRecord], field: &str) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records
        .iter()
        .map(|record| record.get(field).and_then(parse_f64).unwrap_or(0.0))
        .sum();
    sum / records.len() as f64
}

/// Net Promoter Score over parseable NPS answers: promoters score >= 9,
/// detractors <= 6, `(promoters - detractors) / respondents * 100`.
fn nps_score(records: &[&ResponseRecord]) -> f64 {
    let values: Vec<f64> = records
        .iter()
        .filter_map(|record| record.get(fields::RECOMMANDATION_NPS).and_then(parse_f64))
        .collect();
    if values.is_empty() {
        return 0.0;
    }
    let promoters = values.iter().filter(|v| **v >= 9.0).count() as f64;
    let detractors = values.iter().filter(|v| **v <= 6.0).count() as f64;
    (promoters - detractors) / values.len() as f64 * 100.0
}

/// Share of parseable satisfaction answers at 4/5 or better, as a
/// percentage with one decimal.
fn satisfaction_rate(records: &[&ResponseRecord]) -> f64 {
    let values: Vec<f64> = records
        .iter()
        .filter_map(|record| {
            record
                .get(fields::SATISFACTION_GLOBALE)
                .and_then(parse_f64)
        })
        .collect();
    if values.is_empty() {
        return 0.0;
    }
    let satisfied = values.iter().filter(|v| **v >= 4.0).count() as f64;
    round1(satisfied / values.len() as f64 * 100.0)
}

/// Rows expected across phase buckets vs. rows that reached the flattened
/// set. The two counts coincide in the current data flow, so this reads
/// 0.0 in practice; the card stays on the dashboard regardless.
fn non_response_rate(by_phase: &[(Phase, &Vec<ResponseRecord>)], flattened: usize) -> f64 {
    let expected: usize = by_phase.iter().map(|(_, records)| records.len()).sum();
    if expected == 0 {
        return 0.0;
    }
    round1((expected - flattened) as f64 / expected as f64 * 100.0)
}

/// Mean age of the data in fractional days, over records whose timestamp
/// parses as RFC 3339.
fn mean_data_age_days(records: &[&ResponseRecord], now: DateTime<Utc>) -> f64 {
    let ages: Vec<f64> = records
        .iter()
        .filter_map(|record| {
            let raw = record.get(fields::TIMESTAMP)?;
            let parsed = DateTime::parse_from_rfc3339(raw.trim()).ok()?;
            let elapsed_ms = (now - parsed.with_timezone(&Utc)).num_milliseconds() as f64;
            Some(elapsed_ms / MS_PER_DAY)
        })
        .collect();
    if ages.is_empty() {
        return 0.0;
    }
    round1(ages.iter().sum::<f64>() / ages.len() as f64)
}

fn meaningful_remark(record: &ResponseRecord) -> Option<&str> {
    let trimmed = record.get(fields::REMARQUES_OUVERTES)?.trim();
    if trimmed.is_empty() || trimmed == NO_REMARK_SENTINEL {
        None
    } else {
        Some(trimmed)
    }
}

/// Share of records carrying a meaningful remark (non-blank, not the
/// "nothing to report" sentinel).
fn quality_engagement_rate(records: &[&ResponseRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let meaningful = records
        .iter()
        .filter(|record| meaningful_remark(record).is_some())
        .count() as f64;
    round1(meaningful / records.len() as f64 * 100.0)
}

/// Mean character length of meaningful remarks.
fn comment_depth(records: &[&ResponseRecord]) -> f64 {
    let lengths: Vec<usize> = records
        .iter()
        .filter_map(|record| meaningful_remark(record).map(|text| text.chars().count()))
        .collect();
    if lengths.is_empty() {
        return 0.0;
    }
    round0(lengths.iter().sum::<usize>() as f64 / lengths.len() as f64)
}

fn age_bucket(age: i64) -> &'static str {
    if age < 30 {
        "18-30"
    } else if age < 50 {
        "31-50"
    } else {
        "51+"
    }
}

/// Tallies demographic attributes. Buckets are the raw submitted strings
/// (case-sensitive); only age is bucketed. Absent values are excluded, not
/// counted as an "unknown" bucket.
fn tally_demographics(records: &[&ResponseRecord]) -> Demographics {
    let mut demographics = Demographics::default();
    for record in records {
        if let Some(age) = record.get(fields::AGE).and_then(parse_age) {
            *demographics
                .age
                .entry(age_bucket(age).to_string())
                .or_insert(0) += 1;
        }
        tally_field(&mut demographics.genre, record, fields::GENRE);
        tally_field(&mut demographics.origine, record, fields::ORIGINE);
        tally_field(
            &mut demographics.statut_professionnel,
            record,
            fields::STATUT_PROFESSIONNEL,
        );
        tally_field(&mut demographics.niveau_etudes, record, fields::NIVEAU_ETUDES);
    }
    demographics
}

fn tally_field(tally: &mut BTreeMap<String, usize>, record: &ResponseRecord, field: &str) {
    if let Some(value) = record.get_or_legacy(field) {
        *tally.entry(value.to_string()).or_insert(0) += 1;
    }
}

/// Projects every non-blank remark in flattened order. Unlike the
/// engagement metric, the "Aucune remarque" sentinel is kept: it is a
/// deliberate answer and still shows in the list.
fn collect_remarks(records: &[&ResponseRecord], activity: ActivityType) -> Vec<Remark> {
    let mut remarks = Vec::new();
    for record in records {
        let Some(raw) = record.get(fields::REMARQUES_OUVERTES) else {
            continue;
        };
        if raw.trim().is_empty() {
            continue;
        }
        remarks.push(Remark {
            id: format!("{}-{}", activity.as_str(), remarks.len()),
            text: raw.to_string(),
            activity,
        });
    }
    remarks
}
