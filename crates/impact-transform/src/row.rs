//! Flattening a completed questionnaire into one response row.

use chrono::{DateTime, SecondsFormat, Utc};

use impact_model::{ActivityType, Phase, ResponseRecord, fields};
use impact_standards::{InputKind, questions_for};

use crate::answers::SubmittedAnswers;

/// Builds the flat record persisted for one submission.
///
/// Fixed demographic and transversal fields are always present, blank when
/// unanswered. Activity-specific answers follow in catalog order;
/// multi-select answers are joined into one `;`-separated field. The
/// submission instant is injected so the produced row is deterministic.
///
/// Required-ness is not checked here: the presentation layer already
/// enforced it (see `impact_standards::missing_required`).
pub fn build_row(
    activity: ActivityType,
    phase: Phase,
    answers: &SubmittedAnswers,
    submitted_at: DateTime<Utc>,
) -> ResponseRecord {
    let mut record = ResponseRecord::new();
    record.insert(
        fields::TIMESTAMP,
        submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    );
    for field in fields::FIXED.iter().skip(1) {
        record.insert(*field, answers.single(field).unwrap_or(""));
    }

    for question in questions_for(activity, phase) {
        let value = match question.kind {
            InputKind::MultiSelect => answers.all(question.id).join(";"),
            _ => answers.single(question.id).unwrap_or("").to_string(),
        };
        record.insert(question.id, value);
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::SubmittedAnswers;
    use chrono::TimeZone;

    fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 9, 30, 0).unwrap()
    }

    #[test]
    fn fixed_fields_always_present_and_ordered() {
        let answers = SubmittedAnswers::new();
        let row = build_row(
            ActivityType::Secourisme,
            Phase::Suivi3Mois,
            &answers,
            submitted_at(),
        );
        let names: Vec<&str> = row.field_names().collect();
        assert_eq!(names, fields::FIXED.to_vec());
        assert_eq!(row.get(fields::PARTICIPANT_ID), Some(""));
        assert_eq!(row.get(fields::REMARQUES_OUVERTES), Some(""));
    }

    #[test]
    fn timestamp_is_iso_8601_with_milliseconds() {
        let answers = SubmittedAnswers::new();
        let row = build_row(
            ActivityType::Secourisme,
            Phase::Avant,
            &answers,
            submitted_at(),
        );
        assert_eq!(row.get(fields::TIMESTAMP), Some("2025-03-10T09:30:00.000Z"));
    }

    #[test]
    fn multiselect_answers_join_with_semicolons() {
        let mut answers = SubmittedAnswers::new();
        answers.set("participant_id", "P001");
        answers.set_many(
            "as_q1",
            vec![
                "Aide administrative".to_string(),
                "Recherche d'emploi".to_string(),
            ],
        );
        answers.set("as_q2", "3");
        let row = build_row(
            ActivityType::AccompagnementSocial,
            Phase::Avant,
            &answers,
            submitted_at(),
        );
        assert_eq!(
            row.get("as_q1"),
            Some("Aide administrative;Recherche d'emploi")
        );
        assert_eq!(row.get("as_q2"), Some("3"));
        // Unanswered question fields are still written, blank.
        assert_eq!(row.get("as_q3"), Some(""));
    }

    #[test]
    fn question_fields_follow_fixed_block_in_catalog_order() {
        let answers = SubmittedAnswers::new();
        let row = build_row(
            ActivityType::InclusionNumerique,
            Phase::Avant,
            &answers,
            submitted_at(),
        );
        let names: Vec<&str> = row.field_names().collect();
        assert_eq!(names.len(), fields::FIXED.len() + 5);
        assert_eq!(
            &names[fields::FIXED.len()..],
            &["in_q1", "in_q2", "in_q3", "in_q4", "in_q5"]
        );
    }

    #[test]
    fn demographics_pass_through() {
        let mut answers = SubmittedAnswers::new();
        answers.set("participant_id", "P007");
        answers.set("age", "42");
        answers.set("genre", "F");
        answers.set("satisfaction_globale", "5");
        answers.set("recommandation_nps", "9");
        let row = build_row(
            ActivityType::FormationCitoyenne,
            Phase::Apres,
            &answers,
            submitted_at(),
        );
        assert_eq!(row.get(fields::AGE), Some("42"));
        assert_eq!(row.get(fields::GENRE), Some("F"));
        assert_eq!(row.get(fields::SATISFACTION_GLOBALE), Some("5"));
        assert_eq!(row.get(fields::RECOMMANDATION_NPS), Some("9"));
    }
}
