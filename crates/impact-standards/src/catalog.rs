//! Catalog lookups over the static question registry.

use impact_model::{ActivityType, Phase};

use crate::question::QuestionDefinition;
use crate::questions;

/// Returns the activity-specific questions registered for one
/// (activity, phase) pair, in questionnaire order.
///
/// Pairs with no extra questions (currently every `suivi_3mois`) yield an
/// empty slice; the transversal block applies regardless.
pub fn questions_for(activity: ActivityType, phase: Phase) -> &'static [QuestionDefinition] {
    match (activity, phase) {
        (ActivityType::InclusionNumerique, Phase::Avant) => questions::INCLUSION_NUMERIQUE_AVANT,
        (ActivityType::InclusionNumerique, Phase::Apres) => questions::INCLUSION_NUMERIQUE_APRES,
        (ActivityType::InclusionNumerique, Phase::Suivi6Mois) => {
            questions::INCLUSION_NUMERIQUE_SUIVI_6MOIS
        }
        (ActivityType::Secourisme, Phase::Avant) => questions::SECOURISME_AVANT,
        (ActivityType::Secourisme, Phase::Apres) => questions::SECOURISME_APRES,
        (ActivityType::Secourisme, Phase::Suivi6Mois) => questions::SECOURISME_SUIVI_6MOIS,
        (ActivityType::AccompagnementSocial, Phase::Avant) => {
            questions::ACCOMPAGNEMENT_SOCIAL_AVANT
        }
        (ActivityType::AccompagnementSocial, Phase::Apres) => {
            questions::ACCOMPAGNEMENT_SOCIAL_APRES
        }
        (ActivityType::AccompagnementSocial, Phase::Suivi6Mois) => {
            questions::ACCOMPAGNEMENT_SOCIAL_SUIVI_6MOIS
        }
        (ActivityType::FormationCitoyenne, Phase::Avant) => questions::FORMATION_CITOYENNE_AVANT,
        (ActivityType::FormationCitoyenne, Phase::Apres) => questions::FORMATION_CITOYENNE_APRES,
        (ActivityType::FormationCitoyenne, Phase::Suivi6Mois) => {
            questions::FORMATION_CITOYENNE_SUIVI_6MOIS
        }
        (_, Phase::Suivi3Mois) => &[],
    }
}

/// Looks up a single question definition by id.
pub fn question(
    activity: ActivityType,
    phase: Phase,
    id: &str,
) -> Option<&'static QuestionDefinition> {
    questions_for(activity, phase).iter().find(|q| q.id == id)
}

/// Returns the ids of required questions with no answer, per the provided
/// predicate. Required-ness is a presentation-layer concern: callers run
/// this before building a response row, never after.
pub fn missing_required(
    activity: ActivityType,
    phase: Phase,
    has_answer: impl Fn(&str) -> bool,
) -> Vec<&'static str> {
    questions_for(activity, phase)
        .iter()
        .filter(|q| q.required && !has_answer(q.id))
        .map(|q| q.id)
        .collect()
}
