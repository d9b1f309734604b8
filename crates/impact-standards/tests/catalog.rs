//! Integrity checks over the static question catalog.

use std::collections::BTreeSet;

use impact_model::{ActivityType, Phase, fields};
use impact_standards::{InputKind, questions_for};

#[test]
fn question_ids_unique_within_each_pair() {
    for activity in ActivityType::ALL {
        for phase in Phase::ALL {
            let mut seen = BTreeSet::new();
            for question in questions_for(activity, phase) {
                assert!(
                    seen.insert(question.id),
                    "duplicate id {} in {activity}/{phase}",
                    question.id
                );
            }
        }
    }
}

#[test]
fn question_ids_never_shadow_fixed_fields() {
    for activity in ActivityType::ALL {
        for phase in Phase::ALL {
            for question in questions_for(activity, phase) {
                assert!(
                    !fields::FIXED.contains(&question.id),
                    "{} collides with a fixed field",
                    question.id
                );
            }
        }
    }
}

#[test]
fn option_lists_match_input_kinds() {
    for activity in ActivityType::ALL {
        for phase in Phase::ALL {
            for question in questions_for(activity, phase) {
                if question.kind.has_options() {
                    assert!(
                        !question.options.is_empty(),
                        "{} is a {} question with no options",
                        question.id,
                        question.kind
                    );
                } else {
                    assert!(
                        question.options.is_empty(),
                        "{} is a {} question but carries options",
                        question.id,
                        question.kind
                    );
                }
            }
        }
    }
}

#[test]
fn every_question_names_a_prompt_and_indicator() {
    for activity in ActivityType::ALL {
        for phase in Phase::ALL {
            for question in questions_for(activity, phase) {
                assert!(!question.prompt.is_empty());
                assert!(question.indicator.is_some(), "{} has no indicator", question.id);
            }
        }
    }
}

#[test]
fn multiselect_only_appears_where_expected() {
    let mut multiselect_ids = Vec::new();
    for activity in ActivityType::ALL {
        for phase in Phase::ALL {
            for question in questions_for(activity, phase) {
                if question.kind == InputKind::MultiSelect {
                    multiselect_ids.push(question.id);
                }
            }
        }
    }
    assert_eq!(multiselect_ids, vec!["as_q1"]);
}
