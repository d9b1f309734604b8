//! Aggregation engine behavior tests.

use chrono::{DateTime, TimeZone, Utc};

use impact_core::{analyze, analyze_global};
use impact_model::{ActivityType, DatasetByPhase, Phase, ResponseRecord};

fn record(pairs: &[(&str, &str)]) -> ResponseRecord {
    pairs
        .iter()
        .map(|(n, v)| ((*n).to_string(), (*v).to_string()))
        .collect()
}

fn dataset(phases: &[(Phase, Vec<ResponseRecord>)]) -> DatasetByPhase {
    phases
        .iter()
        .map(|(phase, records)| (*phase, records.clone()))
        .collect()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn empty_dataset_yields_zeroed_result() {
    let result = analyze(&DatasetByPhase::new(), ActivityType::Secourisme, now());
    assert_eq!(result.total_participants, 0);
    assert!(result.available_phases.is_empty());
    assert_eq!(result.participants_by_phase.len(), 4);
    assert!(result.participants_by_phase.values().all(|count| *count == 0));
    assert!(result.demographics.is_empty());
    assert!(result.comparisons.is_empty());
    assert!(result.remarques.is_empty());
    let kpis = &result.transversal;
    assert_eq!(kpis.satisfaction_moyenne, 0.0);
    assert_eq!(kpis.nps_score, 0.0);
    assert_eq!(kpis.satisfaction_rate, 0.0);
    assert_eq!(kpis.non_response_rate, 0.0);
    assert_eq!(kpis.data_age_days, 0.0);
    assert_eq!(kpis.quality_engagement_rate, 0.0);
    assert_eq!(kpis.comment_depth, 0.0);
}

#[test]
fn unparseable_values_are_excluded_not_zeroed() {
    let clean = dataset(&[(
        Phase::Avant,
        vec![
            record(&[("satisfaction_globale", "4")]),
            record(&[("satisfaction_globale", "5")]),
        ],
    )]);
    let noisy = dataset(&[(
        Phase::Avant,
        vec![
            record(&[("satisfaction_globale", "4")]),
            record(&[("satisfaction_globale", "5")]),
            record(&[("satisfaction_globale", "")]),
            record(&[("satisfaction_globale", "pas de réponse")]),
            record(&[("participant_id", "P009")]),
        ],
    )]);

    let clean_mean = analyze(&clean, ActivityType::Secourisme, now())
        .transversal
        .satisfaction_moyenne;
    let noisy_mean = analyze(&noisy, ActivityType::Secourisme, now())
        .transversal
        .satisfaction_moyenne;
    assert_eq!(clean_mean, 4.5);
    assert_eq!(noisy_mean, 4.5);
}

#[test]
fn nps_score_from_known_distribution() {
    // 10 answers: 3 promoters (>=9), 2 detractors (<=6), 5 passives.
    let values = ["9", "9", "10", "3", "3", "7", "7", "7", "7", "7"];
    let records = values
        .iter()
        .map(|v| record(&[("recommandation_nps", v)]))
        .collect();
    let result = analyze(
        &dataset(&[(Phase::Apres, records)]),
        ActivityType::InclusionNumerique,
        now(),
    );
    assert_eq!(result.transversal.nps_score, 10.0);
}

#[test]
fn satisfaction_rate_from_known_distribution() {
    let values = ["5", "5", "4", "3", "2"];
    let records = values
        .iter()
        .map(|v| record(&[("satisfaction_globale", v)]))
        .collect();
    let result = analyze(
        &dataset(&[(Phase::Apres, records)]),
        ActivityType::InclusionNumerique,
        now(),
    );
    assert_eq!(result.transversal.satisfaction_rate, 60.0);
}

#[test]
fn age_bucket_boundaries() {
    let ages = ["18", "29", "30", "49", "50", "70"];
    let records = ages.iter().map(|v| record(&[("age", v)])).collect();
    let result = analyze(
        &dataset(&[(Phase::Avant, records)]),
        ActivityType::FormationCitoyenne,
        now(),
    );
    assert_eq!(result.demographics.age.get("18-30"), Some(&2));
    assert_eq!(result.demographics.age.get("31-50"), Some(&2));
    assert_eq!(result.demographics.age.get("51+"), Some(&2));
}

#[test]
fn unparseable_ages_are_dropped_from_buckets() {
    let records = vec![
        record(&[("age", "25")]),
        record(&[("age", "inconnu")]),
        record(&[("age", "")]),
    ];
    let result = analyze(
        &dataset(&[(Phase::Avant, records)]),
        ActivityType::FormationCitoyenne,
        now(),
    );
    let total: usize = result.demographics.age.values().sum();
    assert_eq!(total, 1);
}

#[test]
fn comparisons_require_both_avant_and_apres() {
    let avant_only = dataset(&[
        (Phase::Avant, vec![record(&[("autonomie_percue", "2")])]),
        (Phase::Suivi3Mois, vec![record(&[("autonomie_percue", "4")])]),
        (Phase::Suivi6Mois, vec![record(&[("autonomie_percue", "5")])]),
    ]);
    let result = analyze(&avant_only, ActivityType::AccompagnementSocial, now());
    assert!(result.comparisons.is_empty());

    let both = dataset(&[
        (
            Phase::Avant,
            vec![record(&[("autonomie_percue", "2"), ("confiance_en_soi", "1")])],
        ),
        (
            Phase::Apres,
            vec![record(&[("autonomie_percue", "4"), ("confiance_en_soi", "5")])],
        ),
    ]);
    let result = analyze(&both, ActivityType::AccompagnementSocial, now());
    assert_eq!(result.comparisons.len(), 2);
    let autonomie = &result.comparisons["Autonomie Perçue"];
    assert_eq!(autonomie.avant, 2.0);
    assert_eq!(autonomie.apres, 4.0);
    let confiance = &result.comparisons["Confiance en Soi"];
    assert_eq!(confiance.avant, 1.0);
    assert_eq!(confiance.apres, 5.0);
}

#[test]
fn comparison_means_zero_fill_unparseable_values() {
    // One parseable 4 and one blank: the historical dashboard counted the
    // blank as 0 and divided by the full phase size.
    let both = dataset(&[
        (
            Phase::Avant,
            vec![
                record(&[("autonomie_percue", "4")]),
                record(&[("autonomie_percue", "")]),
            ],
        ),
        (Phase::Apres, vec![record(&[("participant_id", "P001")])]),
    ]);
    let result = analyze(&both, ActivityType::Secourisme, now());
    let autonomie = &result.comparisons["Autonomie Perçue"];
    assert_eq!(autonomie.avant, 2.0);
    assert_eq!(autonomie.apres, 0.0);
}

#[test]
fn data_age_is_mean_days_from_analysis_instant() {
    let records = vec![
        record(&[("timestamp", "2025-05-22T12:00:00.000Z")]), // 10 days
        record(&[("timestamp", "2025-05-12T12:00:00.000Z")]), // 20 days
        record(&[("timestamp", "pas une date")]),
    ];
    let result = analyze(
        &dataset(&[(Phase::Avant, records)]),
        ActivityType::Secourisme,
        now(),
    );
    assert_eq!(result.transversal.data_age_days, 15.0);
}

#[test]
fn sentinel_remark_counts_in_list_but_not_engagement() {
    let records = vec![
        record(&[("remarques_ouvertes", "Très bonne formation")]),
        record(&[("remarques_ouvertes", "Aucune remarque")]),
        record(&[("remarques_ouvertes", "   ")]),
        record(&[("remarques_ouvertes", "")]),
    ];
    let result = analyze(
        &dataset(&[(Phase::Apres, records)]),
        ActivityType::Secourisme,
        now(),
    );

    // Engagement: 1 meaningful remark out of 4 records.
    assert_eq!(result.transversal.quality_engagement_rate, 25.0);
    assert_eq!(result.transversal.comment_depth, 20.0);

    // Remarks list keeps the sentinel answer.
    let texts: Vec<&str> = result.remarques.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["Très bonne formation", "Aucune remarque"]);
    assert_eq!(result.remarques[0].id, "secourisme-0");
    assert_eq!(result.remarques[1].id, "secourisme-1");
    assert_eq!(result.remarques[0].activity, ActivityType::Secourisme);
}

#[test]
fn legacy_demographic_columns_still_tally() {
    let records = vec![
        record(&[("Sexe", "F"), ("Statut", "Demandeur d'emploi")]),
        record(&[("genre", "F"), ("Etudes", "Bac")]),
        record(&[("genre", ""), ("Sexe", "M")]),
    ];
    let result = analyze(
        &dataset(&[(Phase::Avant, records)]),
        ActivityType::AccompagnementSocial,
        now(),
    );
    assert_eq!(result.demographics.genre.get("F"), Some(&2));
    assert_eq!(result.demographics.genre.get("M"), Some(&1));
    assert_eq!(
        result.demographics.statut_professionnel.get("Demandeur d'emploi"),
        Some(&1)
    );
    assert_eq!(result.demographics.niveau_etudes.get("Bac"), Some(&1));
}

#[test]
fn phase_counts_and_availability() {
    let data = dataset(&[
        (Phase::Avant, vec![record(&[]), record(&[])]),
        (Phase::Suivi6Mois, vec![record(&[])]),
    ]);
    let result = analyze(&data, ActivityType::InclusionNumerique, now());
    assert_eq!(result.total_participants, 3);
    assert_eq!(result.participants_by_phase[&Phase::Avant], 2);
    assert_eq!(result.participants_by_phase[&Phase::Apres], 0);
    assert_eq!(result.participants_by_phase[&Phase::Suivi6Mois], 1);
    assert!(result.available_phases.contains(&Phase::Avant));
    assert!(!result.available_phases.contains(&Phase::Apres));
    // Phase buckets and the flattened set hold the same rows, so the
    // non-response metric reads zero by construction.
    assert_eq!(result.transversal.non_response_rate, 0.0);
}

#[test]
fn analysis_is_deterministic_for_a_fixed_instant() {
    let data = dataset(&[
        (
            Phase::Avant,
            vec![record(&[
                ("timestamp", "2025-05-01T08:00:00.000Z"),
                ("age", "44"),
                ("genre", "F"),
                ("autonomie_percue", "2"),
                ("confiance_en_soi", "3"),
                ("satisfaction_globale", "4"),
                ("recommandation_nps", "8"),
                ("remarques_ouvertes", "Bien."),
            ])],
        ),
        (
            Phase::Apres,
            vec![record(&[
                ("timestamp", "2025-05-20T08:00:00.000Z"),
                ("autonomie_percue", "4"),
                ("confiance_en_soi", "4"),
                ("satisfaction_globale", "5"),
                ("recommandation_nps", "10"),
            ])],
        ),
    ]);
    let first = analyze(&data, ActivityType::Secourisme, now());
    let second = analyze(&data, ActivityType::Secourisme, now());
    assert_eq!(first, second);
}

#[test]
fn global_aggregate_excludes_empty_activities_and_sums_the_rest() {
    let secourisme = analyze(
        &dataset(&[
            (
                Phase::Avant,
                vec![record(&[("age", "25"), ("autonomie_percue", "2")])],
            ),
            (Phase::Apres, vec![record(&[("autonomie_percue", "4")])]),
        ]),
        ActivityType::Secourisme,
        now(),
    );
    let citoyenne = analyze(
        &dataset(&[(Phase::Avant, vec![record(&[("age", "60")])])]),
        ActivityType::FormationCitoyenne,
        now(),
    );
    let vide = analyze(&DatasetByPhase::new(), ActivityType::InclusionNumerique, now());

    let global = analyze_global(&[secourisme, citoyenne, vide]);
    assert_eq!(global.total_participants, 3);
    assert_eq!(global.demographics.age.get("18-30"), Some(&1));
    assert_eq!(global.demographics.age.get("51+"), Some(&1));

    // Only secourisme has both phases, so the comparison series holds one
    // entry per indicator, and the empty activity contributes nothing.
    let autonomie = &global.comparisons["Autonomie Perçue"];
    assert_eq!(autonomie.len(), 1);
    assert_eq!(autonomie[0].activity, ActivityType::Secourisme);
    assert_eq!(autonomie[0].avant, 2.0);
    assert_eq!(autonomie[0].apres, 4.0);
}
