//! Filesystem tests for the response store.

use impact_model::{ActivityType, Phase, ResponseRecord};

use impact_ingest::{
    append_response, discover_activities, load_dataset, phase_file, read_responses,
};

fn record(pairs: &[(&str, &str)]) -> ResponseRecord {
    pairs
        .iter()
        .map(|(n, v)| ((*n).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn missing_file_reads_as_empty() {
    let project = tempfile::tempdir().expect("tempdir");
    let responses = read_responses(project.path(), ActivityType::Secourisme, Phase::Avant)
        .expect("read responses");
    assert!(responses.is_empty());
}

#[test]
fn append_then_read_round_trips() {
    let project = tempfile::tempdir().expect("tempdir");
    let submitted = record(&[
        ("timestamp", "2025-03-10T09:30:00.000Z"),
        ("participant_id", "P001"),
        ("remarques_ouvertes", "Très utile, merci.\nJe reviendrai."),
    ]);
    append_response(
        project.path(),
        ActivityType::InclusionNumerique,
        Phase::Avant,
        &submitted,
    )
    .expect("append");

    let responses = read_responses(project.path(), ActivityType::InclusionNumerique, Phase::Avant)
        .expect("read responses");
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].get("participant_id"), Some("P001"));
    assert_eq!(
        responses[0].get("remarques_ouvertes"),
        Some("Très utile, merci.\nJe reviendrai.")
    );
    let names: Vec<&str> = responses[0].field_names().collect();
    assert_eq!(
        names,
        vec!["timestamp", "participant_id", "remarques_ouvertes"]
    );
}

#[test]
fn union_append_backfills_new_column_and_keeps_prior_values() {
    let project = tempfile::tempdir().expect("tempdir");
    let activity = ActivityType::AccompagnementSocial;

    let first = record(&[("participant_id", "P001"), ("age", "34")]);
    let second = record(&[("participant_id", "P002"), ("as_q1", "Accès aux soins;Autre")]);
    append_response(project.path(), activity, Phase::Avant, &first).expect("append first");
    append_response(project.path(), activity, Phase::Avant, &second).expect("append second");

    let responses =
        read_responses(project.path(), activity, Phase::Avant).expect("read responses");
    assert_eq!(responses.len(), 2);

    // Existing fields keep their position; the new column lands last.
    let names: Vec<&str> = responses[0].field_names().collect();
    assert_eq!(names, vec!["participant_id", "age", "as_q1"]);

    // Prior row values survive the rewrite; the new column is back-filled.
    assert_eq!(responses[0].get("participant_id"), Some("P001"));
    assert_eq!(responses[0].get("age"), Some("34"));
    assert_eq!(responses[0].get("as_q1"), Some(""));

    // The new row is back-filled for the column it lacks.
    assert_eq!(responses[1].get("age"), Some(""));
    assert_eq!(responses[1].get("as_q1"), Some("Accès aux soins;Autre"));
}

#[test]
fn repeated_union_appends_preserve_first_seen_order() {
    let project = tempfile::tempdir().expect("tempdir");
    let activity = ActivityType::FormationCitoyenne;

    append_response(project.path(), activity, Phase::Apres, &record(&[("a", "1")]))
        .expect("append");
    append_response(
        project.path(),
        activity,
        Phase::Apres,
        &record(&[("c", "3"), ("a", "2")]),
    )
    .expect("append");
    append_response(
        project.path(),
        activity,
        Phase::Apres,
        &record(&[("b", "4"), ("c", "5")]),
    )
    .expect("append");

    let responses = read_responses(project.path(), activity, Phase::Apres).expect("read");
    let names: Vec<&str> = responses[0].field_names().collect();
    assert_eq!(names, vec!["a", "c", "b"]);
    assert_eq!(responses[2].get("a"), Some(""));
    assert_eq!(responses[2].get("b"), Some("4"));
}

#[test]
fn load_dataset_covers_all_phases() {
    let project = tempfile::tempdir().expect("tempdir");
    let activity = ActivityType::Secourisme;
    append_response(
        project.path(),
        activity,
        Phase::Apres,
        &record(&[("participant_id", "P010")]),
    )
    .expect("append");

    let dataset = load_dataset(project.path(), activity).expect("load dataset");
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset[&Phase::Apres].len(), 1);
    assert!(dataset[&Phase::Avant].is_empty());
    assert!(dataset[&Phase::Suivi3Mois].is_empty());
    assert!(dataset[&Phase::Suivi6Mois].is_empty());
}

#[test]
fn discovery_lists_only_activities_with_data() {
    let project = tempfile::tempdir().expect("tempdir");
    assert!(discover_activities(project.path()).expect("discover").is_empty());

    append_response(
        project.path(),
        ActivityType::Secourisme,
        Phase::Avant,
        &record(&[("participant_id", "P001")]),
    )
    .expect("append");
    append_response(
        project.path(),
        ActivityType::InclusionNumerique,
        Phase::Suivi6Mois,
        &record(&[("participant_id", "P002")]),
    )
    .expect("append");

    // Stray directories are ignored.
    std::fs::create_dir_all(project.path().join("data/notes")).expect("mkdir");
    std::fs::create_dir_all(project.path().join("data/reponses_theatre")).expect("mkdir");

    let found = discover_activities(project.path()).expect("discover");
    assert_eq!(
        found,
        vec![ActivityType::InclusionNumerique, ActivityType::Secourisme]
    );
}

#[test]
fn file_lands_at_documented_path() {
    let project = tempfile::tempdir().expect("tempdir");
    let activity = ActivityType::InclusionNumerique;
    append_response(
        project.path(),
        activity,
        Phase::Suivi3Mois,
        &record(&[("participant_id", "P001")]),
    )
    .expect("append");
    assert!(phase_file(project.path(), activity, Phase::Suivi3Mois).is_file());
    assert!(
        project
            .path()
            .join("data/reponses_inclusion_numerique/suivi_3mois.csv")
            .is_file()
    );
}
