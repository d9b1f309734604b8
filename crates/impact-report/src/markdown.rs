//! Markdown rendering of the dashboard.
//!
//! The exported document mirrors the on-screen sections: KPI cards,
//! participation per phase, demographic breakdowns, before/after evolution
//! and the remarks list, with a generation date in the footer.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use impact_model::{AnalysisResult, Demographics, GlobalAnalysis, Phase};

use crate::kpi::kpi_rows;

/// Demographic sections that hold at least one bucket, with their display
/// titles, in dashboard order.
pub fn demographic_sections(
    demographics: &Demographics,
) -> Vec<(&'static str, &BTreeMap<String, usize>)> {
    let all: [(&'static str, &BTreeMap<String, usize>); 5] = [
        ("Répartition par âge", &demographics.age),
        ("Genre", &demographics.genre),
        ("Origine", &demographics.origine),
        ("Statut Professionnel", &demographics.statut_professionnel),
        ("Niveau d'Études", &demographics.niveau_etudes),
    ];
    all.into_iter()
        .filter(|(_, tally)| !tally.is_empty())
        .collect()
}

fn push_title(out: &mut String, title: &str) {
    let _ = writeln!(out, "# Dashboard Impact — {title}");
    let _ = writeln!(out);
}

fn push_kpis(out: &mut String, result: &AnalysisResult) {
    let _ = writeln!(out, "## Indicateurs transversaux");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Indicateur | Valeur |");
    let _ = writeln!(out, "| --- | --- |");
    for row in kpi_rows(&result.transversal) {
        let _ = writeln!(out, "| {} | {} |", row.label, row.value);
    }
    let _ = writeln!(out);
}

fn push_participation(out: &mut String, result: &AnalysisResult) {
    let _ = writeln!(out, "## Participation");
    let _ = writeln!(out);
    let _ = writeln!(out, "Participants : {}", result.total_participants);
    let _ = writeln!(out);
    let _ = writeln!(out, "| Phase | Réponses |");
    let _ = writeln!(out, "| --- | --- |");
    for phase in Phase::ALL {
        let count = result
            .participants_by_phase
            .get(&phase)
            .copied()
            .unwrap_or(0);
        let _ = writeln!(out, "| {} | {} |", phase.label(), count);
    }
    let _ = writeln!(out);
}

fn push_demographics(out: &mut String, demographics: &Demographics) {
    let _ = writeln!(out, "## Démographie");
    let _ = writeln!(out);
    let sections = demographic_sections(demographics);
    if sections.is_empty() {
        let _ = writeln!(out, "Aucune donnée démographique disponible.");
        let _ = writeln!(out);
        return;
    }
    for (title, tally) in sections {
        let _ = writeln!(out, "### {title}");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Catégorie | Effectif |");
        let _ = writeln!(out, "| --- | --- |");
        for (bucket, count) in tally {
            let _ = writeln!(out, "| {bucket} | {count} |");
        }
        let _ = writeln!(out);
    }
}

fn push_comparisons(out: &mut String, result: &AnalysisResult) {
    let _ = writeln!(out, "## Évolution Avant/Après");
    let _ = writeln!(out);
    if result.comparisons.is_empty() {
        let _ = writeln!(
            out,
            "Données d'évolution non disponibles (fichiers avant.csv et/ou apres.csv manquants)."
        );
        let _ = writeln!(out);
        return;
    }
    let _ = writeln!(out, "| Indicateur | Avant | Après | Progression |");
    let _ = writeln!(out, "| --- | --- | --- | --- |");
    for (label, comparison) in &result.comparisons {
        let _ = writeln!(
            out,
            "| {label} | {:.2} | {:.2} | {:+.1} |",
            comparison.avant,
            comparison.apres,
            comparison.delta()
        );
    }
    let _ = writeln!(out);
}

fn push_remarks(out: &mut String, result: &AnalysisResult) {
    let _ = writeln!(out, "## Remarques ({})", result.remarques.len());
    let _ = writeln!(out);
    if result.remarques.is_empty() {
        let _ = writeln!(out, "Aucune remarque trouvée.");
    } else {
        for remark in &result.remarques {
            let _ = writeln!(out, "- {} ({})", remark.text, remark.activity.label());
        }
    }
    let _ = writeln!(out);
}

fn push_footer(out: &mut String, generated_at: DateTime<Utc>) {
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "Généré le {}", generated_at.format("%d/%m/%Y %H:%M"));
}

/// Renders one activity's dashboard as a Markdown document.
pub fn render_markdown(result: &AnalysisResult, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    push_title(&mut out, result.activity.label());
    push_kpis(&mut out, result);
    push_participation(&mut out, result);
    push_demographics(&mut out, &result.demographics);
    push_comparisons(&mut out, result);
    push_remarks(&mut out, result);
    push_footer(&mut out, generated_at);
    out
}

/// Renders the cross-activity global view as a Markdown document.
pub fn render_global_markdown(global: &GlobalAnalysis, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    push_title(&mut out, "Vue Globale");
    let _ = writeln!(&mut out, "Participants (toutes activités) : {}", global.total_participants);
    let _ = writeln!(&mut out);
    push_demographics(&mut out, &global.demographics);

    let _ = writeln!(&mut out, "## Comparaison des Activités (Évolution Avant/Après)");
    let _ = writeln!(&mut out);
    if global.comparisons.is_empty() {
        let _ = writeln!(
            &mut out,
            "Aucune donnée de comparaison disponible (données avant/après manquantes)."
        );
        let _ = writeln!(&mut out);
    } else {
        for (label, entries) in &global.comparisons {
            let _ = writeln!(&mut out, "### {label}");
            let _ = writeln!(&mut out);
            let _ = writeln!(&mut out, "| Activité | Avant | Après | Progression |");
            let _ = writeln!(&mut out, "| --- | --- | --- | --- |");
            for entry in entries {
                let _ = writeln!(
                    &mut out,
                    "| {} | {:.2} | {:.2} | {:+.1} |",
                    entry.activity.label(),
                    entry.avant,
                    entry.apres,
                    entry.apres - entry.avant
                );
            }
            let _ = writeln!(&mut out);
        }
    }
    push_footer(&mut out, generated_at);
    out
}
