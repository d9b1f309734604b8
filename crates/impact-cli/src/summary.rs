//! Terminal rendering of the dashboard.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use impact_model::{AnalysisResult, Demographics, GlobalAnalysis, Phase, Remark};
use impact_report::{demographic_sections, kpi_rows};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn print_kpi_table(result: &AnalysisResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Indicateur"), header_cell("Valeur")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in kpi_rows(&result.transversal) {
        table.add_row(vec![Cell::new(row.label), Cell::new(row.value)]);
    }
    println!("{table}");
}

fn print_participation_table(result: &AnalysisResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Phase"), header_cell("Réponses")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for phase in Phase::ALL {
        let count = result
            .participants_by_phase
            .get(&phase)
            .copied()
            .unwrap_or(0);
        table.add_row(vec![Cell::new(phase.label()), Cell::new(count)]);
    }
    println!("{table}");
}

fn print_demographics(demographics: &Demographics) {
    let sections = demographic_sections(demographics);
    if sections.is_empty() {
        println!("Aucune donnée démographique disponible.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Attribut"),
        header_cell("Catégorie"),
        header_cell("Effectif"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (title, tally) in sections {
        for (bucket, count) in tally {
            table.add_row(vec![Cell::new(title), Cell::new(bucket), Cell::new(count)]);
        }
    }
    println!("{table}");
}

fn print_remarks(remarks: &[Remark]) {
    println!("Remarques ({})", remarks.len());
    if remarks.is_empty() {
        println!("Aucune remarque trouvée.");
        return;
    }
    for remark in remarks {
        println!("- {} ({})", remark.text, remark.activity.label());
    }
}

/// Prints the full dashboard for one activity.
pub fn print_activity_dashboard(result: &AnalysisResult) {
    println!("Activité : {}", result.activity.label());
    println!("Participants : {}", result.total_participants);
    println!();
    print_kpi_table(result);
    println!();
    print_participation_table(result);
    println!();
    print_demographics(&result.demographics);
    println!();
    if result.comparisons.is_empty() {
        println!(
            "Données d'évolution non disponibles (fichiers avant.csv et/ou apres.csv manquants)."
        );
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Indicateur"),
            header_cell("Avant"),
            header_cell("Après"),
            header_cell("Progression"),
        ]);
        apply_table_style(&mut table);
        for index in 1..4 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        for (label, comparison) in &result.comparisons {
            table.add_row(vec![
                Cell::new(label),
                Cell::new(format!("{:.2}", comparison.avant)),
                Cell::new(format!("{:.2}", comparison.apres)),
                Cell::new(format!("{:+.1}", comparison.delta())),
            ]);
        }
        println!("{table}");
    }
    println!();
    print_remarks(&result.remarques);
}

/// Prints the cross-activity global view.
pub fn print_global_dashboard(global: &GlobalAnalysis, activities: &[AnalysisResult]) {
    println!("Vue Globale (Comparaison)");
    println!(
        "Participants (toutes activités) : {}",
        global.total_participants
    );
    println!();

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Activité"),
        header_cell("Participants"),
        header_cell("Satisfaction Moy."),
        header_cell("NPS"),
        header_cell("Engagement"),
    ]);
    apply_table_style(&mut table);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for result in activities {
        table.add_row(vec![
            Cell::new(result.activity.label()),
            Cell::new(result.total_participants),
            Cell::new(format!("{:.1}", result.transversal.satisfaction_moyenne)),
            Cell::new(format!("{:.1}%", result.transversal.nps_score)),
            Cell::new(format!(
                "{:.1}%",
                result.transversal.quality_engagement_rate
            )),
        ]);
    }
    println!("{table}");
    println!();

    print_demographics(&global.demographics);
    println!();

    if global.comparisons.is_empty() {
        println!("Aucune donnée de comparaison disponible (données avant/après manquantes).");
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Indicateur"),
            header_cell("Activité"),
            header_cell("Avant"),
            header_cell("Après"),
            header_cell("Progression"),
        ]);
        apply_table_style(&mut table);
        for index in 2..5 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        for (label, entries) in &global.comparisons {
            for entry in entries {
                table.add_row(vec![
                    Cell::new(label),
                    Cell::new(entry.activity.label()),
                    Cell::new(format!("{:.2}", entry.avant)),
                    Cell::new(format!("{:.2}", entry.apres)),
                    Cell::new(format!("{:+.1}", entry.apres - entry.avant)),
                ]);
            }
        }
        println!("{table}");
    }
    println!();

    let remarks: Vec<Remark> = activities
        .iter()
        .flat_map(|result| result.remarques.iter().cloned())
        .collect();
    print_remarks(&remarks);
}
