//! Command implementations.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, Utc};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use impact_core::{analyze, analyze_global};
use impact_ingest::{append_response, discover_activities, load_dataset, phase_file};
use impact_model::{ActivityType, AnalysisResult, Phase};
use impact_report::{
    render_global_json, render_global_markdown, render_json, render_markdown, write_report,
};
use impact_standards::{missing_required, questions_for};
use impact_transform::build_row;

use impact_cli::answers::answers_from_json;

use crate::cli::{DashboardArgs, ReportArgs, ReportFormatArg, SubmitArgs};
use crate::summary::{apply_table_style, print_activity_dashboard, print_global_dashboard};

fn parse_activity(raw: &str) -> Result<ActivityType> {
    raw.parse::<ActivityType>()
        .map_err(|message| anyhow!(message))
}

fn parse_phase(raw: &str) -> Result<Phase> {
    raw.parse::<Phase>().map_err(|message| anyhow!(message))
}

fn ensure_project_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        bail!(
            "project directory not found: {} (select or create it first)",
            path.display()
        );
    }
    Ok(())
}

pub fn run_submit(args: &SubmitArgs) -> Result<()> {
    let activity = parse_activity(&args.activity)?;
    let phase = parse_phase(&args.phase)?;
    ensure_project_dir(&args.project_dir)?;
    let span = info_span!("submit", activity = %activity, phase = %phase);
    let _guard = span.enter();

    let raw = std::fs::read_to_string(&args.answers)
        .with_context(|| format!("read answers file {}", args.answers.display()))?;
    let answers = answers_from_json(&raw)?;

    let missing = missing_required(activity, phase, |id| answers.has_answer(id));
    if !missing.is_empty() {
        if args.allow_incomplete {
            warn!(missing = ?missing, "required questions unanswered");
        } else {
            bail!(
                "required questions unanswered: {} (use --allow-incomplete to record anyway)",
                missing.join(", ")
            );
        }
    }

    let record = build_row(activity, phase, &answers, Utc::now());
    append_response(&args.project_dir, activity, phase, &record)?;
    let path = phase_file(&args.project_dir, activity, phase);
    info!(path = %path.display(), "submission recorded");
    println!("Réponse enregistrée : {}", path.display());
    Ok(())
}

fn analyze_one(project: &Path, activity: ActivityType, now: DateTime<Utc>) -> Result<AnalysisResult> {
    let dataset = load_dataset(project, activity)?;
    Ok(analyze(&dataset, activity, now))
}

/// Analyzes every activity with recorded data, keeping those that have at
/// least one participant.
fn analyze_all(project: &Path, now: DateTime<Utc>) -> Result<Vec<AnalysisResult>> {
    let span = info_span!("analyze", project = %project.display());
    let _guard = span.enter();
    let mut results = Vec::new();
    for activity in discover_activities(project)? {
        let result = analyze_one(project, activity, now)?;
        if result.has_participants() {
            results.push(result);
        }
    }
    info!(
        activity_count = results.len(),
        participant_count = results
            .iter()
            .map(|result| result.total_participants)
            .sum::<usize>(),
        "analysis complete"
    );
    Ok(results)
}

pub fn run_dashboard(args: &DashboardArgs) -> Result<()> {
    ensure_project_dir(&args.project_dir)?;
    let now = Utc::now();

    if let Some(key) = &args.activity {
        let activity = parse_activity(key)?;
        let result = analyze_one(&args.project_dir, activity, now)?;
        if args.json {
            println!("{}", render_json(&result)?);
        } else if result.has_participants() {
            print_activity_dashboard(&result);
        } else {
            println!("Pas de données pour {}", activity.label());
        }
        return Ok(());
    }

    let results = analyze_all(&args.project_dir, now)?;
    let global = analyze_global(&results);
    if args.json {
        let mut activities = serde_json::Map::new();
        for result in &results {
            activities.insert(
                result.activity.as_str().to_string(),
                serde_json::to_value(result).context("serialize activity payload")?,
            );
        }
        let payload = serde_json::json!({
            "activities": activities,
            "global": global,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if results.is_empty() {
        println!("Aucune donnée disponible.");
    } else {
        print_global_dashboard(&global, &results);
    }
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<()> {
    ensure_project_dir(&args.project_dir)?;
    let now = Utc::now();

    let contents = if let Some(key) = &args.activity {
        let activity = parse_activity(key)?;
        let result = analyze_one(&args.project_dir, activity, now)?;
        match args.format {
            ReportFormatArg::Markdown => render_markdown(&result, now),
            ReportFormatArg::Json => render_json(&result)?,
        }
    } else {
        let results = analyze_all(&args.project_dir, now)?;
        let global = analyze_global(&results);
        match args.format {
            ReportFormatArg::Markdown => render_global_markdown(&global, now),
            ReportFormatArg::Json => render_global_json(&global)?,
        }
    };

    write_report(&args.output, &contents)?;
    info!(path = %args.output.display(), "report written");
    println!("Rapport écrit : {}", args.output.display());
    Ok(())
}

pub fn run_activities() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        "Activité",
        "Libellé",
        "Questions avant",
        "Questions après",
        "Questions suivi 3 mois",
        "Questions suivi 6 mois",
    ]);
    apply_table_style(&mut table);
    for activity in ActivityType::ALL {
        let mut row = vec![activity.as_str().to_string(), activity.label().to_string()];
        for phase in Phase::ALL {
            row.push(questions_for(activity, phase).len().to_string());
        }
        table.add_row(row);
    }
    println!("{table}");
    Ok(())
}
