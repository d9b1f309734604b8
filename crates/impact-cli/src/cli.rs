//! CLI argument definitions for Impact Studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "impact-studio",
    version,
    about = "Impact Studio - Multi-activity survey collection and analytics",
    long_about = "Collect multi-phase survey responses for social-program activities,\n\
                  store them as per-activity CSV files in a project directory, and\n\
                  compute the aggregated impact dashboard (KPIs, demographics,\n\
                  before/after comparisons, remarks)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record one questionnaire submission into the project's CSV store.
    Submit(SubmitArgs),

    /// Analyze collected responses and print the dashboard.
    Dashboard(DashboardArgs),

    /// Export the dashboard as a report document.
    Report(ReportArgs),

    /// List the activity catalog and its questionnaires.
    Activities,
}

#[derive(Parser)]
pub struct SubmitArgs {
    /// Path to the project directory holding the CSV store.
    #[arg(value_name = "PROJECT_DIR")]
    pub project_dir: PathBuf,

    /// Activity type key (e.g. inclusion_numerique, secourisme).
    #[arg(long = "activity", value_name = "ACTIVITY")]
    pub activity: String,

    /// Questionnaire phase key (avant, apres, suivi_3mois, suivi_6mois).
    #[arg(long = "phase", value_name = "PHASE")]
    pub phase: String,

    /// JSON file mapping field names to submitted values.
    #[arg(long = "answers", value_name = "FILE")]
    pub answers: PathBuf,

    /// Record the submission even when required questions are unanswered.
    #[arg(long = "allow-incomplete")]
    pub allow_incomplete: bool,
}

#[derive(Parser)]
pub struct DashboardArgs {
    /// Path to the project directory holding the CSV store.
    #[arg(value_name = "PROJECT_DIR")]
    pub project_dir: PathBuf,

    /// Restrict the dashboard to one activity (default: global view over
    /// every activity with data).
    #[arg(long = "activity", value_name = "ACTIVITY")]
    pub activity: Option<String>,

    /// Print the serialized analysis payload instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the project directory holding the CSV store.
    #[arg(value_name = "PROJECT_DIR")]
    pub project_dir: PathBuf,

    /// Restrict the report to one activity (default: global view).
    #[arg(long = "activity", value_name = "ACTIVITY")]
    pub activity: Option<String>,

    /// Destination file for the rendered report.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Report format to render.
    #[arg(long = "format", value_enum, default_value = "markdown")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Markdown,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
