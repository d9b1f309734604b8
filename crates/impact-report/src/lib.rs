//! Report export for the impact dashboard.
//!
//! Renders an analysis payload (or the cross-activity aggregate) as a
//! document the way the dashboard displays it: Markdown for humans, JSON
//! for downstream tooling.

mod kpi;
mod markdown;

use std::path::Path;

use anyhow::{Context, Result};

use impact_model::{AnalysisResult, GlobalAnalysis};

pub use kpi::{KpiRow, kpi_rows};
pub use markdown::{demographic_sections, render_global_markdown, render_markdown};

/// Serializes one activity's analysis as pretty-printed JSON.
pub fn render_json(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("serialize analysis payload")
}

/// Serializes the global aggregate as pretty-printed JSON.
pub fn render_global_json(global: &GlobalAnalysis) -> Result<String> {
    serde_json::to_string_pretty(global).context("serialize global payload")
}

/// Writes a rendered report, creating parent directories as needed.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create report directory {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write report {}", path.display()))
}
