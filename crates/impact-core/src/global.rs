//! Cross-activity aggregation for the global dashboard view.

use impact_model::{ActivityComparison, AnalysisResult, GlobalAnalysis};

/// Combines per-activity analyses into the global view: summed participant
/// counts, merged demographic tallies, and one before/after series per
/// comparison indicator.
///
/// Activities with zero participants are excluded entirely — they neither
/// count toward the total nor appear as zero bars in the comparison chart.
pub fn analyze_global(results: &[AnalysisResult]) -> GlobalAnalysis {
    let mut global = GlobalAnalysis::default();
    for result in results.iter().filter(|result| result.has_participants()) {
        global.total_participants += result.total_participants;
        global.demographics.merge(&result.demographics);
        for (label, comparison) in &result.comparisons {
            global
                .comparisons
                .entry(label.clone())
                .or_default()
                .push(ActivityComparison {
                    activity: result.activity,
                    avant: comparison.avant,
                    apres: comparison.apres,
                });
        }
    }
    global
}
