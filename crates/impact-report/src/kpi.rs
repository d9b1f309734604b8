//! KPI card labels and value formatting shared by the terminal dashboard
//! and the exported report.

use impact_model::TransversalKpis;

/// One rendered KPI card: label plus formatted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiRow {
    pub label: &'static str,
    pub value: String,
}

fn row(label: &'static str, value: String) -> KpiRow {
    KpiRow { label, value }
}

/// Renders the transversal KPI block in dashboard card order.
pub fn kpi_rows(kpis: &TransversalKpis) -> Vec<KpiRow> {
    vec![
        row("Satisfaction Moy.", format!("{:.1}", kpis.satisfaction_moyenne)),
        row("NPS", format!("{:.1}%", kpis.nps_score)),
        row("Autonomie", format!("{:+.1}", kpis.autonomie.delta())),
        row("Confiance en soi", format!("{:+.1}", kpis.confiance.delta())),
        row(
            "Taux Satisfaction (≥4/5)",
            format!("{:.1}%", kpis.satisfaction_rate),
        ),
        row(
            "Données Manquantes",
            format!("{:.1}%", kpis.non_response_rate),
        ),
        row(
            "Ancienneté Données (j)",
            format!("{:.1}j", kpis.data_age_days),
        ),
        row(
            "Engagement Qualitatif",
            format!("{:.1}%", kpis.quality_engagement_rate),
        ),
        row("Profondeur Remarques", format!("{:.0} car.", kpis.comment_depth)),
    ]
}
