use serde::Serialize;

use crate::model::recommendation::RecommendationEntry;
use crate::pipeline::{Analysis, TierCount};

#[derive(Serialize)]
struct AnalysisDocument<'a> {
    tool: &'static str,
    version: &'static str,
    student: StudentSummary<'a>,
    tier_counts: &'a [TierCount],
    recommendations: Vec<EntryView<'a>>,
}

#[derive(Serialize)]
struct StudentSummary<'a> {
    composite_score: f64,
    percentile: f64,
    track: &'a str,
    sitting_used: String,
    requested_sitting: Option<String>,
    fallback_used: bool,
    cutline_year: u16,
}

#[derive(Serialize)]
struct EntryView<'a> {
    #[serde(flatten)]
    entry: &'a RecommendationEntry,
    tier_label: &'static str,
    css_class: &'static str,
}

pub fn render_analysis_json(analysis: &Analysis) -> Result<String, serde_json::Error> {
    let doc = AnalysisDocument {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        student: StudentSummary {
            composite_score: analysis.composite_score,
            percentile: analysis.percentile,
            track: analysis.track.as_str(),
            sitting_used: analysis.sitting_used.to_string(),
            requested_sitting: analysis.requested_sitting.map(|s| s.to_string()),
            fallback_used: analysis.fallback_used,
            cutline_year: analysis.cutline_year,
        },
        tier_counts: &analysis.tier_counts,
        recommendations: analysis
            .entries
            .iter()
            .map(|entry| EntryView {
                entry,
                tier_label: entry.color_tier.label(),
                css_class: entry.color_tier.css_class(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc)
}
