use crate::pipeline::Analysis;
use crate::report::{format_f64_1, format_percent};

pub fn render_analysis_text(analysis: &Analysis) -> String {
    let mut out = String::new();

    out.push_str("Admission Recommendation Report\n");
    out.push_str("===============================\n\n");

    out.push_str(&format!("Track: {}\n", analysis.track));
    out.push_str(&format!(
        "Composite score: {}\n",
        format_f64_1(analysis.composite_score)
    ));
    out.push_str(&format!(
        "Cumulative percentile: {}\n",
        format_percent(analysis.percentile)
    ));
    out.push_str(&format!("Exam sitting: {}", analysis.sitting_used));
    if analysis.fallback_used {
        if let Some(requested) = analysis.requested_sitting {
            out.push_str(&format!(" (requested {requested} unavailable)"));
        }
    }
    out.push('\n');
    out.push_str(&format!("Cutline year: {}\n\n", analysis.cutline_year));

    if analysis.entries.is_empty() {
        out.push_str("No recommendations for the selected departments.\n");
        return out;
    }

    let header = [
        "#",
        "university",
        "department",
        "appropriate",
        "diff",
        "match",
        "probability",
        "tier",
    ]
    .join("\t");
    out.push_str(&header);
    out.push('\n');
    for (i, e) in analysis.entries.iter().enumerate() {
        let row = [
            (i + 1).to_string(),
            e.university_name.clone(),
            e.department_name.clone(),
            format_f64_1(e.appropriate_percentile),
            format_f64_1(e.nubaek_difference),
            format_f64_1(e.match_score),
            format_percent(e.pass_probability),
            format!("{} ({})", e.color_tier.label(), e.color_tier.css_class()),
        ]
        .join("\t");
        out.push_str(&row);
        out.push('\n');
    }

    out.push('\n');
    let counts = analysis
        .tier_counts
        .iter()
        .map(|c| format!("{}={}", c.tier.css_class(), c.count))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("Tiers: {counts}\n"));
    out
}
