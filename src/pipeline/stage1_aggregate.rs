use crate::model::scores::ScoreVector;

/// Composite reference score: the sum of the four standard scores.
///
/// Negative or non-finite subject scores are clamped to 0 so a bad upstream record cannot pull
/// the composite below the table floor.
pub fn aggregate(scores: &ScoreVector) -> f64 {
    let mut total = 0.0;
    for (subject, value) in scores.standard_scores() {
        total += clamp_subject(subject, value);
    }
    total
}

fn clamp_subject(subject: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        return value;
    }
    tracing::warn!(subject, value, "standard score is negative or non-finite; counting it as 0");
    0.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_aggregate.rs"]
mod tests;
