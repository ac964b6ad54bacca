use crate::model::lookup::PercentileLookupTable;
use crate::model::scores::Track;

/// Maps a composite score to a cumulative percentile for `track`.
///
/// Rows missing the track column (or carrying non-finite values) are ignored and the rest are
/// sorted by reference score before lookup. Scores outside the table clamp to the nearest end row;
/// scores inside are linearly interpolated between the bracketing rows. Returns `None` when the
/// table has no usable row for the track.
pub fn interpolate(composite_score: f64, table: &PercentileLookupTable, track: Track) -> Option<f64> {
    let mut points = track_points(table, track);
    if points.is_empty() {
        return None;
    }
    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (low_score, low_pct) = points[0];
    let (high_score, high_pct) = points[points.len() - 1];
    // NaN composite clamps low
    if composite_score.is_nan() || composite_score <= low_score {
        return Some(low_pct);
    }
    if composite_score >= high_score {
        return Some(high_pct);
    }

    // low < composite < high, so idx lands in 1..len
    let idx = points.partition_point(|&(score, _)| score <= composite_score);
    let (score_a, pct_a) = points[idx - 1];
    let (score_b, pct_b) = points[idx];
    Some(lerp(composite_score, score_a, pct_a, score_b, pct_b))
}

fn track_points(table: &PercentileLookupTable, track: Track) -> Vec<(f64, f64)> {
    table
        .rows
        .iter()
        .filter_map(|row| {
            let score = row.score_for(track)?;
            if score.is_finite() && row.cumulative_percentile.is_finite() {
                Some((score, row.cumulative_percentile))
            } else {
                None
            }
        })
        .collect()
}

fn lerp(x: f64, score_a: f64, pct_a: f64, score_b: f64, pct_b: f64) -> f64 {
    let span = score_b - score_a;
    if span == 0.0 {
        return pct_a;
    }
    pct_a + (pct_b - pct_a) * (x - score_a) / span
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_interpolate.rs"]
mod tests;
