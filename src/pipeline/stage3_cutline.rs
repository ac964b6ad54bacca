use crate::model::cutline::CutlineRecord;

/// z-value of the 80th percentile; `appropriate_percentile` is read as that point of the cutline's
/// uncertainty distribution.
pub const DEFAULT_Z_ANCHOR: f64 = 0.84;

/// `|appropriate - expected| / 0.84`.
pub fn estimate_std_dev(appropriate_percentile: f64, expected_percentile: f64) -> f64 {
    estimate_std_dev_anchored(appropriate_percentile, expected_percentile, DEFAULT_Z_ANCHOR)
}

pub fn estimate_std_dev_anchored(
    appropriate_percentile: f64,
    expected_percentile: f64,
    z_anchor: f64,
) -> f64 {
    (appropriate_percentile - expected_percentile).abs() / z_anchor
}

/// Distribution descriptor of one cutline: centre and spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutlineStats {
    pub expected_percentile: f64,
    /// `None` when the estimated sigma is zero, negative or non-finite.
    pub sigma: Option<f64>,
}

impl CutlineStats {
    pub fn from_record(record: &CutlineRecord, z_anchor: f64) -> Self {
        let sigma = estimate_std_dev_anchored(
            record.appropriate_percentile,
            record.expected_percentile,
            z_anchor,
        );
        Self {
            expected_percentile: record.expected_percentile,
            sigma: usable_sigma(sigma),
        }
    }
}

pub fn usable_sigma(sigma: f64) -> Option<f64> {
    if sigma.is_finite() && sigma > 0.0 {
        Some(sigma)
    } else {
        None
    }
}

/// Step probability for cutlines whose spread cannot be estimated.
///
/// `difference` is `student_percentile - expected_percentile`; negative means the student ranks
/// above the cutline. Only used when sigma is unusable, never blended with the normal model.
pub fn ladder_probability(difference: f64) -> f64 {
    if difference <= -5.0 {
        90.0
    } else if difference <= -2.0 {
        70.0
    } else if difference <= 0.0 {
        50.0
    } else if difference <= 2.0 {
        30.0
    } else if difference <= 5.0 {
        15.0
    } else {
        5.0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_cutline.rs"]
mod tests;
