use crate::model::cutline::CutlineRecord;
use crate::model::profile::ScoringProfile;
use crate::model::recommendation::{AdmissionScore, ProbabilityModel};
use crate::model::tiers::ColorTier;
use crate::pipeline::stage3_cutline::{CutlineStats, ladder_probability};

/// Admission probability (0..=100) and tier for a student percentile against one cutline.
///
/// Primary model: `(1 - Phi(z)) * 100` with `z = (student - expected) / sigma`. Lower percentile
/// is stronger, so a negative z gives a high probability. Falls back to the step ladder when sigma
/// is unusable or z is not finite.
pub fn score(
    student_percentile: f64,
    cutline: &CutlineRecord,
    profile: &ScoringProfile,
) -> AdmissionScore {
    let stats = CutlineStats::from_record(cutline, profile.z_anchor);
    let difference = student_percentile - stats.expected_percentile;

    let (probability, model) = match stats.sigma.map(|sigma| difference / sigma) {
        Some(z) if z.is_finite() => (normal_probability(z), ProbabilityModel::Normal),
        _ => {
            tracing::debug!(
                university = %cutline.university_name,
                department = %cutline.department_name,
                difference,
                "cutline spread unusable; using step ladder"
            );
            (ladder_probability(difference), ProbabilityModel::Ladder)
        }
    };

    AdmissionScore {
        probability,
        tier: ColorTier::from_probability(probability, &profile.tiers),
        model,
    }
}

fn normal_probability(z: f64) -> f64 {
    ((1.0 - normal_cdf(z)) * 100.0).clamp(0.0, 100.0)
}

/// Standard normal CDF, Abramowitz & Stegun 26.2.17 (|error| < 7.5e-8).
pub fn normal_cdf(x: f64) -> f64 {
    if x < -8.0 {
        return 0.0;
    }
    if x > 8.0 {
        return 1.0;
    }
    let t = 1.0 / (1.0 + 0.231_641_9 * x.abs());
    let density = 0.398_942_280_401_432_7 * (-x * x / 2.0).exp();
    let poly = t
        * (0.319_381_530
            + t * (-0.356_563_782 + t * (1.781_477_937 + t * (-1.821_255_978 + t * 1.330_274_429))));
    let tail = density * poly;
    if x >= 0.0 { 1.0 - tail } else { tail }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_probability.rs"]
mod tests;
