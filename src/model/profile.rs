use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub green: f64,
    pub light_green: f64,
    pub yellow: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            green: 80.0,
            light_green: 50.0,
            yellow: 20.0,
        }
    }
}

/// Tunable constants of the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringProfile {
    /// z-value at which `appropriate_percentile` sits relative to `expected_percentile`.
    pub z_anchor: f64,
    pub per_department_cap: usize,
    pub global_cap: usize,
    /// Match-score points lost per percentile point of distance.
    pub match_decay_per_point: f64,
    pub tiers: TierThresholds,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            z_anchor: 0.84,
            per_department_cap: 6,
            global_cap: 18,
            match_decay_per_point: 10.0,
            tiers: TierThresholds::default(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.z_anchor.is_finite() && self.z_anchor > 0.0) {
            return Err(format!("z_anchor must be positive, got {}", self.z_anchor));
        }
        if !(self.match_decay_per_point.is_finite() && self.match_decay_per_point >= 0.0) {
            return Err(format!(
                "match_decay_per_point must be non-negative, got {}",
                self.match_decay_per_point
            ));
        }
        let t = &self.tiers;
        if !(t.green >= t.light_green && t.light_green >= t.yellow) {
            return Err(format!(
                "tier thresholds must be descending (green {} >= light_green {} >= yellow {})",
                t.green, t.light_green, t.yellow
            ));
        }
        Ok(())
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
