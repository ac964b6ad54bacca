use serde::{Deserialize, Serialize};

use crate::model::scores::{ExamSitting, Track};

/// One reference row: a cumulative percentile and the reference score reaching it on each track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileRow {
    pub cumulative_percentile: f64,
    #[serde(default)]
    pub reference_score_science: Option<f64>,
    #[serde(default)]
    pub reference_score_liberal: Option<f64>,
}

impl PercentileRow {
    pub fn score_for(&self, track: Track) -> Option<f64> {
        match track {
            Track::Science => self.reference_score_science,
            Track::Liberal => self.reference_score_liberal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileLookupTable {
    pub sitting: ExamSitting,
    pub rows: Vec<PercentileRow>,
}

impl PercentileLookupTable {
    pub fn new(sitting: ExamSitting, rows: Vec<PercentileRow>) -> Self {
        Self { sitting, rows }
    }

    pub fn has_track(&self, track: Track) -> bool {
        self.rows.iter().any(|r| {
            r.score_for(track).is_some_and(f64::is_finite) && r.cumulative_percentile.is_finite()
        })
    }
}
