use serde::{Deserialize, Serialize};

use crate::model::scores::Track;

/// Historical admission-percentile distribution of one program for one track and year.
///
/// No ordering is enforced between the three percentiles; `appropriate_percentile` may equal
/// `expected_percentile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutlineRecord {
    pub university_name: String,
    pub department_name: String,
    pub exam_track: Track,
    pub exam_year: u16,
    pub appropriate_percentile: f64,
    pub expected_percentile: f64,
    pub minimum_percentile: f64,
}

pub fn select_cutlines(records: &[CutlineRecord], track: Track, year: u16) -> Vec<CutlineRecord> {
    records
        .iter()
        .filter(|r| r.exam_track == track && r.exam_year == year)
        .cloned()
        .collect()
}
