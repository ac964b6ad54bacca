use serde::Serialize;

use crate::model::scores::Track;
use crate::model::tiers::ColorTier;

/// Which model produced a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityModel {
    Normal,
    Ladder,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdmissionScore {
    pub probability: f64,
    pub tier: ColorTier,
    pub model: ProbabilityModel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationEntry {
    pub university_name: String,
    pub department_name: String,
    pub exam_track: Track,
    pub exam_year: u16,
    pub appropriate_percentile: f64,
    pub expected_percentile: f64,
    pub minimum_percentile: f64,
    pub student_percentile: f64,
    pub nubaek_difference: f64,
    pub match_score: f64,
    pub pass_probability: f64,
    pub color_tier: ColorTier,
    pub probability_model: ProbabilityModel,
}
