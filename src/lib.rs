//! Admission-probability scoring for university counseling.
//!
//! Raw subject scores are summed into a composite, mapped to a cumulative percentile (nubaek,
//! lower is stronger) through a reference table, then compared against each program's historical
//! cutline to produce a pass probability, a color tier and a ranked recommendation list.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::{
    AdmissionScore, ColorTier, CutlineRecord, ExamSitting, PercentileLookupTable, PercentileRow,
    ProbabilityModel, RecommendationEntry, ScoreVector, ScoringProfile, SubjectScore, Track,
};
pub use pipeline::{
    Analysis, AnalysisError, AnalysisRequest, PercentileResolution, percentile_with_fallback,
    run_analysis, run_analysis_with_fallback,
};
