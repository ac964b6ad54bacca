pub mod cutline;
pub mod lookup;
pub mod profile;
pub mod recommendation;
pub mod scores;
pub mod tiers;

pub use cutline::CutlineRecord;
pub use lookup::{PercentileLookupTable, PercentileRow};
pub use profile::{ScoringProfile, TierThresholds};
pub use recommendation::{AdmissionScore, ProbabilityModel, RecommendationEntry};
pub use scores::{ExamSitting, ScoreVector, SubjectScore, Track};
pub use tiers::ColorTier;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
