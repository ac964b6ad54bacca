pub mod stage1_aggregate;
pub mod stage2_interpolate;
pub mod stage3_cutline;
pub mod stage4_probability;
pub mod stage5_rank;

use serde::Serialize;
use thiserror::Error;

use crate::model::cutline::{CutlineRecord, select_cutlines};
use crate::model::lookup::PercentileLookupTable;
use crate::model::profile::ScoringProfile;
use crate::model::recommendation::RecommendationEntry;
use crate::model::scores::{ExamSitting, ScoreVector, Track};
use crate::model::tiers::{ColorTier, tier_order};

use stage1_aggregate::aggregate;
use stage2_interpolate::interpolate;
use stage5_rank::rank;

/// Reference data missing for the request. The only failure the scoring pipeline reports; callers
/// may retry against another sitting or year.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("no usable percentile rows for {track} track in exam sitting {sitting}")]
    NoPercentileRows { track: Track, sitting: ExamSitting },
    #[error("no percentile lookup tables available")]
    NoLookupTables,
    #[error("no cutline records for {track} track in {year}")]
    NoCutlines { track: Track, year: u16 },
}

#[derive(Debug, Clone)]
pub struct AnalysisRequest<'a> {
    pub scores: &'a ScoreVector,
    pub track: Track,
    pub cutline_year: u16,
    pub cutlines: &'a [CutlineRecord],
    pub preferred_departments: &'a [String],
    pub profile: &'a ScoringProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierCount {
    pub tier: ColorTier,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub composite_score: f64,
    pub percentile: f64,
    pub track: Track,
    pub sitting_used: ExamSitting,
    pub requested_sitting: Option<ExamSitting>,
    pub fallback_used: bool,
    pub cutline_year: u16,
    pub entries: Vec<RecommendationEntry>,
    pub tier_counts: Vec<TierCount>,
}

/// Composite score and percentile only.
pub fn percentile_for(
    scores: &ScoreVector,
    table: &PercentileLookupTable,
    track: Track,
) -> Result<(f64, f64), AnalysisError> {
    let composite = aggregate(scores);
    let percentile = interpolate(composite, table, track).ok_or(AnalysisError::NoPercentileRows {
        track,
        sitting: table.sitting,
    })?;
    Ok((composite, percentile))
}

/// Runs the whole pipeline against one lookup table.
pub fn run_analysis(
    request: &AnalysisRequest<'_>,
    table: &PercentileLookupTable,
) -> Result<Analysis, AnalysisError> {
    let (composite_score, percentile) = percentile_for(request.scores, table, request.track)?;
    tracing::info!(
        composite_score,
        percentile,
        sitting = %table.sitting,
        track = %request.track,
        "student percentile resolved"
    );

    let cutlines = select_cutlines(request.cutlines, request.track, request.cutline_year);
    if cutlines.is_empty() {
        return Err(AnalysisError::NoCutlines {
            track: request.track,
            year: request.cutline_year,
        });
    }

    let entries = rank(
        &cutlines,
        percentile,
        request.preferred_departments,
        request.profile,
    );
    tracing::info!(
        candidates = cutlines.len(),
        recommended = entries.len(),
        "ranking complete"
    );

    let tier_counts = count_tiers(&entries);
    Ok(Analysis {
        composite_score,
        percentile,
        track: request.track,
        sitting_used: table.sitting,
        requested_sitting: None,
        fallback_used: false,
        cutline_year: request.cutline_year,
        entries,
        tier_counts,
    })
}

/// Composite score and percentile together with the sitting that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileResolution {
    pub composite_score: f64,
    pub percentile: f64,
    pub sitting_used: ExamSitting,
    pub requested_sitting: ExamSitting,
    pub fallback_used: bool,
}

/// `percentile_for` over `tables` (given in fallback order), moving on while a sitting has no
/// rows for the track.
pub fn percentile_with_fallback<'t>(
    scores: &ScoreVector,
    tables: impl IntoIterator<Item = &'t PercentileLookupTable>,
    requested: ExamSitting,
    track: Track,
) -> Result<PercentileResolution, AnalysisError> {
    let ((composite_score, percentile), table) =
        first_usable_sitting(tables, requested, |table| percentile_for(scores, table, track))?;
    Ok(PercentileResolution {
        composite_score,
        percentile,
        sitting_used: table.sitting,
        requested_sitting: requested,
        fallback_used: table.sitting != requested,
    })
}

/// `run_analysis` over `tables` (given in fallback order, requested sitting first when present),
/// moving on only while a sitting has no rows for the track.
pub fn run_analysis_with_fallback<'t>(
    request: &AnalysisRequest<'_>,
    tables: impl IntoIterator<Item = &'t PercentileLookupTable>,
    requested: ExamSitting,
) -> Result<Analysis, AnalysisError> {
    let (mut analysis, table) =
        first_usable_sitting(tables, requested, |table| run_analysis(request, table))?;
    analysis.requested_sitting = Some(requested);
    analysis.fallback_used = table.sitting != requested;
    Ok(analysis)
}

fn first_usable_sitting<'t, T>(
    tables: impl IntoIterator<Item = &'t PercentileLookupTable>,
    requested: ExamSitting,
    mut attempt: impl FnMut(&'t PercentileLookupTable) -> Result<T, AnalysisError>,
) -> Result<(T, &'t PercentileLookupTable), AnalysisError> {
    let mut last_err = AnalysisError::NoLookupTables;
    for table in tables {
        if table.sitting != requested {
            tracing::warn!(
                requested = %requested,
                using = %table.sitting,
                "falling back to another exam sitting"
            );
        }
        match attempt(table) {
            Ok(out) => return Ok((out, table)),
            Err(err @ AnalysisError::NoPercentileRows { .. }) => {
                tracing::warn!("{err}");
                last_err = err;
            }
            Err(err) => return Err(err),
        }
    }
    Err(last_err)
}

fn count_tiers(entries: &[RecommendationEntry]) -> Vec<TierCount> {
    tier_order()
        .iter()
        .map(|&tier| TierCount {
            tier,
            count: entries.iter().filter(|e| e.color_tier == tier).count(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
