use super::*;
use crate::model::lookup::PercentileRow;

fn science_row(pct: f64, score: f64) -> PercentileRow {
    PercentileRow {
        cumulative_percentile: pct,
        reference_score_science: Some(score),
        reference_score_liberal: None,
    }
}

fn table(year: u16, month: u8, rows: Vec<PercentileRow>) -> PercentileLookupTable {
    PercentileLookupTable::new(ExamSitting::new(year, month), rows)
}

fn cutline(univ: &str, dept: &str, appropriate: f64, expected: f64) -> CutlineRecord {
    CutlineRecord {
        university_name: univ.to_string(),
        department_name: dept.to_string(),
        exam_track: Track::Science,
        exam_year: 2024,
        appropriate_percentile: appropriate,
        expected_percentile: expected,
        minimum_percentile: appropriate + 5.0,
    }
}

struct Fixture {
    scores: ScoreVector,
    cutlines: Vec<CutlineRecord>,
    departments: Vec<String>,
    profile: ScoringProfile,
}

impl Fixture {
    fn new() -> Self {
        Self {
            scores: ScoreVector::from_standard(130.0, 135.0, 125.0, 120.0),
            cutlines: vec![cutline("Yonsei", "CS", 15.0, 12.0)],
            departments: vec!["CS".to_string()],
            profile: ScoringProfile::default_v1(),
        }
    }

    fn request(&self) -> AnalysisRequest<'_> {
        AnalysisRequest {
            scores: &self.scores,
            track: Track::Science,
            cutline_year: 2024,
            cutlines: &self.cutlines,
            preferred_departments: &self.departments,
            profile: &self.profile,
        }
    }
}

fn bracketing_table(year: u16, month: u8) -> PercentileLookupTable {
    table(
        year,
        month,
        vec![science_row(12.0, 500.0), science_row(10.0, 520.0)],
    )
}

#[test]
fn test_end_to_end_reference_scenario() {
    let fx = Fixture::new();
    let analysis = run_analysis(&fx.request(), &bracketing_table(2024, 6)).unwrap();

    assert_eq!(analysis.composite_score, 510.0);
    assert_eq!(analysis.percentile, 11.0);
    assert_eq!(analysis.entries.len(), 1);

    let entry = &analysis.entries[0];
    assert!((entry.pass_probability - 61.0).abs() < 0.1);
    assert_eq!(entry.color_tier, ColorTier::LightGreen);
    assert_eq!(entry.nubaek_difference, 4.0);
    assert_eq!(entry.match_score, 60.0);

    let light_green = analysis
        .tier_counts
        .iter()
        .find(|c| c.tier == ColorTier::LightGreen)
        .unwrap();
    assert_eq!(light_green.count, 1);
    assert_eq!(analysis.tier_counts.len(), 4);
}

#[test]
fn test_missing_track_is_data_unavailable() {
    let fx = Fixture::new();
    let liberal_only = table(
        2024,
        6,
        vec![PercentileRow {
            cumulative_percentile: 10.0,
            reference_score_science: None,
            reference_score_liberal: Some(500.0),
        }],
    );
    let err = run_analysis(&fx.request(), &liberal_only).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::NoPercentileRows {
            track: Track::Science,
            sitting: ExamSitting::new(2024, 6),
        }
    );
}

#[test]
fn test_no_cutlines_for_year_is_data_unavailable() {
    let mut fx = Fixture::new();
    fx.cutlines[0].exam_year = 2023;
    let err = run_analysis(&fx.request(), &bracketing_table(2024, 6)).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::NoCutlines {
            track: Track::Science,
            year: 2024
        }
    );
}

#[test]
fn test_empty_preferences_is_not_an_error() {
    let mut fx = Fixture::new();
    fx.departments.clear();
    let analysis = run_analysis(&fx.request(), &bracketing_table(2024, 6)).unwrap();
    assert!(analysis.entries.is_empty());
    assert_eq!(analysis.percentile, 11.0);
    assert!(analysis.tier_counts.iter().all(|c| c.count == 0));
}

#[test]
fn test_percentile_for() {
    let fx = Fixture::new();
    let (composite, percentile) =
        percentile_for(&fx.scores, &bracketing_table(2024, 6), Track::Science).unwrap();
    assert_eq!(composite, 510.0);
    assert_eq!(percentile, 11.0);
}

fn liberal_only_table(year: u16, month: u8) -> PercentileLookupTable {
    table(
        year,
        month,
        vec![PercentileRow {
            cumulative_percentile: 10.0,
            reference_score_science: None,
            reference_score_liberal: Some(500.0),
        }],
    )
}

#[test]
fn test_fallback_uses_first_table_in_order() {
    let fx = Fixture::new();
    let march = bracketing_table(2024, 3);
    let june = bracketing_table(2024, 6);

    let exact =
        run_analysis_with_fallback(&fx.request(), [&march, &june], ExamSitting::new(2024, 3))
            .unwrap();
    assert_eq!(exact.sitting_used, ExamSitting::new(2024, 3));
    assert!(!exact.fallback_used);

    let missing =
        run_analysis_with_fallback(&fx.request(), [&june, &march], ExamSitting::new(2024, 9))
            .unwrap();
    assert_eq!(missing.sitting_used, ExamSitting::new(2024, 6));
    assert_eq!(missing.requested_sitting, Some(ExamSitting::new(2024, 9)));
    assert!(missing.fallback_used);
}

#[test]
fn test_fallback_skips_sitting_without_track_rows() {
    let fx = Fixture::new();
    let june = table(2024, 6, Vec::new());
    let march = bracketing_table(2024, 3);
    let analysis =
        run_analysis_with_fallback(&fx.request(), [&june, &march], ExamSitting::new(2024, 6))
            .unwrap();
    assert_eq!(analysis.sitting_used, ExamSitting::new(2024, 3));
    assert!(analysis.fallback_used);
}

#[test]
fn test_fallback_exhausted() {
    let fx = Fixture::new();
    let none: [&PercentileLookupTable; 0] = [];
    assert_eq!(
        run_analysis_with_fallback(&fx.request(), none, ExamSitting::new(2024, 6)).unwrap_err(),
        AnalysisError::NoLookupTables
    );

    let empty = table(2024, 6, Vec::new());
    let err = run_analysis_with_fallback(&fx.request(), [&empty], ExamSitting::new(2024, 6))
        .unwrap_err();
    assert!(matches!(err, AnalysisError::NoPercentileRows { .. }));
}

#[test]
fn test_missing_cutlines_not_retried_across_sittings() {
    let mut fx = Fixture::new();
    fx.cutlines.clear();
    let june = bracketing_table(2024, 6);
    let march = bracketing_table(2024, 3);
    let err =
        run_analysis_with_fallback(&fx.request(), [&june, &march], ExamSitting::new(2024, 6))
            .unwrap_err();
    assert!(matches!(err, AnalysisError::NoCutlines { .. }));
}

#[test]
fn test_percentile_falls_back_past_sitting_missing_track() {
    let fx = Fixture::new();
    let june = liberal_only_table(2024, 6);
    let march = bracketing_table(2024, 3);
    let resolved = percentile_with_fallback(
        &fx.scores,
        [&june, &march],
        ExamSitting::new(2024, 6),
        Track::Science,
    )
    .unwrap();
    assert_eq!(resolved.composite_score, 510.0);
    assert_eq!(resolved.percentile, 11.0);
    assert_eq!(resolved.sitting_used, ExamSitting::new(2024, 3));
    assert_eq!(resolved.requested_sitting, ExamSitting::new(2024, 6));
    assert!(resolved.fallback_used);

    let exact =
        percentile_with_fallback(&fx.scores, [&march], ExamSitting::new(2024, 3), Track::Science)
            .unwrap();
    assert!(!exact.fallback_used);
}

#[test]
fn test_percentile_fallback_exhausted() {
    let fx = Fixture::new();
    let june = liberal_only_table(2024, 6);
    let err =
        percentile_with_fallback(&fx.scores, [&june], ExamSitting::new(2024, 6), Track::Science)
            .unwrap_err();
    assert_eq!(
        err,
        AnalysisError::NoPercentileRows {
            track: Track::Science,
            sitting: ExamSitting::new(2024, 6),
        }
    );
}
