use super::*;
use crate::model::scores::Track;

fn cutline(appropriate: f64, expected: f64) -> CutlineRecord {
    CutlineRecord {
        university_name: "Seoul".to_string(),
        department_name: "Medicine".to_string(),
        exam_track: Track::Science,
        exam_year: 2024,
        appropriate_percentile: appropriate,
        expected_percentile: expected,
        minimum_percentile: appropriate + 3.0,
    }
}

#[test]
fn test_normal_cdf_reference_points() {
    assert!((normal_cdf(0.0) - 0.5).abs() < 1e-6);
    assert!((normal_cdf(1.96) - 0.975_002_1).abs() < 1e-6);
    assert!((normal_cdf(-1.0) - 0.158_655_3).abs() < 1e-6);
    assert!((normal_cdf(-0.28) - 0.389_739_2).abs() < 1e-6);
    assert_eq!(normal_cdf(-9.0), 0.0);
    assert_eq!(normal_cdf(9.0), 1.0);
}

#[test]
fn test_normal_cdf_symmetry() {
    for &x in &[0.1, 0.5, 1.3, 2.7, 4.0] {
        assert!((normal_cdf(x) + normal_cdf(-x) - 1.0).abs() < 1e-7);
    }
}

#[test]
fn test_reference_scenario() {
    let profile = ScoringProfile::default_v1();
    let out = score(11.0, &cutline(15.0, 12.0), &profile);
    assert_eq!(out.model, ProbabilityModel::Normal);
    // z = -0.28
    assert!((out.probability - 61.026).abs() < 0.01, "{}", out.probability);
    assert_eq!(out.tier, ColorTier::LightGreen);
}

#[test]
fn test_strong_student_green() {
    let profile = ScoringProfile::default_v1();
    let out = score(2.0, &cutline(15.0, 12.0), &profile);
    assert!(out.probability > 80.0);
    assert_eq!(out.tier, ColorTier::Green);
}

#[test]
fn test_weak_student_red() {
    let profile = ScoringProfile::default_v1();
    let out = score(25.0, &cutline(15.0, 12.0), &profile);
    assert!(out.probability < 20.0);
    assert_eq!(out.tier, ColorTier::Red);
}

#[test]
fn test_on_expected_is_half() {
    let profile = ScoringProfile::default_v1();
    let out = score(12.0, &cutline(15.0, 12.0), &profile);
    assert!((out.probability - 50.0).abs() < 1e-5);
}

#[test]
fn test_zero_sigma_uses_ladder() {
    let profile = ScoringProfile::default_v1();
    let flat = cutline(50.0, 50.0);

    let even = score(50.0, &flat, &profile);
    assert_eq!(even.model, ProbabilityModel::Ladder);
    assert_eq!(even.probability, 50.0);
    assert_eq!(even.tier, ColorTier::LightGreen);

    let strong = score(40.0, &flat, &profile);
    assert_eq!(strong.probability, 90.0);
    assert_eq!(strong.tier, ColorTier::Green);

    let weak = score(53.0, &flat, &profile);
    assert_eq!(weak.probability, 15.0);
    assert_eq!(weak.tier, ColorTier::Red);
}

#[test]
fn test_non_finite_inputs_stay_well_formed() {
    let profile = ScoringProfile::default_v1();
    for student in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let out = score(student, &cutline(15.0, 12.0), &profile);
        assert!((0.0..=100.0).contains(&out.probability));
        assert_eq!(out.model, ProbabilityModel::Ladder);
    }
    let out = score(10.0, &cutline(f64::INFINITY, 12.0), &profile);
    assert!((0.0..=100.0).contains(&out.probability));
}

#[test]
fn test_probability_decreases_with_percentile() {
    let profile = ScoringProfile::default_v1();
    let c = cutline(15.0, 12.0);
    let mut prev = 101.0;
    for i in 0..40 {
        let p = score(i as f64, &c, &profile).probability;
        assert!(p <= prev);
        prev = p;
    }
}
