use std::collections::{HashMap, HashSet};

use crate::model::cutline::CutlineRecord;
use crate::model::profile::ScoringProfile;
use crate::model::recommendation::RecommendationEntry;
use crate::pipeline::stage4_probability::score;

/// Candidates from the preferred departments, closest appropriate percentile first.
///
/// Ties keep input order. At most `profile.per_department_cap` entries per department and
/// `profile.global_cap` overall. An empty preference list yields an empty result.
pub fn rank(
    candidates: &[CutlineRecord],
    student_percentile: f64,
    preferred_departments: &[String],
    profile: &ScoringProfile,
) -> Vec<RecommendationEntry> {
    if preferred_departments.is_empty() {
        return Vec::new();
    }
    let preferred: HashSet<&str> = preferred_departments.iter().map(String::as_str).collect();

    let mut scored: Vec<(f64, &CutlineRecord)> = candidates
        .iter()
        .filter(|c| preferred.contains(c.department_name.as_str()))
        .map(|c| ((c.appropriate_percentile - student_percentile).abs(), c))
        .collect();
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut per_department: HashMap<&str, usize> = HashMap::new();
    let mut out = Vec::new();
    for (difference, candidate) in scored {
        if out.len() >= profile.global_cap {
            break;
        }
        let taken = per_department
            .entry(candidate.department_name.as_str())
            .or_insert(0);
        if *taken >= profile.per_department_cap {
            continue;
        }
        *taken += 1;
        out.push(build_entry(candidate, student_percentile, difference, profile));
    }
    out
}

/// `max(0, 100 - difference * decay)`: a display/sort heuristic, not a probability.
pub fn match_score(difference: f64, decay_per_point: f64) -> f64 {
    (100.0 - difference * decay_per_point).max(0.0)
}

fn build_entry(
    candidate: &CutlineRecord,
    student_percentile: f64,
    difference: f64,
    profile: &ScoringProfile,
) -> RecommendationEntry {
    let admission = score(student_percentile, candidate, profile);
    RecommendationEntry {
        university_name: candidate.university_name.clone(),
        department_name: candidate.department_name.clone(),
        exam_track: candidate.exam_track,
        exam_year: candidate.exam_year,
        appropriate_percentile: candidate.appropriate_percentile,
        expected_percentile: candidate.expected_percentile,
        minimum_percentile: candidate.minimum_percentile,
        student_percentile,
        nubaek_difference: difference,
        match_score: match_score(difference, profile.match_decay_per_point),
        pass_probability: admission.probability,
        color_tier: admission.tier,
        probability_model: admission.model,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_rank.rs"]
mod tests;
