use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Academic track; selects which reference-score column and which cutline set apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Science,
    Liberal,
}

impl Track {
    pub fn as_str(self) -> &'static str {
        match self {
            Track::Science => "science",
            Track::Liberal => "liberal",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Track {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "science" | "natural" | "이과" | "자연" => Ok(Track::Science),
            "liberal" | "humanities" | "문과" | "인문" => Ok(Track::Liberal),
            _ => Err(format!("invalid track `{s}` (use science|liberal)")),
        }
    }
}

/// Exam sitting key. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExamSitting {
    pub year: u16,
    pub month: u8,
}

impl ExamSitting {
    pub fn new(year: u16, month: u8) -> Self {
        Self { year, month }
    }
}

impl fmt::Display for ExamSitting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubjectScore {
    #[serde(deserialize_with = "null_as_default")]
    pub standard_score: f64,
    pub raw_score: Option<f64>,
    pub percentile: Option<f64>,
    /// Letter grade 1..=9.
    pub grade: Option<u8>,
}

impl SubjectScore {
    pub fn standard(score: f64) -> Self {
        Self {
            standard_score: score,
            ..Self::default()
        }
    }
}

/// One exam sitting's subject results for one student. Absent or `null` subjects count as 0.
///
/// Records may nest each subject (`"korean": {"standard_score": 130}`) or use the flat
/// `korean_standard_score` columns; a flat column overrides the nested standard score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ScoreVectorRecord")]
pub struct ScoreVector {
    pub student_id: Option<String>,
    pub sitting: Option<ExamSitting>,
    pub korean: SubjectScore,
    pub math: SubjectScore,
    pub inquiry1: SubjectScore,
    pub inquiry2: SubjectScore,
}

impl ScoreVector {
    pub fn from_standard(korean: f64, math: f64, inquiry1: f64, inquiry2: f64) -> Self {
        Self {
            korean: SubjectScore::standard(korean),
            math: SubjectScore::standard(math),
            inquiry1: SubjectScore::standard(inquiry1),
            inquiry2: SubjectScore::standard(inquiry2),
            ..Self::default()
        }
    }

    pub fn standard_scores(&self) -> [(&'static str, f64); 4] {
        [
            ("korean", self.korean.standard_score),
            ("math", self.math.standard_score),
            ("inquiry1", self.inquiry1.standard_score),
            ("inquiry2", self.inquiry2.standard_score),
        ]
    }
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ScoreVectorRecord {
    student_id: Option<String>,
    sitting: Option<ExamSitting>,
    korean: Option<SubjectScore>,
    math: Option<SubjectScore>,
    inquiry1: Option<SubjectScore>,
    inquiry2: Option<SubjectScore>,
    korean_standard_score: Option<f64>,
    math_standard_score: Option<f64>,
    inquiry1_standard_score: Option<f64>,
    inquiry2_standard_score: Option<f64>,
}

impl From<ScoreVectorRecord> for ScoreVector {
    fn from(r: ScoreVectorRecord) -> Self {
        Self {
            student_id: r.student_id,
            sitting: r.sitting,
            korean: subject(r.korean, r.korean_standard_score),
            math: subject(r.math, r.math_standard_score),
            inquiry1: subject(r.inquiry1, r.inquiry1_standard_score),
            inquiry2: subject(r.inquiry2, r.inquiry2_standard_score),
        }
    }
}

fn subject(nested: Option<SubjectScore>, flat: Option<f64>) -> SubjectScore {
    let mut out = nested.unwrap_or_default();
    if let Some(score) = flat {
        out.standard_score = score;
    }
    out
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
