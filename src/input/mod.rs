use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod catalog;
pub mod compressed;

use catalog::TableCatalog;
use compressed::open_maybe_gz;

use crate::model::cutline::CutlineRecord;
use crate::model::lookup::PercentileLookupTable;
use crate::model::profile::ScoringProfile;
use crate::model::scores::{ExamSitting, ScoreVector, Track};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

fn read_text(path: &Path) -> Result<String, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(text)
}

fn parse_json<T: DeserializeOwned>(path: &Path, text: &str) -> Result<T, InputError> {
    serde_json::from_str(text).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    parse_json(path, &read_text(path)?)
}

/// Files hold either a single record or an array of them; the first token decides which, so
/// parse errors point into the record itself.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, InputError> {
    let text = read_text(path)?;
    let records = if text.trim_start().starts_with('[') {
        parse_json::<Vec<T>>(path, &text)?
    } else {
        vec![parse_json::<T>(path, &text)?]
    };
    tracing::info!(path = %path.display(), records = records.len(), "loaded");
    Ok(records)
}

pub fn load_score_vectors(path: &Path) -> Result<Vec<ScoreVector>, InputError> {
    read_records(path)
}

pub fn load_tables(path: &Path) -> Result<TableCatalog, InputError> {
    let tables: Vec<PercentileLookupTable> = read_records(path)?;
    for table in &tables {
        if !table.has_track(Track::Science) && !table.has_track(Track::Liberal) {
            tracing::warn!(sitting = %table.sitting, "lookup table has no usable rows");
        }
    }
    Ok(TableCatalog::new(tables))
}

pub fn load_cutlines(path: &Path) -> Result<Vec<CutlineRecord>, InputError> {
    read_records(path)
}

pub fn load_profile(path: &Path) -> Result<ScoringProfile, InputError> {
    let profile: ScoringProfile = read_json(path)?;
    profile.validate().map_err(InputError::InvalidInput)?;
    Ok(profile)
}

/// Picks the score vector for `student_id` at `sitting`.
///
/// Vectors without a student id or sitting match any filter. Among several matches the most
/// recent sitting wins; vectors with no sitting rank oldest.
pub fn select_score_vector(
    vectors: &[ScoreVector],
    student_id: Option<&str>,
    sitting: Option<ExamSitting>,
) -> Result<ScoreVector, InputError> {
    let matches = vectors.iter().filter(|v| {
        let id_ok = match (student_id, v.student_id.as_deref()) {
            (Some(want), Some(have)) => want == have,
            _ => true,
        };
        let sitting_ok = match (sitting, v.sitting) {
            (Some(want), Some(have)) => want == have,
            _ => true,
        };
        id_ok && sitting_ok
    });

    // max_by_key keeps the last maximum; reverse so the first listed record wins ties
    let picked = matches.rev().max_by_key(|v| v.sitting);
    picked.cloned().ok_or_else(|| {
        InputError::MissingInput(format!(
            "no score vector for student {} at sitting {}",
            student_id.unwrap_or("<any>"),
            sitting.map(|s| s.to_string()).unwrap_or_else(|| "<any>".to_string())
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
