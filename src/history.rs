use crate::error::HistoryError;
use crate::solve::SolveRecord;
use std::fs::{self, OpenOptions};
use std::path::Path;
use tracing::debug;

/// Reads every solve in a history file. A missing file is an empty history.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<SolveRecord>, HistoryError> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no history file yet");
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)?;
    let solves = reader
        .deserialize()
        .collect::<Result<Vec<SolveRecord>, csv::Error>>()?;

    // records are numbered from 1, after the header
    if let Some((idx, bad)) = solves
        .iter()
        .enumerate()
        .find(|(_, s)| !s.time.is_finite() || s.time < 0.0)
    {
        return Err(HistoryError::InvalidRecord {
            record: idx + 1,
            time: bad.time,
        });
    }
    debug!(path = %path.display(), count = solves.len(), "loaded history");
    Ok(solves)
}

/// Replaces the history file with `solves`.
pub fn save<P: AsRef<Path>>(path: P, solves: &[SolveRecord]) -> Result<(), HistoryError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for solve in solves {
        writer.serialize(solve)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), count = solves.len(), "saved history");
    Ok(())
}

/// Adds one solve to the end of the history, writing the header if the file
/// is new.
pub fn append<P: AsRef<Path>>(path: P, solve: &SolveRecord) -> Result<(), HistoryError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    writer.serialize(solve)?;
    writer.flush()?;
    debug!(
        path = %path.display(),
        time = solve.time,
        penalty = %solve.penalty,
        "appended solve"
    );
    Ok(())
}
