use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::api::MatchLog;
use crate::error::AppResult;

/// One flattened CSV row per match log.
#[derive(Debug, Serialize)]
struct MatchLogRow<'a> {
    id: Option<&'a str>,
    profile_id: Option<&'a str>,
    profile_name: Option<&'a str>,
    confidence: Option<f64>,
    device_id: Option<&'a str>,
    device_name: Option<&'a str>,
    device_location: Option<&'a str>,
    matched_at: Option<&'a str>,
    created_at: Option<&'a str>,
}

impl<'a> From<&'a MatchLog> for MatchLogRow<'a> {
    fn from(log: &'a MatchLog) -> Self {
        Self {
            id: log.id.as_ref().map(|id| id.as_str()),
            profile_id: log.profile_id.as_ref().map(|id| id.as_str()),
            profile_name: log.profile_name.as_deref(),
            confidence: log.confidence,
            device_id: log.device_id.as_ref().map(|id| id.as_str()),
            device_name: log.device_name.as_deref(),
            device_location: log.device_location.as_deref(),
            matched_at: log.matched_at.as_deref(),
            created_at: log.created_at.as_deref(),
        }
    }
}

pub fn write_match_logs<W: Write>(writer: W, logs: &[MatchLog]) -> AppResult<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    for log in logs {
        csv.serialize(MatchLogRow::from(log))?;
    }
    csv.flush()?;
    Ok(logs.len())
}

pub fn export_match_logs(path: &Path, logs: &[MatchLog]) -> AppResult<usize> {
    let file = File::create(path)?;
    write_match_logs(file, logs)
}
