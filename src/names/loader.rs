use std::fs;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{AppError, AppResult};

use super::{NameSet, normalize_name};

const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];
const HEADER_TOKENS: [&str; 4] = ["name", "names", "profile", "person"];
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

pub fn load_names(path: &Path) -> AppResult<NameSet> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(AppError::NamesFileNotFound(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };

    parse_names(&raw)
}

/// Parses delimited text where the first column of each row is a name.
/// Without a recognizable delimiter every line is one whole name.
pub fn parse_names(raw: &[u8]) -> AppResult<NameSet> {
    let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);
    let mut collector = NameCollector::default();

    match sniff_delimiter(raw) {
        Some(delimiter) => {
            debug!(delimiter = %char::from(delimiter).escape_default(), "parsing delimited names");
            read_delimited(raw, delimiter, &mut collector)?;
        }
        None => {
            debug!("no delimiter found, reading one name per line");
            read_lines(raw, &mut collector)?;
        }
    }

    if collector.names.is_empty() {
        return Err(AppError::Parse("no names found in input".to_string()));
    }

    Ok(collector.names)
}

#[derive(Default)]
struct NameCollector {
    names: NameSet,
    seen_row: bool,
}

impl NameCollector {
    /// Takes the first cell of a row; only the first non-blank row may be a header.
    fn push(&mut self, cell: &str) {
        let cell = cell.trim();
        if cell.is_empty() {
            return;
        }

        if !self.seen_row {
            self.seen_row = true;
            if is_header(cell) {
                debug!(header = cell, "skipping header row");
                return;
            }
        }

        self.names.insert(cell);
    }
}

fn read_delimited(raw: &[u8], delimiter: u8, collector: &mut NameCollector) -> AppResult<()> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(raw);

    for record in reader.records() {
        let record = record.map_err(|err| {
            let line = err
                .position()
                .map(|pos| pos.line().to_string())
                .unwrap_or_else(|| "?".to_string());
            AppError::Parse(format!("malformed row at line {line}: {err}"))
        })?;

        if let Some(first) = record.get(0) {
            collector.push(first);
        }
    }

    Ok(())
}

fn read_lines(raw: &[u8], collector: &mut NameCollector) -> AppResult<()> {
    for (index, line) in raw.split(|byte| *byte == b'\n').enumerate() {
        let line = std::str::from_utf8(line).map_err(|err| {
            AppError::Parse(format!("malformed row at line {}: {err}", index + 1))
        })?;
        collector.push(line);
    }

    Ok(())
}

fn sniff_delimiter(raw: &[u8]) -> Option<u8> {
    let first_line = raw
        .split(|byte| *byte == b'\n')
        .find(|line| line.iter().any(|byte| !byte.is_ascii_whitespace()))
        .unwrap_or_default();

    CANDIDATE_DELIMITERS
        .into_iter()
        .find(|delimiter| first_line.contains(delimiter))
}

fn is_header(cell: &str) -> bool {
    let cell = normalize_name(cell);
    HEADER_TOKENS.contains(&cell.as_str())
}
