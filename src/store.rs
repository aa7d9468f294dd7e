// src/store.rs
//
// The append-only price log: `timestamp,title,price`, one header row,
// newline-terminated UTF-8 rows.
//
// - load():   whole file → ObservationSet. Missing and empty are reported as
//             states, not errors.
// - append(): the only write path. One process-wide writer at a time.

use std::{
    fs::{self, OpenOptions},
    io::{self, ErrorKind, Read, Seek, SeekFrom, Write},
    path::Path,
    sync::Mutex,
};

use crate::csv::{self, SEP};
use crate::error::StoreError;
use crate::model::{parse_timestamp, Observation, ObservationSet, Price};

pub const HEADERS: [&str; 3] = ["timestamp", "title", "price"];

static WRITER: Mutex<()> = Mutex::new(());

/// What a load found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogSnapshot {
    /// No log file at the path.
    Missing,
    /// File present but holds no data rows.
    Empty,
    Loaded(LoadReport),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadReport {
    pub observations: ObservationSet,
    /// Rows that could not be read as an observation.
    pub skipped: usize,
}

impl LogSnapshot {
    pub fn observations(&self) -> Option<&ObservationSet> {
        match self {
            LogSnapshot::Loaded(r) => Some(&r.observations),
            _ => None,
        }
    }

    pub fn into_observations(self) -> Option<ObservationSet> {
        match self {
            LogSnapshot::Loaded(r) => Some(r.observations),
            _ => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            LogSnapshot::Missing => "No price log found.",
            LogSnapshot::Empty => "No data in price log.",
            LogSnapshot::Loaded(_) => "Loaded price log",
        }
    }
}

pub fn load(path: &Path) -> Result<LogSnapshot, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            logd!("Store: no log at {}", path.display());
            return Ok(LogSnapshot::Missing);
        }
        Err(source) => return Err(StoreError::Read { path: path.to_path_buf(), source }),
    };

    let snapshot = parse_log(&text);
    match &snapshot {
        LogSnapshot::Loaded(r) => logf!(
            "Store: loaded {} observation(s) from {} (skipped {})",
            r.observations.len(),
            path.display(),
            r.skipped
        ),
        other => logf!("Store: {} ({})", other.describe(), path.display()),
    }
    Ok(snapshot)
}

/// Parse log text. Exposed for callers holding the text already.
pub fn parse_log(text: &str) -> LogSnapshot {
    let rows = csv::parse_rows(text, SEP);
    let (_, rows) = csv::split_header(rows, HEADERS[0]);
    if rows.is_empty() {
        return LogSnapshot::Empty;
    }

    let mut observations = ObservationSet::new();
    let mut skipped = 0usize;
    for (i, row) in rows.iter().enumerate() {
        match parse_row(row) {
            Some(obs) => observations.push(obs),
            None => {
                skipped += 1;
                logw!("Store: skipping malformed row {}: {:?}", i + 1, row);
            }
        }
    }

    if observations.is_empty() {
        return LogSnapshot::Empty;
    }
    LogSnapshot::Loaded(LoadReport { observations, skipped })
}

fn parse_row(row: &[String]) -> Option<Observation> {
    let [ts, title, price] = row else { return None };
    let timestamp = parse_timestamp(ts)?;
    let price = Price::parse(price).filter(|p| !p.is_negative())?;
    Some(Observation::new(timestamp, title.trim(), price))
}

/// Append observations, creating the file (with header) if needed.
/// Returns the number of rows written.
pub fn append(path: &Path, observations: &[Observation]) -> Result<usize, StoreError> {
    if observations.is_empty() {
        return Ok(0);
    }
    let _guard = WRITER.lock().map_err(|_| StoreError::LockPoisoned)?;
    let wrap = |source: io::Error| StoreError::Write { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(wrap)?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(wrap)?;

    let len = file.metadata().map_err(wrap)?.len();

    let mut buf: Vec<u8> = Vec::new();
    if len == 0 {
        csv::write_row(&mut buf, &HEADERS, SEP).map_err(wrap)?;
    } else if !ends_with_newline(&mut file, len).map_err(wrap)? {
        buf.push(b'\n');
    }
    for obs in observations {
        csv::write_row(&mut buf, &obs.to_row(), SEP).map_err(wrap)?;
    }

    // one write per batch
    file.write_all(&buf).map_err(wrap)?;
    file.flush().map_err(wrap)?;

    logf!("Store: appended {} row(s) to {}", observations.len(), path.display());
    Ok(observations.len())
}

fn ends_with_newline(file: &mut fs::File, len: u64) -> io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_is_empty() {
        assert_eq!(parse_log("timestamp,title,price\n"), LogSnapshot::Empty);
        assert_eq!(parse_log(""), LogSnapshot::Empty);
    }

    #[test]
    fn malformed_rows_are_skipped_and_counted() {
        let text = "timestamp,title,price\n\
                    2024-01-01 10:00:00,Good,10.00\n\
                    not a date,Bad,10.00\n\
                    2024-01-01 10:00:00,Negative,-1\n\
                    2024-01-01 10:00:00,Short\n";
        let LogSnapshot::Loaded(report) = parse_log(text) else { panic!("expected data") };
        assert_eq!(report.observations.len(), 1);
        assert_eq!(report.skipped, 3);
    }
}
