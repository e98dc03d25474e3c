//! CSV ingestion
//!
//! Reads a tracking export into an [`ArrayList`] of [`TrackEvent`] and
//! sorts it by timestamp. A malformed row is a data error carrying the
//! file line it came from; ingestion does not skip rows silently.

use std::path::Path;

use crate::collections::ArrayList;
use crate::error::{GrusError, Result};
use crate::records::TrackEvent;
use crate::trace_time;

/// Loads all events from `path`, sorted ascending by timestamp.
pub fn load_events(path: &Path) -> Result<ArrayList<TrackEvent>> {
    let start = std::time::Instant::now();
    if !path.exists() {
        return Err(GrusError::DataFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut events = ArrayList::new();
    for row in reader.deserialize() {
        let event: TrackEvent = row.map_err(|e| GrusError::InvalidRecord {
            line: e.position().map_or(0, csv::Position::line),
            reason: e.to_string(),
        })?;
        events.add_last(event);
    }

    events.sort_by(|a, b| a.timestamp <= b.timestamp);
    tracing::info!(path = %path.display(), events = events.size(), "events_loaded");
    trace_time!(start, "load_events");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "event-id,timestamp,location-lat,location-long,tag-local-identifier,comments";

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_loads_and_sorts_by_timestamp() {
        let file = write_csv(&[
            "e2,2021-05-01 09:00:00,52.0,10.0,T-1,1000",
            "e1,2021-05-01 06:00:00,52.0,10.0,T-1,1000",
            "e3,2021-05-02 06:00:00,53.0,11.0,T-2,500",
        ]);
        let events = load_events(file.path()).unwrap();
        let ids: Vec<_> = events.iter().map(|e| e.event_id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_events(Path::new("/nonexistent/events.csv")).unwrap_err();
        assert!(matches!(err, GrusError::DataFileNotFound { .. }));
    }

    #[test]
    fn test_malformed_row_names_the_line() {
        let file = write_csv(&[
            "e1,2021-05-01 06:00:00,52.0,10.0,T-1,1000",
            "e2,not-a-date,52.0,10.0,T-1,1000",
        ]);
        let err = load_events(file.path()).unwrap_err();
        match err {
            GrusError::InvalidRecord { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("timestamp"), "reason: {reason}");
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }
}
