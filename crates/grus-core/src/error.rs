//! Error types and exit codes for grus
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing file, malformed record, unknown node)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing file, malformed record (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// All errors surfaced by grus-core and the CLI layer on top of it.
///
/// Algorithm-inapplicability outcomes (topological sort on a cyclic graph,
/// unreachable targets) are *not* errors; they are `None` results that
/// callers must check.
#[derive(Error, Debug)]
pub enum GrusError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("data file not found: {path:?}")]
    DataFileNotFound { path: PathBuf },

    #[error("invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("vertex not found: {key}")]
    VertexNotFound { key: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Generic failures (exit code 1)
    #[error("map capacity exhausted (capacity {capacity}): table is full and no slot matched")]
    MapCapacityExhausted { capacity: usize },

    #[error("invalid map sizing: expected {expected} elements at load factor {load_factor}")]
    InvalidSizing { expected: usize, load_factor: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GrusError {
    /// Map this error to its CLI exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GrusError::UnknownFormat(_) | GrusError::UsageError(_) => ExitCode::Usage,

            // Data errors
            GrusError::DataFileNotFound { .. }
            | GrusError::InvalidRecord { .. }
            | GrusError::NodeNotFound { .. }
            | GrusError::VertexNotFound { .. }
            | GrusError::Csv(_) => ExitCode::Data,

            // Generic failures
            GrusError::MapCapacityExhausted { .. }
            | GrusError::InvalidSizing { .. }
            | GrusError::Io(_)
            | GrusError::Json(_)
            | GrusError::Other(_) => ExitCode::Failure,
        }
    }

    /// Short identifier for the error variant, used in the JSON envelope.
    pub fn error_type(&self) -> &'static str {
        match self {
            GrusError::UnknownFormat(_) => "unknown_format",
            GrusError::UsageError(_) => "usage",
            GrusError::DataFileNotFound { .. } => "data_file_not_found",
            GrusError::InvalidRecord { .. } => "invalid_record",
            GrusError::NodeNotFound { .. } => "node_not_found",
            GrusError::VertexNotFound { .. } => "vertex_not_found",
            GrusError::Csv(_) => "csv",
            GrusError::MapCapacityExhausted { .. } => "map_capacity_exhausted",
            GrusError::InvalidSizing { .. } => "invalid_sizing",
            GrusError::Io(_) => "io",
            GrusError::Json(_) => "json",
            GrusError::Other(_) => "other",
        }
    }

    /// Structured error envelope for `--format json` consumers.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GrusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            GrusError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GrusError::NodeNotFound { id: "n1".into() }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GrusError::MapCapacityExhausted { capacity: 7 }.exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_json_envelope() {
        let err = GrusError::VertexNotFound { key: "a".into() };
        let value = err.to_json();
        assert_eq!(value["error"]["code"], 3);
        assert_eq!(value["error"]["type"], "vertex_not_found");
        assert!(value["error"]["message"]
            .as_str()
            .unwrap()
            .contains("vertex not found"));
    }
}
