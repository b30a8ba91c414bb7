//! Ingestion error types.

use thiserror::Error;

use metriclens_core::errors::{error_code, ErrorCode, LensError};

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Invalid JSON format: expected an array of experiments, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Experiment record {index} is malformed: {source}")]
    InvalidRecord {
        index: usize,
        source: serde_json::Error,
    },

    #[error("CSV must have a header row and at least one data row")]
    TooFewRows,

    #[error("CSV header must include 'date' and 'value' columns")]
    MissingColumns,

    #[error("CSV line {line}: expected at least {expected} columns, found {found}")]
    InvalidRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("CSV line {line}: value {value:?} is not a finite number")]
    InvalidValue { line: usize, value: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl ErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            _ => error_code::FORMAT_ERROR,
        }
    }
}

impl From<IngestError> for LensError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::Io { path, source } => LensError::Io { path, source },
            other => LensError::Format(Box::new(other)),
        }
    }
}

pub type IngestResult<T> = Result<T, IngestError>;
