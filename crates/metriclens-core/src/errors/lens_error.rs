use super::error_code::{self, ErrorCode};
use super::ConfigError;

/// Top-level error type for MetricLens.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum LensError {
    /// Malformed input. The boxed source keeps the originating error so
    /// callers can downcast it for structured details (line, record index).
    #[error("format error: {0}")]
    Format(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ErrorCode for LensError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Format(_) => error_code::FORMAT_ERROR,
            Self::Io { .. } => error_code::IO_ERROR,
            Self::InvalidInput(_) => error_code::INVALID_INPUT,
            Self::Config(_) => error_code::CONFIG_ERROR,
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}

/// Convenience type alias.
pub type LensResult<T> = Result<T, LensError>;
