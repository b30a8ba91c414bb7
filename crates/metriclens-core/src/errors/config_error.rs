/// Model configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidNumber { field: &'static str, value: f64 },

    #[error("score_dimension must not be empty")]
    EmptyDimension,

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
