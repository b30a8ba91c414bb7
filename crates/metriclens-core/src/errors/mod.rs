mod config_error;
pub mod error_code;
mod lens_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use lens_error::{LensError, LensResult};
