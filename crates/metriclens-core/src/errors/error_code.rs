//! Stable error codes for surfacing failures across the presentation boundary.

pub const FORMAT_ERROR: &str = "FORMAT_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}
