//! Error types for the map view state
//!
//! View geometry itself never fails: misses and degenerate poses are reported
//! by value (NaN vectors, fallback axes). These errors only surface at the API
//! edges, when validating a configuration or reading a view that was never
//! calculated.

use std::fmt;

/// Result type for map view state operations
pub type Result<T> = std::result::Result<T, Error>;

/// Map view state errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Configuration rejected by `ViewConfig::validate()`
    InvalidConfig(String),

    /// The view state has not been calculated yet
    NotCalculated,

    /// A parameter was outside of its accepted domain
    InvalidParameter(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::NotCalculated => write!(f, "View state not calculated"),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
