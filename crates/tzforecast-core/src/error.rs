//! Error types for tzforecast-core.
//!
//! Parsing failures abort the operation that hit them. Icon lookup misses
//! are reported through the same enum but are resolved to a fallback by
//! [`crate::icon::IconResolver::resolve`] and never surface from the builds.

use thiserror::Error;

/// The main error type for tzforecast operations.
#[derive(Debug, Error, PartialEq)]
pub enum ForecastError {
    /// Malformed timestamp text or forecast document.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Fewer samples than the strict hourly view requires.
    #[error("Insufficient data: need {needed} samples, got {available}")]
    InsufficientData { needed: usize, available: usize },

    /// Icon code not present in the resolver's table.
    #[error("Unknown icon code: {0}")]
    LookupMiss(String),
}

/// Result type alias for tzforecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;
