//! Error types for the Nabha Health stock checker.
//!
//! Filtering itself never fails. Errors only arise at the edges: loading a
//! catalog from disk, or parsing user-supplied location and status values.

use thiserror::Error;

/// The unified error type for the stock checker crates.
#[derive(Debug, Error)]
pub enum NabhaError {
    /// A catalog document was malformed or failed validation.
    #[error("catalog error: {reason}")]
    Catalog { reason: String },

    /// A location filter value did not match any known slug.
    #[error("unknown location '{value}' (expected one of: all, main-market, bus-stand, civil-lines, hospital-road)")]
    UnknownLocation { value: String },

    /// A stock status label did not match any known status.
    #[error("unknown stock status '{value}'")]
    UnknownStockStatus { value: String },

    /// Catalog or results could not be serialized for output.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// A file could not be read.
    #[error("failed to read '{path}': {reason}")]
    Io { path: String, reason: String },
}

/// Convenience alias used throughout the Nabha crates.
pub type NabhaResult<T> = Result<T, NabhaError>;
