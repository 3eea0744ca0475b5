//! Error types for RosterDB
//!
//! Provides a unified error type for all fallible operations. The storage
//! interface itself reports failures as `false`; these errors surface from the
//! codec, the benchmark harness, and the report writers.

use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for RosterDB operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Parse error in line '{line}': {reason}")]
    Parse { line: String, reason: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Unknown sort algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown backend: {0}")]
    UnknownBackend(String),

    // -------------------------------------------------------------------------
    // Benchmark Errors
    // -------------------------------------------------------------------------
    #[error("Invalid operation weights: {0}")]
    InvalidWeights(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RosterError {
    /// Build a per-line parse error
    pub fn parse(line: &str, reason: impl Into<String>) -> Self {
        RosterError::Parse {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}
