//! Error types for pqdiag.
//!
//! Rendering itself never fails; these cover the edges where loose input is
//! turned into typed records and options.

use thiserror::Error;

/// Result type for pqdiag parsing operations.
pub type Result<T> = core::result::Result<T, DiagError>;

#[derive(Debug, Error)]
pub enum DiagError {
    /// Key is neither a field code nor a field name
    #[error("unknown diagnostic field: {0:?}")]
    UnknownField(String),

    #[error("unknown verbosity: {0:?} (expected terse, default, verbose or sqlstate)")]
    UnknownVerbosity(String),

    #[error("unknown context visibility: {0:?} (expected never, errors or always)")]
    UnknownContextVisibility(String),

    /// An error record must be a JSON object
    #[error("expected a JSON object of error fields, got {0}")]
    NotAnObject(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
