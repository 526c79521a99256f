//! Renders PostgreSQL error records the way `libpq`/`psql` print them,
//! including the `LINE N:` cursor display for syntax errors.
//!
//! ```
//! use pqdiag::diagnostics::{DiagnosticField, ErrorRecord};
//! use pqdiag::diagnostics::{ContextVisibility, Verbosity};
//! use pqdiag::rendering::error_message;
//!
//! let record = ErrorRecord::default()
//!     .with_field(DiagnosticField::Severity, "ERROR")
//!     .with_field(DiagnosticField::MessagePrimary, "syntax error at or near \"FRM\"")
//!     .with_field(DiagnosticField::StatementPosition, "10")
//!     .with_query("SELECT * FRM foo");
//!
//! let text = error_message(&record, Verbosity::Default, ContextVisibility::ErrorsOnly);
//! assert_eq!(
//!     text,
//!     "ERROR:  syntax error at or near \"FRM\"\nLINE 1: SELECT * FRM foo\n                 ^\n"
//! );
//! ```

pub mod diagnostics;
pub mod rendering;
pub mod report;

pub use diagnostics::{DiagError, DiagnosticField, ErrorRecord, Result};
pub use report::{ErrorReport, Query};
