//! Diagnostics module.
//!
//! Typed error records: the closed set of protocol fields, the record that
//! carries them, the verbosity settings that pick which ones are shown, and
//! the SQLSTATE registry.

pub mod error;
pub mod field;
pub mod options;
pub mod record;
pub mod sqlstate;

pub use error::{DiagError, Result};
pub use field::DiagnosticField;
pub use options::{ContextVisibility, MessageOptions, Verbosity};
pub use record::{DiagnosticFields, ErrorRecord, ResultStatus};
pub use sqlstate::{
    SQLSTATE_CLASSES, SQLSTATE_CODES, SqlStateCondition, lookup_class, lookup_condition,
    lookup_sqlstate,
};

#[cfg(test)]
mod sqlstate_test;
