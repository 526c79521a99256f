//! Assembles the user-facing text of an error record.
//!
//! Layout follows the protocol client's conventions:
//!
//! ```text
//! ERROR:  syntax error at or near "FRM"
//! LINE 1: SELECT * FRM foo
//!                  ^
//! HINT:  ...
//! ```

use super::position::{QueryPositionDetail, report_position};
use crate::diagnostics::field::DiagnosticField;
use crate::diagnostics::options::{ContextVisibility, Verbosity};
use crate::diagnostics::record::{ErrorRecord, ResultStatus};

/// Object-name fields shown in verbose mode, in display order.
const NAME_FIELDS: [(&str, DiagnosticField); 5] = [
    ("SCHEMA NAME", DiagnosticField::SchemaName),
    ("TABLE NAME", DiagnosticField::TableName),
    ("COLUMN NAME", DiagnosticField::ColumnName),
    ("DATATYPE NAME", DiagnosticField::DatatypeName),
    ("CONSTRAINT NAME", DiagnosticField::ConstraintName),
];

/// What [`build_message`] decided about the error position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageMeta {
    /// Set when a cursor display was written
    pub position: Option<QueryPositionDetail>,
    /// The position referred to the internal query rather than the statement
    pub internal_query: bool,
}

/// Appends the diagnostic text for `record` to `out`.
///
/// Never fails: a missing record or one without structured fields yields a
/// fixed fallback line, and a position that cannot be displayed is simply
/// left out.
pub fn build_message(
    out: &mut String,
    record: Option<&ErrorRecord>,
    verbosity: Verbosity,
    show_context: ContextVisibility,
) -> MessageMeta {
    let mut meta = MessageMeta::default();

    let Some(record) = record else {
        out.push_str("out of memory\n");
        return meta;
    };

    // Client-generated errors carry only a pre-rendered message.
    let Some(fields) = &record.fields else {
        match record.message.as_deref().filter(|m| !m.is_empty()) {
            Some(message) => out.push_str(message),
            None => out.push_str("no error message available\n"),
        }
        return meta;
    };

    if let Some(severity) = fields.get(DiagnosticField::Severity) {
        out.push_str(&format!("{}:  ", severity));
    }

    let mut verbosity = verbosity;
    if verbosity == Verbosity::SqlStateOnly {
        if let Some(code) = fields.get(DiagnosticField::SqlState) {
            out.push_str(code);
            out.push('\n');
            return meta;
        }
        tracing::debug!("no SQLSTATE in record, rendering tersely");
        verbosity = Verbosity::Terse;
    }

    if verbosity == Verbosity::Verbose
        && let Some(code) = fields.get(DiagnosticField::SqlState)
    {
        out.push_str(&format!("{}: ", code));
    }

    if let Some(primary) = fields.get(DiagnosticField::MessagePrimary) {
        out.push_str(primary);
    }

    // Either remember the position for a cursor display or append it inline.
    let mut cursor: Option<(&str, i64)> = None;
    if let Some(position) = fields.get(DiagnosticField::StatementPosition) {
        match record.query.as_deref() {
            Some(query) if verbosity != Verbosity::Terse => {
                cursor = Some((query, parse_position(position)));
            }
            _ => out.push_str(&format!(" at character {}", position)),
        }
    } else if let Some(position) = fields.get(DiagnosticField::InternalPosition) {
        meta.internal_query = true;
        match fields.get(DiagnosticField::InternalQuery) {
            Some(query) if verbosity != Verbosity::Terse => {
                cursor = Some((query, parse_position(position)));
            }
            _ => out.push_str(&format!(" at character {}", position)),
        }
    }
    out.push('\n');

    if verbosity != Verbosity::Terse {
        if let Some((query, position)) = cursor
            && position > 0
        {
            meta.position = report_position(out, query, position, &record.encoding);
        }
        push_labeled(out, "DETAIL", fields.get(DiagnosticField::MessageDetail));
        push_labeled(out, "HINT", fields.get(DiagnosticField::MessageHint));
        push_labeled(out, "QUERY", fields.get(DiagnosticField::InternalQuery));

        let show = match show_context {
            ContextVisibility::Always => true,
            ContextVisibility::ErrorsOnly => record.status == ResultStatus::FatalError,
            ContextVisibility::Never => false,
        };
        if show {
            push_labeled(out, "CONTEXT", fields.get(DiagnosticField::Context));
        }
    }

    if verbosity == Verbosity::Verbose {
        for (label, field) in NAME_FIELDS {
            push_labeled(out, label, fields.get(field));
        }

        let function = fields.get(DiagnosticField::SourceFunction);
        let file = fields.get(DiagnosticField::SourceFile);
        let line = fields.get(DiagnosticField::SourceLine);
        if function.is_some() || file.is_some() || line.is_some() {
            out.push_str("LOCATION:  ");
            if let Some(function) = function {
                out.push_str(&format!("{}, ", function));
            }
            // A lone file or line is not worth printing.
            if let (Some(file), Some(line)) = (file, line) {
                out.push_str(&format!("{}:{}", file, line));
            }
            out.push('\n');
        }
    }

    meta
}

/// Renders `record` into a fresh string.
pub fn error_message(
    record: &ErrorRecord,
    verbosity: Verbosity,
    show_context: ContextVisibility,
) -> String {
    let mut out = String::new();
    build_message(&mut out, Some(record), verbosity, show_context);
    out
}

/// Reads a position field the way C's `atoi` does: optional leading
/// whitespace and sign, then the leading run of digits. No digits means 0.
pub fn parse_position(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });
    if negative { -value } else { value }
}

fn push_labeled(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        out.push_str(&format!("{}:  {}\n", label, value));
    }
}
