//! Identifiers of the error message fields carried by an ErrorResponse or
//! NoticeResponse.

use std::fmt;
use std::str::FromStr;

use super::error::DiagError;

/// One named piece of structured error information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticField {
    Severity,
    SeverityNonlocalized,
    SqlState,
    MessagePrimary,
    MessageDetail,
    MessageHint,
    StatementPosition,
    InternalPosition,
    InternalQuery,
    Context,
    SchemaName,
    TableName,
    ColumnName,
    DatatypeName,
    ConstraintName,
    SourceFile,
    SourceLine,
    SourceFunction,
}

impl DiagnosticField {
    pub const COUNT: usize = 18;

    /// Every field, in protocol documentation order.
    pub const ALL: [DiagnosticField; Self::COUNT] = [
        DiagnosticField::Severity,
        DiagnosticField::SeverityNonlocalized,
        DiagnosticField::SqlState,
        DiagnosticField::MessagePrimary,
        DiagnosticField::MessageDetail,
        DiagnosticField::MessageHint,
        DiagnosticField::StatementPosition,
        DiagnosticField::InternalPosition,
        DiagnosticField::InternalQuery,
        DiagnosticField::Context,
        DiagnosticField::SchemaName,
        DiagnosticField::TableName,
        DiagnosticField::ColumnName,
        DiagnosticField::DatatypeName,
        DiagnosticField::ConstraintName,
        DiagnosticField::SourceFile,
        DiagnosticField::SourceLine,
        DiagnosticField::SourceFunction,
    ];

    /// Slot of this field in a dense per-field table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The single-byte identification token used on the wire.
    pub fn code(self) -> char {
        match self {
            DiagnosticField::Severity => 'S',
            DiagnosticField::SeverityNonlocalized => 'V',
            DiagnosticField::SqlState => 'C',
            DiagnosticField::MessagePrimary => 'M',
            DiagnosticField::MessageDetail => 'D',
            DiagnosticField::MessageHint => 'H',
            DiagnosticField::StatementPosition => 'P',
            DiagnosticField::InternalPosition => 'p',
            DiagnosticField::InternalQuery => 'q',
            DiagnosticField::Context => 'W',
            DiagnosticField::SchemaName => 's',
            DiagnosticField::TableName => 't',
            DiagnosticField::ColumnName => 'c',
            DiagnosticField::DatatypeName => 'd',
            DiagnosticField::ConstraintName => 'n',
            DiagnosticField::SourceFile => 'F',
            DiagnosticField::SourceLine => 'L',
            DiagnosticField::SourceFunction => 'R',
        }
    }

    /// Human readable key, as used by JavaScript/JSON client libraries.
    pub fn name(self) -> &'static str {
        match self {
            DiagnosticField::Severity => "severity",
            DiagnosticField::SeverityNonlocalized => "severityNonlocalized",
            DiagnosticField::SqlState => "code",
            DiagnosticField::MessagePrimary => "message",
            DiagnosticField::MessageDetail => "detail",
            DiagnosticField::MessageHint => "hint",
            DiagnosticField::StatementPosition => "position",
            DiagnosticField::InternalPosition => "internalPosition",
            DiagnosticField::InternalQuery => "internalQuery",
            DiagnosticField::Context => "where",
            DiagnosticField::SchemaName => "schema",
            DiagnosticField::TableName => "table",
            DiagnosticField::ColumnName => "column",
            DiagnosticField::DatatypeName => "dataType",
            DiagnosticField::ConstraintName => "constraint",
            DiagnosticField::SourceFile => "file",
            DiagnosticField::SourceLine => "line",
            DiagnosticField::SourceFunction => "routine",
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.code() == code)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for DiagnosticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiagnosticField {
    type Err = DiagError;

    /// Accepts either the one-character code or the descriptive name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let by_code = match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code),
            _ => None,
        };
        by_code
            .or_else(|| Self::from_name(s))
            .ok_or_else(|| DiagError::UnknownField(s.to_string()))
    }
}
