//! Error records: the broken-down fields of one error or notice plus the
//! bits of client state needed to render it.

use serde_json::Value;

use super::error::{DiagError, Result};
use super::field::DiagnosticField;
use super::sqlstate::{SqlStateCondition, lookup_sqlstate};
use crate::rendering::encoding::ClientEncoding;

/// Dense per-field table; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticFields {
    values: [Option<String>; DiagnosticField::COUNT],
}

impl DiagnosticFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DiagnosticField) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    pub fn set(&mut self, field: DiagnosticField, value: impl Into<String>) {
        self.values[field.index()] = Some(value.into());
    }

    pub fn remove(&mut self, field: DiagnosticField) -> Option<String> {
        self.values[field.index()].take()
    }

    pub fn with(mut self, field: DiagnosticField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Present fields in protocol order.
    pub fn iter(&self) -> impl Iterator<Item = (DiagnosticField, &str)> {
        DiagnosticField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }
}

impl FromIterator<(DiagnosticField, String)> for DiagnosticFields {
    fn from_iter<I: IntoIterator<Item = (DiagnosticField, String)>>(iter: I) -> Self {
        let mut fields = DiagnosticFields::new();
        for (field, value) in iter {
            fields.set(field, value);
        }
        fields
    }
}

/// Status of the result that carried the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultStatus {
    /// An ERROR/FATAL/PANIC response that failed the command
    #[default]
    FatalError,
    /// A notice or warning
    NonfatalError,
}

impl ResultStatus {
    /// Classifies a (preferably non-localized) severity. A missing severity
    /// is treated as a failed command.
    pub fn from_severity(severity: Option<&str>) -> Self {
        match severity {
            None => ResultStatus::FatalError,
            Some(severity) => match severity.trim().to_ascii_uppercase().as_str() {
                "ERROR" | "FATAL" | "PANIC" => ResultStatus::FatalError,
                _ => ResultStatus::NonfatalError,
            },
        }
    }
}

/// One error as delivered to the client.
///
/// `fields` is `None` for client-generated errors that only carry a
/// pre-rendered `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorRecord {
    pub fields: Option<DiagnosticFields>,
    pub message: Option<String>,
    /// Text of the statement the error refers to, if the client kept it
    pub query: Option<String>,
    pub status: ResultStatus,
    pub encoding: ClientEncoding,
}

impl ErrorRecord {
    /// A record with structured fields and nothing else.
    pub fn new(fields: DiagnosticFields) -> Self {
        let status = status_for(&fields);
        Self {
            fields: Some(fields),
            status,
            ..Self::default()
        }
    }

    /// A record without structured fields.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: DiagnosticField, value: impl Into<String>) -> Self {
        self.fields.get_or_insert_with(DiagnosticFields::new).set(field, value);
        if matches!(field, DiagnosticField::Severity | DiagnosticField::SeverityNonlocalized)
            && let Some(fields) = &self.fields
        {
            self.status = status_for(fields);
        }
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_status(mut self, status: ResultStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_encoding(mut self, encoding: ClientEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn field(&self, field: DiagnosticField) -> Option<&str> {
        self.fields.as_ref().and_then(|fields| fields.get(field))
    }

    pub fn has_fields(&self) -> bool {
        self.fields.is_some()
    }

    pub fn sqlstate(&self) -> Option<&str> {
        self.field(DiagnosticField::SqlState)
    }

    /// Registry entry for the SQLSTATE field, if known.
    pub fn condition(&self) -> Option<&'static SqlStateCondition> {
        self.sqlstate().and_then(lookup_sqlstate)
    }

    /// Builds a record from a loose JSON object keyed by field codes
    /// (`"M"`) or names (`"message"`). The code key wins when both exist.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(DiagError::NotAnObject(json_kind(value)));
        };

        let mut fields = DiagnosticFields::new();
        for field in DiagnosticField::ALL {
            let by_code = map.get(&field.code().to_string()).and_then(json_text);
            let by_name = map.get(field.name()).and_then(json_text);
            if let Some(value) = by_code.or(by_name) {
                fields.set(field, value);
            }
        }

        let query = map.get("query").and_then(|q| q.as_str()).map(str::to_string);
        let encoding = map
            .get("clientEncoding")
            .and_then(|e| e.as_str())
            .and_then(ClientEncoding::from_name)
            .unwrap_or_default();

        let mut record = if fields.is_empty() {
            ErrorRecord::default()
        } else {
            ErrorRecord::new(fields)
        };
        record.query = query;
        record.encoding = encoding;
        Ok(record)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }
}

fn status_for(fields: &DiagnosticFields) -> ResultStatus {
    ResultStatus::from_severity(
        fields
            .get(DiagnosticField::SeverityNonlocalized)
            .or_else(|| fields.get(DiagnosticField::Severity)),
    )
}

fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
