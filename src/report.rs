//! One-call rendering of an error record together with the query that
//! caused it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostics::{DiagnosticField, ErrorRecord, MessageOptions};
use crate::rendering::{build_message, render_query_listing, render_values};

/// The statement a client sent, with its bound parameter values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub text: Option<String>,
    pub values: Option<Vec<Value>>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            values: None,
        }
    }

    pub fn with_values(mut self, values: Vec<Value>) -> Self {
        self.values = Some(values);
        self
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Query::new(text)
    }
}

/// Error message, query listing and values, rendered per [`MessageOptions`].
#[derive(Debug, Clone)]
pub struct ErrorReport<'a> {
    record: &'a ErrorRecord,
    query: Option<Query>,
    options: MessageOptions,
}

impl<'a> ErrorReport<'a> {
    pub fn new(record: &'a ErrorRecord) -> Self {
        Self {
            record,
            query: None,
            options: MessageOptions::default(),
        }
    }

    pub fn with_query(mut self, query: impl Into<Query>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_options(mut self, options: MessageOptions) -> Self {
        self.options = options;
        self
    }

    pub fn render(&self) -> String {
        // The supplied query text stands in for the statement the record
        // refers to.
        let supplied_text = self.query.as_ref().and_then(|q| q.text.clone());
        let with_text;
        let record = match supplied_text {
            Some(text) => {
                with_text = self.record.clone().with_query(text);
                &with_text
            }
            None => self.record,
        };

        let mut out = String::new();
        let meta = build_message(
            &mut out,
            Some(record),
            self.options.verbosity,
            self.options.show_context,
        );
        out.truncate(out.trim_end().len());
        if out.is_empty() {
            let fallback = record
                .message
                .as_deref()
                .filter(|m| !m.is_empty())
                .or_else(|| record.field(DiagnosticField::MessagePrimary))
                .unwrap_or_default();
            out.push_str(fallback);
        }

        let Some(query) = &self.query else {
            return out;
        };
        if self.options.hide_query {
            return out;
        }

        let mut listed = false;
        if !self.options.hide_query_text
            && let Some(text) = &query.text
        {
            let detail = meta.position.as_ref().filter(|_| !meta.internal_query);
            out.push('\n');
            render_query_listing(&mut out, Some(text), detail);
            listed = true;
        }
        if !self.options.hide_query_values
            && let Some(values) = &query.values
        {
            if listed {
                out.push('\n');
            }
            out.push('\n');
            render_values(&mut out, values);
        }
        out
    }
}

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
