//! Verbosity policy and rendering configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{DiagError, Result};

/// Environment variable overriding [`MessageOptions::verbosity`].
pub const VERBOSITY_ENV: &str = "PQDIAG_VERBOSITY";
/// Environment variable overriding [`MessageOptions::show_context`].
pub const SHOW_CONTEXT_ENV: &str = "PQDIAG_SHOW_CONTEXT";

/// How much diagnostic detail is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Single-line error messages
    Terse,
    /// Recommended style
    #[default]
    Default,
    /// All available fields
    Verbose,
    /// Only severity and SQLSTATE code
    #[serde(rename = "sqlstate")]
    SqlStateOnly,
}

impl Verbosity {
    pub fn name(self) -> &'static str {
        match self {
            Verbosity::Terse => "terse",
            Verbosity::Default => "default",
            Verbosity::Verbose => "verbose",
            Verbosity::SqlStateOnly => "sqlstate",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Verbosity {
    type Err = DiagError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terse" => Ok(Verbosity::Terse),
            "default" => Ok(Verbosity::Default),
            "verbose" => Ok(Verbosity::Verbose),
            "sqlstate" => Ok(Verbosity::SqlStateOnly),
            _ => Err(DiagError::UnknownVerbosity(s.to_string())),
        }
    }
}

/// When the CONTEXT field is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextVisibility {
    Never,
    /// Show CONTEXT for errors only
    #[default]
    #[serde(rename = "errors")]
    ErrorsOnly,
    Always,
}

impl ContextVisibility {
    pub fn name(self) -> &'static str {
        match self {
            ContextVisibility::Never => "never",
            ContextVisibility::ErrorsOnly => "errors",
            ContextVisibility::Always => "always",
        }
    }
}

impl fmt::Display for ContextVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContextVisibility {
    type Err = DiagError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(ContextVisibility::Never),
            "errors" => Ok(ContextVisibility::ErrorsOnly),
            "always" => Ok(ContextVisibility::Always),
            _ => Err(DiagError::UnknownContextVisibility(s.to_string())),
        }
    }
}

/// Settings for rendering a full error report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageOptions {
    pub verbosity: Verbosity,
    pub show_context: ContextVisibility,
    /// Equivalent to setting both `hide_query_text` and `hide_query_values`.
    pub hide_query: bool,
    pub hide_query_text: bool,
    pub hide_query_values: bool,
}

impl MessageOptions {
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_show_context(mut self, show_context: ContextVisibility) -> Self {
        self.show_context = show_context;
        self
    }

    pub fn with_hide_query(mut self, hide_query: bool) -> Self {
        self.hide_query = hide_query;
        self
    }

    /// Defaults overridden by `PQDIAG_VERBOSITY` and `PQDIAG_SHOW_CONTEXT`.
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Apply environment overrides on top of `self`. Unparsable values are
    /// ignored.
    pub fn apply_env(mut self) -> Self {
        if let Ok(value) = env::var(VERBOSITY_ENV) {
            match value.parse() {
                Ok(verbosity) => self.verbosity = verbosity,
                Err(err) => tracing::debug!(%err, "ignoring {VERBOSITY_ENV}"),
            }
        }
        if let Ok(value) = env::var(SHOW_CONTEXT_ENV) {
            match value.parse() {
                Ok(show_context) => self.show_context = show_context,
                Err(err) => tracing::debug!(%err, "ignoring {SHOW_CONTEXT_ENV}"),
            }
        }
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
