//! Structured error types shared across grin crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`GrinError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the grin engine.
///
/// A search that finds no witness is not an error: it is reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GrinError {
    /// Rejected caller input (bad `k`, non-integral values, unsupported method).
    #[error("invalid argument: {0}")]
    InvalidArgument(ErrorInfo),
    /// Graph structural errors.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Search interruption (cancellation or deadline).
    #[error("search error: {0}")]
    Search(ErrorInfo),
    /// ILP oracle failures.
    #[error("ilp error: {0}")]
    Ilp(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl GrinError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GrinError::InvalidArgument(info)
            | GrinError::Graph(info)
            | GrinError::Search(info)
            | GrinError::Ilp(info)
            | GrinError::Serde(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Shorthand for an [`GrinError::InvalidArgument`] error.
    pub fn invalid_argument(code: impl Into<String>, message: impl Into<String>) -> Self {
        GrinError::InvalidArgument(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`GrinError::Graph`] error.
    pub fn graph(code: impl Into<String>, message: impl Into<String>) -> Self {
        GrinError::Graph(ErrorInfo::new(code, message))
    }

    /// Adds a context entry to the payload, keeping the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            GrinError::InvalidArgument(info) => {
                GrinError::InvalidArgument(info.with_context(key, value))
            }
            GrinError::Graph(info) => GrinError::Graph(info.with_context(key, value)),
            GrinError::Search(info) => GrinError::Search(info.with_context(key, value)),
            GrinError::Ilp(info) => GrinError::Ilp(info.with_context(key, value)),
            GrinError::Serde(info) => GrinError::Serde(info.with_context(key, value)),
        }
    }
}
