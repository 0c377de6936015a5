use std::fmt;

use crate::analysis::SweepAxis;

/// Errors related to sweep grid construction
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// A grid was requested with fewer than one point
    EmptyGrid { count: usize },
    /// Both dimensions of a 2D sweep target the same field
    DuplicateAxis(SweepAxis),
    /// Data length does not match the requested grid shape
    ShapeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyGrid { count } => {
                write!(f, "grid needs at least one point (requested {count})")
            }
            AnalysisError::DuplicateAxis(axis) => {
                write!(f, "both sweep dimensions target {}", axis.label())
            }
            AnalysisError::ShapeMismatch { expected, actual } => {
                write!(f, "grid shape expects {expected} values, got {actual}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Errors raised while reading a scenario document
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// The text could not be parsed
    Parse(String),
    /// The document root is not a key-value object
    NotAnObject,
    /// A field holds something that is not a number
    InvalidField { field: String, reason: String },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Parse(msg) => write!(f, "malformed scenario document: {msg}"),
            DocumentError::NotAnObject => {
                write!(f, "malformed scenario document: expected a key-value object")
            }
            DocumentError::InvalidField { field, reason } => {
                write!(f, "invalid value for '{field}': {reason}")
            }
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        DocumentError::Parse(err.to_string())
    }
}
