//! Error types with diagnostics using miette
//!
//! `PlacementError` means the caller built a bad request. "Nothing fits" is
//! not an error; it is `PlacementResult::NoFit`.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (file path or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Zero-length span at the end of the input.
    pub fn end_span(&self) -> SourceSpan {
        (self.source.len(), 0).into()
    }
}

// ============================================================================
// Placement Errors
// ============================================================================

/// Errors for malformed placement requests
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PlacementError {
    #[error("overlay max {dimension} is invalid ({value}): {reason}")]
    #[diagnostic(
        code(popplace::request::overlay_size),
        help("set the overlay's maximum width and height to finite positive values before placing it")
    )]
    InvalidOverlaySize {
        dimension: &'static str,
        value: f64,
        reason: NumericError,
    },

    #[error("side preference order is empty")]
    #[diagnostic(
        code(popplace::request::empty_preference),
        help("pass at least one of left, top, right, bottom")
    )]
    EmptyPreferenceOrder,

    #[error("margin is invalid ({value}): {reason}")]
    #[diagnostic(code(popplace::request::margin))]
    InvalidMargin { value: f64, reason: NumericError },

    #[error("{field} is not finite")]
    #[diagnostic(code(popplace::request::non_finite))]
    NonFiniteGeometry { field: &'static str },

    #[error("{field} {dimension} is invalid ({value}): {reason}")]
    #[diagnostic(code(popplace::request::invalid_size))]
    InvalidSize {
        field: &'static str,
        dimension: &'static str,
        value: f64,
        reason: NumericError,
    },
}

// ============================================================================
// Scenario Errors
// ============================================================================

/// Errors that occur while reading a scenario description
#[derive(Error, Diagnostic, Debug)]
pub enum ScenarioError {
    #[error("syntax error: {message}")]
    #[diagnostic(code(popplace::scenario::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid number: {text}")]
    #[diagnostic(code(popplace::scenario::invalid_number))]
    InvalidNumber {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a number")]
        span: SourceSpan,
    },

    #[error("duplicate `{keyword}` statement")]
    #[diagnostic(
        code(popplace::scenario::duplicate),
        help("each statement may appear at most once")
    )]
    Duplicate {
        keyword: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("first given here")]
        first: SourceSpan,
        #[label("given again here")]
        again: SourceSpan,
    },

    #[error("missing `{keyword}` statement")]
    #[diagnostic(code(popplace::scenario::missing))]
    Missing {
        keyword: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected before end of input")]
        span: SourceSpan,
    },

    #[error("malformed scenario: {message}")]
    #[diagnostic(code(popplace::scenario::malformed))]
    Malformed {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("while reading this")]
        span: SourceSpan,
    },
}

impl ScenarioError {
    /// Diagnostic code, handy for matching in tests.
    pub fn kind(&self) -> &'static str {
        match self {
            ScenarioError::Syntax { .. } => "syntax",
            ScenarioError::InvalidNumber { .. } => "invalid_number",
            ScenarioError::Duplicate { .. } => "duplicate",
            ScenarioError::Missing { .. } => "missing",
            ScenarioError::Malformed { .. } => "malformed",
        }
    }
}
