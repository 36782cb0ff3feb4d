//! Error types for Abstracta operations.
//!
//! - [`ValidationError`] covers structurally invalid diagrams and style
//!   settings. It is always returned to the caller, never recovered.
//! - [`AbstractaError`] is the top-level error wrapping validation, I/O,
//!   input and export failures.

use std::{io, ops::Range};

use thiserror::Error;

/// Invalid diagram or style input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("dependent variable name is empty")]
    EmptyDependent,

    #[error("diagram has no relationships")]
    NoEdges,

    #[error("relationship #{index} has an empty variable name")]
    EmptyVariable { index: usize },

    #[error("independent variable `{0}` appears more than once")]
    DuplicateVariable(String),

    #[error("`{0}` is both the dependent variable and an independent variable")]
    SelfLoop(String),

    #[error("no color configured for relationship code `{0}`")]
    MissingColor(String),

    #[error("invalid color for `{field}`: {message}")]
    InvalidColor { field: String, message: String },

    #[error("edge width {0} is outside the supported range 1..=8")]
    EdgeWidthOutOfRange(f32),

    #[error("radial layout radius must be positive, got {0}")]
    InvalidRadius(f32),
}

impl ValidationError {
    /// Returns a stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyDependent => "abstracta::empty_dependent",
            Self::NoEdges => "abstracta::no_edges",
            Self::EmptyVariable { .. } => "abstracta::empty_variable",
            Self::DuplicateVariable(_) => "abstracta::duplicate_variable",
            Self::SelfLoop(_) => "abstracta::self_loop",
            Self::MissingColor(_) => "abstracta::missing_color",
            Self::InvalidColor { .. } => "abstracta::invalid_color",
            Self::EdgeWidthOutOfRange(_) => "abstracta::edge_width",
            Self::InvalidRadius(_) => "abstracta::radius",
        }
    }

    /// Returns a hint on how to fix the input, when there is one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::EmptyDependent => Some("set `dependent` to the outcome variable name"),
            Self::NoEdges => Some("add at least one independent variable with a relationship code"),
            Self::DuplicateVariable(_) => {
                Some("each independent variable may only point at the dependent variable once")
            }
            Self::SelfLoop(_) => Some("remove the dependent variable from the independent variables"),
            Self::MissingColor(_) => Some("every known relationship code needs a color"),
            Self::EdgeWidthOutOfRange(_) => Some("use an edge width between 1 and 8"),
            _ => None,
        }
    }
}

/// The main error type for Abstracta operations.
#[derive(Debug, Error)]
pub enum AbstractaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed diagram input, with the byte range of the offending text
    /// when it is known.
    #[error("Input error: {message}")]
    Input {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl AbstractaError {
    /// Create a new `Input` error with the associated source text.
    pub fn new_input_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Input {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}
