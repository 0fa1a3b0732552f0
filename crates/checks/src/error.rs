//! Error types for style and geometry assertions.
//!
//! Failures are layered the way they are detected:
//!
//! - [`CheckError`]: a checker rejected a raw declaration value
//! - [`AssertionError`]: a [`StyleChecker`](crate::StyleChecker) call failed, either
//!   while locating the rule/property or because a checker rejected its value
//! - [`GeometryError`]: a rectangle could not be probed
//!
//! Every variant carries the values needed to print a diagnostic without
//! going back to the stylesheet.

use thiserror::Error;

/// A checker rejected a raw declaration value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckError {
    #[error("expected `{expected}`, found `{actual}`")]
    ValueMismatch { expected: String, actual: String },

    /// The value is not of the shape the checker reads, e.g. `2em` where
    /// a pixel length was required.
    #[error("cannot read `{value}` as {expected}")]
    UnparsableValue { value: String, expected: &'static str },

    #[error("{value}px is outside {min}px..={max}px")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },

    #[error("expected {expected} tokens, found {actual}")]
    TokenCountMismatch { expected: usize, actual: usize },

    /// A sub-checker of a compound check failed on the token at `index`.
    #[error("token {index}: {source}")]
    CompoundToken {
        index: usize,
        #[source]
        source: Box<CheckError>,
    },

    /// Grid rows do not all have the same number of columns.
    #[error("grid rows have differing column counts {counts:?}")]
    RaggedGrid { counts: Vec<usize> },

    /// A named area does not cover a single filled rectangle.
    #[error("grid area `{area}` is not a single rectangle")]
    InvalidGridShape { area: String },

    #[error(
        "expected a grid of {expected_rows} rows x {expected_cols} columns, \
         found {actual_rows} x {actual_cols}"
    )]
    GridShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("grid cell ({row}, {col}): expected area `{expected}`, found `{actual}`")]
    GridCellMismatch {
        row: usize,
        col: usize,
        expected: String,
        actual: String,
    },
}

impl CheckError {
    /// The innermost error, unwrapping compound token wrappers.
    pub fn root(&self) -> &CheckError {
        match self {
            CheckError::CompoundToken { source, .. } => source.root(),
            other => other,
        }
    }
}

/// A [`StyleChecker`](crate::StyleChecker) assertion failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssertionError {
    #[error("no rule matches selector `{selector}`")]
    NoMatchingRule { selector: String },

    #[error("rule `{selector}` does not declare `{property}`")]
    MissingProperty { selector: String, property: String },

    #[error("expected {expected} style sheet(s), found {actual}")]
    SheetCountMismatch { expected: usize, actual: usize },

    #[error("`{selector} {{ {property}: {actual} }}`: {source}")]
    Check {
        selector: String,
        property: String,
        actual: String,
        #[source]
        source: CheckError,
    },
}

impl AssertionError {
    /// The checker failure behind this assertion, if a checker ran.
    pub fn check_error(&self) -> Option<&CheckError> {
        match self {
            AssertionError::Check { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A rectangle could not be turned into an [`ElementBox`](crate::ElementBox).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("rectangle has negative extent {width}x{height}")]
    NegativeExtent { width: f64, height: f64 },

    #[error("rectangle has non-finite coordinates")]
    NonFinite,
}
