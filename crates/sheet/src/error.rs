//! Error types for stylesheet parsing.

use thiserror::Error;

/// Errors that can occur while turning CSS source into a [`StyleSheet`](crate::StyleSheet).
///
/// # Examples
///
/// ```rust
/// use sheet::parse_stylesheet;
///
/// // Missing closing brace
/// let result = parse_stylesheet("body { display: grid;");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug)]
pub enum SheetError {
    /// Invalid CSS syntax was encountered during parsing.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),

    /// A block comment was opened but never closed.
    #[error("Unterminated comment starting at byte {0}")]
    UnterminatedComment(usize),

    /// An I/O error occurred while reading a stylesheet file.
    #[error("I/O error reading stylesheet")]
    Io(#[from] std::io::Error),
}
