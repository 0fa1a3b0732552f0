//! Raw declaration value handling.
//!
//! Values are not interpreted here. They are cut out of the source,
//! stripped of `!important` and whitespace-normalized so that a value
//! written across several lines compares the same as a one-line value:
//!
//! ```css
//! body {
//!     grid-template-areas:
//!         "h h"
//!         "n m";
//! }
//! ```
//!
//! yields the raw value `"h h" "n m"`.

use nom::{IResult, bytes::complete::take_while1};

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
///
/// Identifiers are used for property names, type selectors, class names, etc.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Takes raw value text up to the terminating `;` or `}`.
///
/// Terminators inside quoted strings or parentheses do not end the value,
/// so `content: "a;b"` and `background: url(data:x;y)` stay intact.
pub fn take_raw_value(input: &str) -> IResult<&str, &str> {
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';' | '}') if depth == 0 => return Ok((&input[i..], &input[..i])),
            _ => {}
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::TakeUntil,
    )))
}

/// Splits a trailing `!important` off a raw value.
pub fn strip_important(raw: &str) -> (&str, bool) {
    let trimmed = raw.trim_end();
    match trimmed.rfind('!') {
        Some(idx) if trimmed[idx + 1..].trim().eq_ignore_ascii_case("important") => {
            (trimmed[..idx].trim_end(), true)
        }
        _ => (trimmed, false),
    }
}

/// Collapses whitespace runs outside quoted strings into single spaces and trims the ends.
pub fn normalize_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut quote: Option<char> = None;
    let mut pending_space = false;

    for c in raw.trim().chars() {
        if quote.is_none() && c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        match quote {
            Some(q) if c == q => quote = None,
            None if c == '"' || c == '\'' => quote = Some(c),
            _ => {}
        }
        out.push(c);
    }

    out
}
