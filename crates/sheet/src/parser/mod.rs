//! CSS parsing and stylesheet data structures.
//!
//! - [`parse_stylesheet`]: Main entry point for parsing CSS source
//! - [`load_stylesheet`]: Same, reading the source from a file
//! - [`StyleSheet`]: Ordered list of parsed rules
//! - [`Rule`]: Selector list plus raw declarations
//! - [`Declaration`]: A property with its raw, whitespace-normalized value
//!
//! ## Submodules
//!
//! - [`comments`]: Block comment stripping
//! - [`selectors`]: Selector parsing (type, class, ID, pseudo, attribute, combinators)
//! - [`stylesheet`]: Core data structures and canonical selector text
//! - [`values`]: Raw value extraction and normalization
//!
//! ## Example
//!
//! ```rust
//! use sheet::parser::parse_stylesheet;
//!
//! let stylesheet = parse_stylesheet("nav>ul { display: flex; }").unwrap();
//! let rule = &stylesheet.rules[0];
//!
//! assert_eq!(rule.selector_text(), "nav > ul");
//! assert_eq!(rule.property_value("display"), Some("flex"));
//! ```

pub mod comments;
pub mod selectors;
pub mod stylesheet;
pub mod values;

pub use crate::parser::comments::strip_comments;
pub use crate::parser::stylesheet::{
    Combinator, ComplexSelector, CompoundSelector, Declaration, Rule, Selector, SelectorList,
    SelectorPart, StyleSheet,
};

use std::fs;
use std::path::Path;

use crate::SheetError;
use crate::parser::selectors::parse_complex_selector;
use crate::parser::values::{normalize_value, parse_ident, strip_important, take_raw_value};

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, multispace0},
    combinator::{map, opt},
    multi::many0,
    sequence::{delimited, preceded, tuple},
};

/// Parses a full stylesheet. At-rules are skipped.
pub fn parse_stylesheet(source: &str) -> Result<StyleSheet, SheetError> {
    let clean_source = strip_comments(source)?;

    let (remaining, items) = many0(alt((
        map(parse_rule, Some),
        map(skip_at_rule, |_| None),
    )))(clean_source.as_str())
    .map_err(|e| SheetError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(SheetError::InvalidSyntax(format!(
            "Unexpected tokens at end of stylesheet: {}",
            remaining.trim()
        )));
    }

    let rules: Vec<Rule> = items.into_iter().flatten().collect();
    log::debug!("parsed stylesheet with {} rules", rules.len());
    Ok(StyleSheet { rules })
}

/// Reads and parses a stylesheet file.
pub fn load_stylesheet(path: impl AsRef<Path>) -> Result<StyleSheet, SheetError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    log::debug!("loaded stylesheet {}", path.display());
    parse_stylesheet(&source)
}

/// Top-level parser for a CSS rule (e.g., "body { display: grid; }").
pub fn parse_rule(input: &str) -> IResult<&str, Rule> {
    let (input, _) = multispace0(input)?;
    let (input, selectors) = parse_selector_list(input)?;
    let (input, _) = multispace0(input)?;

    let (input, declarations) = delimited(
        char('{'),
        parse_declarations,
        preceded(multispace0, char('}')),
    )(input)?;

    Ok((input, Rule::new(selectors, declarations)))
}

/// Parses a comma-separated list of selectors (e.g., "header, footer").
pub fn parse_selector_list(input: &str) -> IResult<&str, SelectorList> {
    let (input, _) = multispace0(input)?;
    let (input, first) = parse_complex_selector(input)?;
    let (input, rest) = many0(preceded(
        tuple((multispace0, char(','), multispace0)),
        parse_complex_selector,
    ))(input)?;

    let mut selectors = vec![first];
    selectors.extend(rest);
    Ok((input, SelectorList::new(selectors)))
}

/// Parses multiple declarations inside a block.
pub fn parse_declarations(input: &str) -> IResult<&str, Vec<Declaration>> {
    let (input, declarations) = many0(parse_single_declaration)(input)?;
    // Stray semicolons (`a: b;;`) are tolerated
    let (input, _) = many0(preceded(multispace0, char(';')))(input)?;
    Ok((input, declarations))
}

fn parse_single_declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, _) = many0(preceded(multispace0, char(';')))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, property) = parse_ident(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, raw) = take_raw_value(input)?;

    let (value, important) = strip_important(raw);
    let declaration = Declaration {
        property: property.to_ascii_lowercase(),
        value: normalize_value(value),
        important,
    };

    let (input, _) = multispace0(input)?;
    let (input, _) = opt(char(';'))(input)?;
    Ok((input, declaration))
}

/// Skips an at-rule: either a statement ending in `;` or a braced block.
fn skip_at_rule(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    let (input, _) = preceded(char('@'), parse_ident)(input)?;

    for (i, c) in input.char_indices() {
        match c {
            ';' => return Ok((&input[i + 1..], ())),
            '{' => return take_until_balanced_braces(&input[i..]),
            _ => {}
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::TakeUntil,
    )))
}

fn take_until_balanced_braces(input: &str) -> IResult<&str, ()> {
    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        if c == '{' {
            depth += 1;
        } else if c == '}' {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Ok((&input[i + 1..], ()));
            }
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::TakeUntil,
    )))
}
