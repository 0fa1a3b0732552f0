//! Pixel length tokens.

use std::fmt;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, map, map_opt, map_res, opt, recognize},
    sequence::{pair, tuple},
};

use crate::error::CheckError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// CSS pixels.
    #[default]
    Px,
}

/// A single numeric declaration token such as `64px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueToken {
    pub magnitude: f64,
    pub unit: Unit,
}

impl ValueToken {
    pub fn px(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: Unit::Px,
        }
    }

    /// Parses `<number>px`. A bare zero is read as `0px`, the way browsers
    /// serialize `margin: 0`. The whole token must be consumed; `2em`, `5`
    /// and `64px;` are all rejected.
    pub fn parse(raw: &str) -> Result<Self, CheckError> {
        let raw = raw.trim();
        all_consuming(parse_px)(raw)
            .map(|(_, token)| token)
            .map_err(|_| CheckError::UnparsableValue {
                value: raw.to_string(),
                expected: "a pixel length",
            })
    }
}

impl fmt::Display for ValueToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Px => write!(f, "{}px", self.magnitude),
        }
    }
}

/// Parse a signed integer or decimal number (`64`, `-1.5`, `.5`).
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                recognize(pair(char('.'), digit1)),
            )),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

fn parse_px(input: &str) -> IResult<&str, ValueToken> {
    alt((
        map(pair(parse_number, tag_no_case("px")), |(magnitude, _)| {
            ValueToken::px(magnitude)
        }),
        // Lengths may omit the unit only when they are zero
        map_opt(parse_number, |magnitude| {
            (magnitude == 0.0).then(|| ValueToken::px(0.0))
        }),
    ))(input)
}
