use crate::parser::{
    Combinator, ComplexSelector, CompoundSelector, Selector, SelectorPart, values::parse_ident,
};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_until,
    character::complete::{char, multispace0},
    combinator::{map, recognize},
    multi::many0,
    sequence::{delimited, pair, preceded, tuple},
};

/// Parses a simple selector: Type, .Class, #ID, :pseudo, [attr] or `*`.
pub fn parse_simple_selector(input: &str) -> IResult<&str, Selector> {
    alt((
        map(preceded(char('#'), parse_ident), |s| {
            Selector::Id(s.to_string())
        }),
        map(preceded(char('.'), parse_ident), |s| {
            Selector::Class(s.to_string())
        }),
        parse_pseudo_function,
        // `::before` keeps one colon in the name so it serializes back unchanged
        map(preceded(char(':'), recognize(pair(opt_colon, parse_ident))), |s| {
            Selector::PseudoClass(s.to_string())
        }),
        map(char('*'), |_| Selector::Universal),
        parse_attribute_selector,
        map(parse_ident, |s| Selector::Type(s.to_string())),
    ))(input)
}

fn opt_colon(input: &str) -> IResult<&str, Option<char>> {
    nom::combinator::opt(char(':'))(input)
}

/// Parses a functional pseudo-class like `:nth-of-type(2)` or `:not(:first-child)`.
fn parse_pseudo_function(input: &str) -> IResult<&str, Selector> {
    let (input, (_, name, arg)) = tuple((
        char(':'),
        parse_ident,
        delimited(char('('), take_balanced_argument, char(')')),
    ))(input)?;
    Ok((
        input,
        Selector::PseudoFunction(name.to_string(), arg.trim().to_string()),
    ))
}

/// Takes text up to the `)` closing an already opened parenthesis.
fn take_balanced_argument(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Ok((&input[i..], &input[..i])),
            ')' => depth -= 1,
            _ => {}
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::TakeUntil,
    )))
}

/// Parses a compound selector (e.g., "button.primary#submit").
pub fn parse_compound_selector(input: &str) -> IResult<&str, CompoundSelector> {
    let (input, first) = parse_simple_selector(input)?;
    // No whitespace between parts: `li:hover` is one compound, `li :hover` is two
    let (input, rest) = many0(parse_simple_selector)(input)?;

    let mut selectors = vec![first];
    selectors.extend(rest);
    Ok((input, CompoundSelector::new(selectors)))
}

/// Parses a complex selector with combinators (e.g., "nav > ul").
pub fn parse_complex_selector(input: &str) -> IResult<&str, ComplexSelector> {
    let (mut input, mut current_compound) = parse_compound_selector(input)?;
    let mut parts = Vec::new();

    loop {
        let (rem, ws) = multispace0(input)?;

        let combinator_match: IResult<&str, Combinator> = alt((
            map(char('>'), |_| Combinator::Child),
            map(char('+'), |_| Combinator::AdjacentSibling),
            map(char('~'), |_| Combinator::GeneralSibling),
        ))(rem);

        if let Ok((after_op, found_combinator)) = combinator_match {
            let (after_ws, _) = multispace0(after_op)?;
            match parse_compound_selector(after_ws) {
                Ok((next_input, next_compound)) => {
                    parts.push(SelectorPart::new(current_compound, found_combinator));
                    current_compound = next_compound;
                    input = next_input;
                    continue;
                }
                Err(_) => break,
            }
        }

        // Whitespace alone is the descendant combinator
        if !ws.is_empty() {
            match parse_compound_selector(rem) {
                Ok((next_input, next_compound)) => {
                    parts.push(SelectorPart::new(current_compound, Combinator::Descendant));
                    current_compound = next_compound;
                    input = next_input;
                    continue;
                }
                Err(_) => break,
            }
        }

        break;
    }

    parts.push(SelectorPart::new(current_compound, Combinator::None));
    Ok((input, ComplexSelector::new(parts)))
}

fn parse_attribute_selector(input: &str) -> IResult<&str, Selector> {
    let (input, content) = delimited(char('['), take_until("]"), char(']'))(input)?;

    match content.split_once('=') {
        Some((name, value)) => Ok((
            input,
            Selector::Attribute(name.trim().to_string(), value.trim().to_string()),
        )),
        None => Ok((
            input,
            Selector::Attribute(content.trim().to_string(), String::new()),
        )),
    }
}
