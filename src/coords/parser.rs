use once_cell::sync::Lazy;
use regex::Regex;

use crate::coords::errors::{ParseError, ParseResult};
use crate::types::{Coordinates, Point, ReferenceBox};

/// Wrapping markers removed before tokenizing, matched without regard to
/// pairing so unmatched or duplicated tags are tolerated
static DECORATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[()\[\]]|</?point>|</?bbox>").expect("valid regex pattern"));

/// Separators between numeric tokens: whitespace and/or commas, mixed freely
static SEPARATOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,]+").expect("valid regex pattern"));

/// Parse a coordinate-bearing substring in any supported dialect.
///
/// Accepts `(x, y)`, `[x, y]`, `<point>x y</point>`, bare `x y` or
/// `x, y`, and the four-number `<bbox>x1, y1, x2, y2</bbox>` form.
/// Decoration is stripped, the remainder split on whitespace/commas, and
/// the tokens parsed as floats in emission order. Two tokens produce a
/// point with a degenerate box; four produce a box whose representative
/// point is the second number pair.
pub fn parse_coordinates(input: &str) -> ParseResult<Coordinates> {
    let stripped = DECORATION_PATTERN.replace_all(input, " ");
    let tokens: Vec<&str> = SEPARATOR_PATTERN
        .split(stripped.trim())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() < 2 {
        return Err(ParseError::InsufficientCoordinates);
    }

    let mut numbers = Vec::with_capacity(tokens.len());
    for (position, token) in tokens.iter().enumerate() {
        let value = token
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber {
                position,
                token: (*token).to_string(),
            })?;
        numbers.push(value);
    }

    match numbers.len() {
        2 => Ok(Coordinates::from_point(numbers[0], numbers[1])),
        4 => Ok(Coordinates::from_box(
            // The representative point is the middle pair of the four
            // numbers, kept as-is for protocol compatibility.
            Point::new(numbers[1], numbers[2]),
            ReferenceBox {
                x1: numbers[0],
                y1: numbers[1],
                x2: numbers[2],
                y2: numbers[3],
            },
        )),
        _ => Err(ParseError::InsufficientCoordinates),
    }
}
