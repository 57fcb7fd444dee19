//! Integer literal lexer.
//!
//! Accepts an optionally signed run of decimal digits, or an unsigned
//! `0x`/`0o`/`0b` literal. Surrounding whitespace is ignored, using the
//! ECMAScript whitespace and line-terminator set rather than Unicode
//! `White_Space`. An empty string is rejected instead of being read as zero.

use std::sync::LazyLock;

use num_bigint::BigInt;
use regex::Regex;
use thiserror::Error;

/// Why raw text could not be read as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("not an integer literal")]
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(BigInt),
    Rejected(ParseError),
}

impl ParseOutcome {
    pub fn into_result(self) -> Result<BigInt, ParseError> {
        match self {
            ParseOutcome::Parsed(value) => Ok(value),
            ParseOutcome::Rejected(err) => Err(err),
        }
    }
}

/// Parse raw user text as an arbitrary-precision integer.
pub fn parse(text: &str) -> ParseOutcome {
    let trimmed = text.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return ParseOutcome::Rejected(ParseError::Empty);
    }
    match parse_literal(trimmed) {
        Some(value) => ParseOutcome::Parsed(value),
        None => ParseOutcome::Rejected(ParseError::Malformed),
    }
}

/// ECMAScript `WhiteSpace` and `LineTerminator` code points.
///
/// Differs from [`char::is_whitespace`]: U+FEFF is included, U+0085 is not.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{FEFF}'
            | '\n'
            | '\r'
            | '\u{2028}'
            | '\u{2029}'
            // Zs
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Whole-string literal grammar. Only decimal literals may carry a sign.
static LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<sign>[+-]?)(?P<dec>[0-9]+)|0[xX](?P<hex>[0-9a-fA-F]+)|0[oO](?P<oct>[0-7]+)|0[bB](?P<bin>[01]+))$",
    )
    .expect("literal regex")
});

fn parse_literal(literal: &str) -> Option<BigInt> {
    let caps = LITERAL_RE.captures(literal)?;
    if let Some(digits) = caps.name("dec") {
        let magnitude = BigInt::parse_bytes(digits.as_str().as_bytes(), 10)?;
        let negative = caps.name("sign").is_some_and(|sign| sign.as_str() == "-");
        return Some(if negative { -magnitude } else { magnitude });
    }
    let (digits, radix) = [("hex", 16), ("oct", 8), ("bin", 2)]
        .into_iter()
        .find_map(|(group, radix)| caps.name(group).map(|digits| (digits, radix)))?;
    BigInt::parse_bytes(digits.as_str().as_bytes(), radix)
}
