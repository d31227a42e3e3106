use std::{
    fmt::{self, Display},
    rc::Rc,
};

use num_traits::Num;

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralErr {
    InvalidInteger(Rc<str>),
}

impl Display for LiteralErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInteger(lit) => write!(f, "'{lit}' is not a representable integer."),
        }
    }
}

impl std::error::Error for LiteralErr {}

/// Decodes an integer numeral, hexadecimal when prefixed with `0x`.
///
/// Numerals carry no sign, so `+7`, `-7` and `0x-1` are rejected.
pub fn parse_int<T: Num>(literal: &str) -> Result<T, LiteralErr> {
    let (digits, radix) = match literal.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (literal, 10),
    };
    let invalid = || LiteralErr::InvalidInteger(literal.into());
    if !digits.starts_with(|c: char| c.is_digit(radix)) {
        return Err(invalid());
    }
    T::from_str_radix(digits, radix).map_err(|_| invalid())
}

/// Decodes the body of a string literal (without its quotes).
///
/// `\n`, `\t` and `\r` become control characters; any other escaped
/// character stands for itself, which covers `\\` and `\"`.
pub fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            // A dangling backslash only happens in truncated input.
            None => out.push('\\'),
        }
    }
    out
}

/// Strips the surrounding quotes from a STRING_DATA literal. A missing
/// closing quote (truncated input) is tolerated.
pub fn string_body(literal: &str) -> &str {
    let inner = literal.strip_prefix('"').unwrap_or(literal);
    if inner.ends_with('"') && !ends_with_escape(inner) {
        &inner[..inner.len() - 1]
    } else {
        inner
    }
}

// True when the final quote is itself escaped, i.e. preceded by an odd run of backslashes.
fn ends_with_escape(inner: &str) -> bool {
    let before_quote = &inner[..inner.len() - 1];
    before_quote.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}
