//! Character-level parsers over `char` input

use crate::accept::accept_if;
use crate::input::Input;
use crate::parser::{ParseResult, Parser};

/// Collect a string into the `char` buffer an [`Input`] borrows
pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// ASCII digit `0`-`9`
pub fn digit() -> impl for<'code> Parser<'code, char, Output = char> {
    accept_if(char::is_ascii_digit)
}

/// Any alphabetic character, Unicode included
pub fn letter() -> impl for<'code> Parser<'code, char, Output = char> {
    accept_if(|c: &char| c.is_alphabetic())
}

/// Any alphabetic or numeric character, Unicode included
pub fn alphanumeric() -> impl for<'code> Parser<'code, char, Output = char> {
    accept_if(|c: &char| c.is_alphanumeric())
}

/// Any Unicode whitespace character
pub fn whitespace() -> impl for<'code> Parser<'code, char, Output = char> {
    accept_if(|c: &char| c.is_whitespace())
}

/// Parser that matches an exact run of characters
pub struct Literal {
    expected: Vec<char>,
}

impl Literal {
    pub fn new(expected: &str) -> Self {
        Literal {
            expected: chars(expected),
        }
    }
}

impl<'code> Parser<'code, char> for Literal {
    type Output = String;

    fn parse(&self, input: Input<'code, char>) -> ParseResult<'code, char, String> {
        let mut current = input;
        for expected in &self.expected {
            if current.head()? != expected {
                return None;
            }
            current = current.tail();
        }
        Some((self.expected.iter().collect(), current))
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: &str) -> Literal {
    Literal::new(expected)
}
