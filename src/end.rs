use crate::input::Input;
use crate::parser::{ParseResult, Parser};

/// Parser that matches only the end of the input
pub struct End;

impl<'code, T> Parser<'code, T> for End {
    type Output = ();

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, ()> {
        if input.is_empty() {
            Some(((), input))
        } else {
            None
        }
    }
}

/// Convenience function to create an End parser
pub fn end() -> End {
    End
}
