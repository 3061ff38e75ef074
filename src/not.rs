use crate::input::Input;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, T, P> Parser<'code, T> for Not<P>
where
    P: Parser<'code, T>,
{
    type Output = ();

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, ()> {
        match self.parser.parse(input) {
            Some(_) => None,
            None => Some(((), input)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'code, T, P>(parser: P) -> Not<P>
where
    P: Parser<'code, T>,
{
    Not::new(parser)
}
