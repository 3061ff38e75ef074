use crate::input::Input;
use crate::parser::{ParseResult, Parser};

/// Parser that applies a predicate function to filter the output of another parser
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'code, T, P, F> Parser<'code, T> for Filter<P, F>
where
    P: Parser<'code, T>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let (value, rest) = self.parser.parse(input)?;
        if (self.predicate)(&value) {
            Some((value, rest))
        } else {
            None
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code, T>: Parser<'code, T> + Sized {
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate)
    }
}

impl<'code, T, P> FilterExt<'code, T> for P where P: Parser<'code, T> {}

/// Convenience function to create a filtered parser
pub fn filter<'code, T, P, F>(parser: P, predicate: F) -> Filter<P, F>
where
    P: Parser<'code, T>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate)
}
