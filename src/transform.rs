use crate::input::Input;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// The mapper sees only successful values and the remainder passes through untouched.
/// A mapper that panics is a bug in the grammar, not a parse failure; use
/// [`filter`](crate::filter()) to reject values.
pub struct Transform<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Transform<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Transform { parser, mapper }
    }
}

impl<'code, T, P, F, U> Parser<'code, T> for Transform<P, F>
where
    P: Parser<'code, T>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, U> {
        let (value, input) = self.parser.parse(input)?;
        Some(((self.mapper)(value), input))
    }
}

/// Convenience function to create a Transform parser
pub fn transform<'code, T, P, F, U>(parser: P, mapper: F) -> Transform<P, F>
where
    P: Parser<'code, T>,
    F: Fn(P::Output) -> U,
{
    Transform::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait TransformExt<'code, T>: Parser<'code, T> + Sized {
    fn map<F, U>(self, mapper: F) -> Transform<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Transform::new(self, mapper)
    }
}

impl<'code, T, P> TransformExt<'code, T> for P where P: Parser<'code, T> {}
