use crate::either::Either;
use crate::input::Input;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The choice is strictly left-biased: once the first parser matches, the second is
/// never tried, even if it could have consumed more input. The result is tagged with
/// the branch that matched.
///
/// ```
/// use combinate::{AlternativeExt, Either, Input, Parser, accept};
///
/// let data = ['y', 'z'];
/// let (value, rest) = accept('x').or(accept('y')).parse(Input::new(&data)).unwrap();
/// assert_eq!(value, Either::Right('y'));
/// assert_eq!(rest.as_slice(), &['z']);
/// ```
pub struct Alternative<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Alternative<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Alternative { parser1, parser2 }
    }
}

impl<'code, T, P1, P2> Parser<'code, T> for Alternative<P1, P2>
where
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
{
    type Output = Either<P1::Output, P2::Output>;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output> {
        if let Some((value, rest)) = self.parser1.parse(input) {
            return Some((Either::Left(value), rest));
        }
        let (value, rest) = self.parser2.parse(input)?;
        Some((Either::Right(value), rest))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait AlternativeExt<'code, T>: Parser<'code, T> + Sized {
    fn or<P>(self, other: P) -> Alternative<Self, P>
    where
        P: Parser<'code, T>,
    {
        Alternative::new(self, other)
    }
}

impl<'code, T, P> AlternativeExt<'code, T> for P where P: Parser<'code, T> {}

/// Convenience function to create an Alternative parser
pub fn alternative<'code, T, P1, P2>(parser1: P1, parser2: P2) -> Alternative<P1, P2>
where
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
{
    Alternative::new(parser1, parser2)
}
