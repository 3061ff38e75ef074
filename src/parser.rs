use crate::error::ParseError;
use crate::input::Input;

/// What every parser returns: the parsed value with the remaining input, or `None`
pub type ParseResult<'code, T, O> = Option<(O, Input<'code, T>)>;

/// Core parser trait for parser combinators
///
/// A parser is a pure function of its input. Failing to match is the ordinary,
/// recoverable outcome and is reported as `None`; the caller still holds the input it
/// passed in, so nothing needs to be rewound.
///
/// Plain functions with the right signature are parsers too:
///
/// ```
/// use combinate::{Input, ParseResult, Parser};
///
/// fn two<'code>(input: Input<'code, u8>) -> ParseResult<'code, u8, (u8, u8)> {
///     let a = *input.head()?;
///     let rest = input.tail();
///     let b = *rest.head()?;
///     Some(((a, b), rest.tail()))
/// }
///
/// let ((a, b), rest) = two.parse(Input::new(&[1, 2, 3])).unwrap();
/// assert_eq!((a, b), (1, 2));
/// assert_eq!(rest.as_slice(), &[3]);
/// ```
pub trait Parser<'code, T> {
    type Output;

    /// Attempt to parse from the given input position
    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output>;

    /// Parse `source` from its start and require that all of it is consumed
    fn parse_complete(&self, source: &'code [T]) -> Result<Self::Output, ParseError> {
        let (output, rest) = self.parse(Input::new(source)).ok_or(ParseError::NoMatch)?;
        if rest.is_empty() {
            Ok(output)
        } else {
            Err(ParseError::Incomplete {
                position: rest.position(),
                remaining: rest.len(),
            })
        }
    }
}

impl<'code, T, O, F> Parser<'code, T> for F
where
    T: 'code,
    F: Fn(Input<'code, T>) -> ParseResult<'code, T, O>,
{
    type Output = O;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, O> {
        self(input)
    }
}

impl<'code, 'a, T, O> Parser<'code, T> for Box<dyn Parser<'code, T, Output = O> + 'a> {
    type Output = O;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, O> {
        (**self).parse(input)
    }
}

/// Extension trait to erase a parser's concrete type
pub trait BoxedExt<'code, T>: Parser<'code, T> + Sized {
    /// Box this parser behind a trait object
    ///
    /// Needed where a grammar refers to itself, since a recursive combinator type
    /// would otherwise be infinitely large.
    fn boxed<'a>(self) -> Box<dyn Parser<'code, T, Output = Self::Output> + 'a>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<'code, T, P> BoxedExt<'code, T> for P where P: Parser<'code, T> {}
