use crate::input::Input;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// The second parser runs on whatever the first left behind. If it fails the whole
/// sequence fails; the first parser is not retried with a different split.
///
/// Chaining `.and()` produces nested tuples like `((a, b), c)`, which keeps the
/// parsing order explicit in the destructuring pattern.
///
/// Example:
/// ```
/// use combinate::{Input, Parser, SequenceExt, accept};
///
/// let data = ['a', 'b', 'c', '!'];
/// let (((a, b), c), rest) = accept('a')
///     .and(accept('b'))
///     .and(accept('c'))
///     .parse(Input::new(&data))
///     .unwrap();
/// assert_eq!((a, b, c), ('a', 'b', 'c'));
/// assert_eq!(rest.as_slice(), &['!']);
/// ```
pub struct Sequence<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Sequence<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Sequence { parser1, parser2 }
    }
}

impl<'code, T, P1, P2> Parser<'code, T> for Sequence<P1, P2>
where
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let (result1, input) = self.parser1.parse(input)?;
        let (result2, input) = self.parser2.parse(input)?;
        Some(((result1, result2), input))
    }
}

/// Sequence of two parsers that keeps only the first result
pub struct SequenceLeft<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> SequenceLeft<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        SequenceLeft { parser1, parser2 }
    }
}

impl<'code, T, P1, P2> Parser<'code, T> for SequenceLeft<P1, P2>
where
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
{
    type Output = P1::Output;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let (result, input) = self.parser1.parse(input)?;
        let (_, input) = self.parser2.parse(input)?;
        Some((result, input))
    }
}

/// Sequence of two parsers that keeps only the second result
pub struct SequenceRight<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> SequenceRight<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        SequenceRight { parser1, parser2 }
    }
}

impl<'code, T, P1, P2> Parser<'code, T> for SequenceRight<P1, P2>
where
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
{
    type Output = P2::Output;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let (_, input) = self.parser1.parse(input)?;
        self.parser2.parse(input)
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'code, T, P1, P2>(parser1: P1, parser2: P2) -> Sequence<P1, P2>
where
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
{
    Sequence::new(parser1, parser2)
}

/// Convenience function to create a SequenceLeft parser
pub fn sequence_left<'code, T, P1, P2>(parser1: P1, parser2: P2) -> SequenceLeft<P1, P2>
where
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
{
    SequenceLeft::new(parser1, parser2)
}

/// Convenience function to create a SequenceRight parser
pub fn sequence_right<'code, T, P1, P2>(parser1: P1, parser2: P2) -> SequenceRight<P1, P2>
where
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
{
    SequenceRight::new(parser1, parser2)
}

/// Extension trait to add sequencing methods to all parsers
pub trait SequenceExt<'code, T>: Parser<'code, T> + Sized {
    fn and<P>(self, other: P) -> Sequence<Self, P>
    where
        P: Parser<'code, T>,
    {
        Sequence::new(self, other)
    }

    /// Run `other` after this parser and keep this parser's value
    fn then_ignore<P>(self, other: P) -> SequenceLeft<Self, P>
    where
        P: Parser<'code, T>,
    {
        SequenceLeft::new(self, other)
    }

    /// Run `other` after this parser and keep `other`'s value
    fn ignore_then<P>(self, other: P) -> SequenceRight<Self, P>
    where
        P: Parser<'code, T>,
    {
        SequenceRight::new(self, other)
    }
}

impl<'code, T, P> SequenceExt<'code, T> for P where P: Parser<'code, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::{accept, accept_if};
    use crate::text::chars;
    use std::cell::Cell;

    /// Counts how many times the wrapped parser runs
    struct Counted<'a, P> {
        parser: P,
        calls: &'a Cell<usize>,
    }

    impl<'code, T, P: Parser<'code, T>> Parser<'code, T> for Counted<'_, P> {
        type Output = P::Output;

        fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, P::Output> {
            self.calls.set(self.calls.get() + 1);
            self.parser.parse(input)
        }
    }

    #[test]
    fn test_sequence_both_succeed() {
        let data = chars("A5xyz");
        let parser = accept('A').and(accept('5'));

        let ((first, second), rest) = parser.parse(Input::new(&data)).unwrap();
        assert_eq!(first, 'A');
        assert_eq!(second, '5');
        assert_eq!(rest.head(), Some(&'x'));
    }

    #[test]
    fn test_sequence_first_fails() {
        let data = chars("Bxyz");
        let parser = accept('A').and(accept('x'));

        assert!(parser.parse(Input::new(&data)).is_none());
    }

    #[test]
    fn test_sequence_second_fails() {
        let data = chars("Axyz");
        let parser = accept('A').and(accept('5'));

        assert!(parser.parse(Input::new(&data)).is_none());
    }

    #[test]
    fn test_sequence_does_not_backtrack_into_first() {
        // The greedy first parser eats the 'a' the second one needed.
        let data = chars("aa");
        let parser = crate::one_or_more(accept('a')).and(accept('a'));

        assert!(parser.parse(Input::new(&data)).is_none());
    }

    #[test]
    fn test_sequence_chain() {
        let data = chars("A5B");
        let parser = accept('A').and(accept('5')).and(accept('B'));

        let (((a, five), b), rest) = parser.parse(Input::new(&data)).unwrap();
        assert_eq!((a, five, b), ('A', '5', 'B'));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_sequence_function_syntax() {
        let data = chars("XY");
        let parser = sequence(accept('X'), accept('Y'));

        let ((x, y), rest) = parser.parse(Input::new(&data)).unwrap();
        assert_eq!((x, y), ('X', 'Y'));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_then_ignore_keeps_left() {
        let data = chars("7;rest");
        let parser = accept_if(char::is_ascii_digit).then_ignore(accept(';'));

        let (digit, rest) = parser.parse(Input::new(&data)).unwrap();
        assert_eq!(digit, '7');
        assert_eq!(rest.position(), 2);
    }

    #[test]
    fn test_ignore_then_keeps_right() {
        let data = chars("-7");
        let parser = sequence_right(accept('-'), accept_if(char::is_ascii_digit));

        let (digit, rest) = parser.parse(Input::new(&data)).unwrap();
        assert_eq!(digit, '7');
        assert!(rest.is_empty());
    }

    #[test]
    fn test_discard_variants_fail_like_sequence() {
        let data = chars("-x");
        let input = Input::new(&data);
        let digit = || accept_if(char::is_ascii_digit);

        assert!(sequence(accept('-'), digit()).parse(input).is_none());
        assert!(sequence_left(accept('-'), digit()).parse(input).is_none());
        assert!(accept('-').ignore_then(digit()).parse(input).is_none());
    }

    #[test]
    fn test_sequence_second_not_run_after_first_fails() {
        let data = chars("xy");
        let calls = Cell::new(0);
        let second = || Counted {
            parser: accept('y'),
            calls: &calls,
        };

        assert!(sequence(accept('a'), second()).parse(Input::new(&data)).is_none());
        assert!(sequence_left(accept('a'), second()).parse(Input::new(&data)).is_none());
        assert!(sequence_right(accept('a'), second()).parse(Input::new(&data)).is_none());
        assert_eq!(calls.get(), 0);

        assert!(sequence(accept('x'), second()).parse(Input::new(&data)).is_some());
        assert_eq!(calls.get(), 1);
    }
}
