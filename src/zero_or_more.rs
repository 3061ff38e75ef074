use crate::input::Input;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. Values are collected in order until the wrapped parser stops
/// matching, and the input is returned as it stood at that point.
///
/// The wrapped parser must consume input whenever it succeeds. One that can succeed
/// on the same position forever makes this loop forever.
pub struct ZeroOrMore<P> {
    parser: P,
}

impl<P> ZeroOrMore<P> {
    pub fn new(parser: P) -> Self {
        ZeroOrMore { parser }
    }
}

impl<'code, T, P> Parser<'code, T> for ZeroOrMore<P>
where
    P: Parser<'code, T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output> {
        Some(collect(&self.parser, input, Vec::new()))
    }
}

/// Push parses of `parser` onto `results` until it stops matching
pub(crate) fn collect<'code, T, P>(
    parser: &P,
    mut input: Input<'code, T>,
    mut results: Vec<P::Output>,
) -> (Vec<P::Output>, Input<'code, T>)
where
    P: Parser<'code, T>,
{
    while let Some((value, next_input)) = parser.parse(input) {
        results.push(value);
        input = next_input;
    }
    (results, input)
}

/// Convenience function to create a ZeroOrMore parser
pub fn zero_or_more<'code, T, P>(parser: P) -> ZeroOrMore<P>
where
    P: Parser<'code, T>,
{
    ZeroOrMore::new(parser)
}

/// Extension trait to add .zero_or_more() method support for parsers
pub trait ZeroOrMoreExt<'code, T>: Parser<'code, T> + Sized {
    fn zero_or_more(self) -> ZeroOrMore<Self> {
        ZeroOrMore::new(self)
    }
}

impl<'code, T, P> ZeroOrMoreExt<'code, T> for P where P: Parser<'code, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::{accept, any};
    use crate::text::{chars, digit};

    #[test]
    fn test_zero_or_more_zero_matches() {
        let data = chars("xyz");
        let input = Input::new(&data);

        let (results, rest) = zero_or_more(accept('a')).parse(input).unwrap();
        assert!(results.is_empty());
        assert_eq!(rest, input);
    }

    #[test]
    fn test_zero_or_more_multiple_matches() {
        let data = chars("aaabcd");

        let (results, rest) = zero_or_more(accept('a')).parse(Input::new(&data)).unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(rest.head(), Some(&'b'));
    }

    #[test]
    fn test_zero_or_more_all_matches() {
        let data = chars("hello");

        let (results, rest) = zero_or_more(any::<char>()).parse(Input::new(&data)).unwrap();
        assert_eq!(results, vec!['h', 'e', 'l', 'l', 'o']);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_zero_or_more_empty_input() {
        let data = chars("");

        let (results, rest) = zero_or_more(digit()).parse(Input::new(&data)).unwrap();
        assert!(results.is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn test_zero_or_more_long_input() {
        let data = vec!['a'; 100_000];

        let (results, rest) = zero_or_more(accept('a')).parse(Input::new(&data)).unwrap();
        assert_eq!(results.len(), 100_000);
        assert!(rest.is_empty());
    }
}
