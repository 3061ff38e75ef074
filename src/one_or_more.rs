use crate::input::Input;
use crate::parser::{ParseResult, Parser};
use crate::zero_or_more::collect;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Fails exactly when the first application fails. On success the returned vector is
/// never empty and holds the values in the order they were parsed.
///
/// ```
/// use combinate::{Input, OneOrMoreExt, Parser};
/// use combinate::text::{chars, digit};
///
/// let data = chars("123abc");
/// let (digits, rest) = digit().one_or_more().parse(Input::new(&data)).unwrap();
/// assert_eq!(digits, vec!['1', '2', '3']);
/// assert_eq!(rest.as_slice(), &chars("abc")[..]);
/// ```
pub struct OneOrMore<P> {
    parser: P,
}

impl<P> OneOrMore<P> {
    pub fn new(parser: P) -> Self {
        OneOrMore { parser }
    }
}

impl<'code, T, P> Parser<'code, T> for OneOrMore<P>
where
    P: Parser<'code, T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output> {
        // First parse must succeed
        let (first_value, input) = self.parser.parse(input)?;
        Some(collect(&self.parser, input, vec![first_value]))
    }
}

/// Convenience function to create a OneOrMore parser
pub fn one_or_more<'code, T, P>(parser: P) -> OneOrMore<P>
where
    P: Parser<'code, T>,
{
    OneOrMore::new(parser)
}

/// Extension trait to add .one_or_more() method support for parsers
pub trait OneOrMoreExt<'code, T>: Parser<'code, T> + Sized {
    fn one_or_more(self) -> OneOrMore<Self> {
        OneOrMore::new(self)
    }
}

impl<'code, T, P> OneOrMoreExt<'code, T> for P where P: Parser<'code, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::accept;
    use crate::text::{chars, digit};

    #[test]
    fn test_one_or_more_zero_matches_fails() {
        let data = chars("xyz");
        assert!(one_or_more(accept('a')).parse(Input::new(&data)).is_none());
    }

    #[test]
    fn test_one_or_more_one_match() {
        let data = chars("abc");

        let (results, rest) = one_or_more(accept('a')).parse(Input::new(&data)).unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(rest.head(), Some(&'b'));
    }

    #[test]
    fn test_one_or_more_keeps_order() {
        let data = chars("123abc");

        let (results, rest) = one_or_more(digit()).parse(Input::new(&data)).unwrap();
        assert_eq!(results, vec!['1', '2', '3']);
        assert_eq!(rest.as_slice(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_one_or_more_all_matches() {
        let data = chars("aaaa");

        let (results, rest) = accept('a').one_or_more().parse(Input::new(&data)).unwrap();
        assert_eq!(results.len(), 4);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_one_or_more_empty_input() {
        let data = chars("");
        assert!(one_or_more(accept('a')).parse(Input::new(&data)).is_none());
    }
}
