use crate::input::Input;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches the given parser at most once
///
/// Always succeeds: `Some(value)` with the parser's remainder when it matches,
/// otherwise `None` with the input untouched.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, T, P> Parser<'code, T> for Optional<P>
where
    P: Parser<'code, T>,
{
    type Output = Option<P::Output>;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output> {
        match self.parser.parse(input) {
            Some((value, rest)) => Some((Some(value), rest)),
            None => Some((None, input)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, T, P>(parser: P) -> Optional<P>
where
    P: Parser<'code, T>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code, T>: Parser<'code, T> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'code, T, P> OptionalExt<'code, T> for P where P: Parser<'code, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::accept;
    use crate::sequence::SequenceExt;
    use crate::text::{chars, digit};

    #[test]
    fn test_optional_present() {
        let data = chars("-5");

        let (sign, rest) = optional(accept('-')).parse(Input::new(&data)).unwrap();
        assert_eq!(sign, Some('-'));
        assert_eq!(rest.head(), Some(&'5'));
    }

    #[test]
    fn test_optional_absent_keeps_input() {
        let data = chars("5");
        let input = Input::new(&data);

        let (sign, rest) = optional(accept('-')).parse(input).unwrap();
        assert_eq!(sign, None);
        assert_eq!(rest, input);
        assert_eq!(rest.position(), 0);
    }

    #[test]
    fn test_optional_empty_input() {
        let data = chars("");

        let (value, rest) = accept('a').optional().parse(Input::new(&data)).unwrap();
        assert_eq!(value, None);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_optional_in_sequence() {
        let data = chars("7x");
        let parser = accept('-').optional().and(digit());

        let ((sign, value), rest) = parser.parse(Input::new(&data)).unwrap();
        assert_eq!(sign, None);
        assert_eq!(value, '7');
        assert_eq!(rest.as_slice(), &['x']);
    }

    #[test]
    fn test_optional_partial_inner_match_restores_input() {
        // "ab" fails half way; optional reports absence at the original position.
        let data = chars("ac");
        let input = Input::new(&data);

        let (value, rest) = accept('a').and(accept('b')).optional().parse(input).unwrap();
        assert_eq!(value, None);
        assert_eq!(rest.position(), 0);
    }
}
