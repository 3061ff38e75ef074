use crate::input::Input;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Note
/// - Requires at least one element
/// - A separator with no item after it is left unconsumed
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, T, P, PS> Parser<'code, T> for SeparatedList<P, PS>
where
    P: Parser<'code, T>,
    PS: Parser<'code, T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let (first_value, mut input) = self.parser.parse(input)?;
        let mut results = vec![first_value];

        while let Some((_, after_separator)) = self.separator.parse(input) {
            match self.parser.parse(after_separator) {
                Some((value, next_input)) => {
                    results.push(value);
                    input = next_input;
                }
                None => break,
            }
        }

        Some((results, input))
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<'code, T, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code, T>,
    PS: Parser<'code, T>,
{
    SeparatedList::new(parser, separator)
}
