use crate::input::Input;
use crate::parser::{ParseResult, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// This is a generic combinator that parses: `open + content + close`
/// and returns just the `content` value with the delimiters discarded.
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, T, P1, P2, P3> Parser<'code, T> for Between<P1, P2, P3>
where
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
    P3: Parser<'code, T>,
{
    type Output = P2::Output;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let (_, input) = self.open.parse(input)?;
        let (content, input) = self.content.parse(input)?;
        let (_, input) = self.close.parse(input)?;
        Some((content, input))
    }
}

/// Creates a parser that matches content between delimiters
pub fn between<'code, T, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
    P3: Parser<'code, T>,
{
    Between::new(open, content, close)
}
