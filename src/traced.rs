use crate::input::Input;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use tracing::trace;

/// Parser combinator that reports each attempt of the wrapped parser to `tracing`
///
/// Events are emitted at `TRACE` level with the label in the `parser` field, the
/// starting `position`, and on a match the number of elements `consumed`. Wrap the
/// rules of a grammar you are debugging; the result of the parse is unchanged.
pub struct Traced<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Traced<P> {
    pub fn new(parser: P, label: impl Into<Cow<'static, str>>) -> Self {
        Traced {
            parser,
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<'code, T, P> Parser<'code, T> for Traced<P>
where
    P: Parser<'code, T>,
{
    type Output = P::Output;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let position = input.position();
        trace!(parser = %self.label, position, "attempt");

        match self.parser.parse(input) {
            Some((value, rest)) => {
                let consumed = rest.position().saturating_sub(position);
                trace!(parser = %self.label, position, consumed, "matched");
                Some((value, rest))
            }
            None => {
                trace!(parser = %self.label, position, "no match");
                None
            }
        }
    }
}

/// Convenience function to create a Traced parser
pub fn traced<'code, T, P>(parser: P, label: impl Into<Cow<'static, str>>) -> Traced<P>
where
    P: Parser<'code, T>,
{
    Traced::new(parser, label)
}

/// Extension trait to add .traced() method support for parsers
pub trait TracedExt<'code, T>: Parser<'code, T> + Sized {
    fn traced(self, label: impl Into<Cow<'static, str>>) -> Traced<Self> {
        Traced::new(self, label)
    }
}

impl<'code, T, P> TracedExt<'code, T> for P where P: Parser<'code, T> {}
