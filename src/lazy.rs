use crate::input::Input;
use crate::parser::{ParseResult, Parser};

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, T, F, P> Parser<'code, T> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code, T>,
{
    type Output = P::Output;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let parser = (self.factory)();
        parser.parse(input)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F>(factory: F) -> Lazy<F> {
    Lazy::new(factory)
}
