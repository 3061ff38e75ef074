use crate::input::Input;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that consumes one element when a predicate holds for it
pub struct AcceptIf<F> {
    predicate: F,
}

impl<F> AcceptIf<F> {
    pub fn new(predicate: F) -> Self {
        AcceptIf { predicate }
    }
}

impl<'code, T, F> Parser<'code, T> for AcceptIf<F>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, T> {
        let element = input.head()?;
        if (self.predicate)(element) {
            Some((element.clone(), input.tail()))
        } else {
            None
        }
    }
}

/// Convenience function to create an AcceptIf parser
///
/// ```
/// use combinate::{Input, Parser, accept_if};
///
/// let data = ['7', 'x'];
/// let (digit, rest) = accept_if(char::is_ascii_digit).parse(Input::new(&data)).unwrap();
/// assert_eq!(digit, '7');
/// assert_eq!(rest.as_slice(), &['x']);
/// ```
pub fn accept_if<T, F>(predicate: F) -> AcceptIf<F>
where
    F: Fn(&T) -> bool,
{
    AcceptIf::new(predicate)
}

/// Parser that consumes one element equal to an expected value
pub struct Accept<T> {
    expected: T,
}

impl<T> Accept<T> {
    pub fn new(expected: T) -> Self {
        Accept { expected }
    }
}

impl<'code, T> Parser<'code, T> for Accept<T>
where
    T: Clone + PartialEq,
{
    type Output = T;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, T> {
        match input.head() {
            Some(element) if *element == self.expected => Some((element.clone(), input.tail())),
            _ => None,
        }
    }
}

/// Convenience function to create an Accept parser
pub fn accept<T>(expected: T) -> Accept<T>
where
    T: Clone + PartialEq,
{
    Accept::new(expected)
}

/// Parser that consumes any single element
pub struct Any<T> {
    _element: PhantomData<fn() -> T>,
}

impl<T> Any<T> {
    pub fn new() -> Self {
        Any {
            _element: PhantomData,
        }
    }
}

impl<T> Default for Any<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, T: Clone> Parser<'code, T> for Any<T> {
    type Output = T;

    fn parse(&self, input: Input<'code, T>) -> ParseResult<'code, T, T> {
        let element = input.head()?.clone();
        Some((element, input.tail()))
    }
}

/// Convenience function to create an Any parser
pub fn any<T: Clone>() -> Any<T> {
    Any::new()
}
