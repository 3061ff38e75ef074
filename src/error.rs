use std::error::Error;
use std::fmt;

/// Misuse of an [`Input`](crate::Input) cursor
///
/// Parsers never produce this themselves: failing to match is reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Tried to step past the last element
    AlreadyAtEnd { position: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::AlreadyAtEnd { position } => {
                write!(f, "already at end of input (position {})", position)
            }
        }
    }
}

impl Error for InputError {}

/// Outcome of running a parser over a whole input that did not end in a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The parser did not match at the start of the input
    NoMatch,
    /// The parser matched a prefix but left input behind
    Incomplete {
        /// Where the parser stopped
        position: usize,
        /// How many elements were left unconsumed
        remaining: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoMatch => write!(f, "input did not match"),
            ParseError::Incomplete {
                position,
                remaining,
            } => write!(
                f,
                "parser stopped at position {} with {} element(s) unconsumed",
                position, remaining
            ),
        }
    }
}

impl Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let error = InputError::AlreadyAtEnd { position: 3 };
        assert_eq!(error.to_string(), "already at end of input (position 3)");
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(ParseError::NoMatch.to_string(), "input did not match");

        let error = ParseError::Incomplete {
            position: 2,
            remaining: 4,
        };
        let display_str = error.to_string();
        assert!(display_str.contains("position 2"));
        assert!(display_str.contains("4 element(s)"));
    }

    #[test]
    fn test_errors_are_std_errors() {
        let boxed: Box<dyn Error> = Box::new(ParseError::NoMatch);
        assert!(boxed.source().is_none());
    }
}
