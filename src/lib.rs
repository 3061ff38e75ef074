//! # combinate - Parser Combinator Library
//!
//! Recursive-descent parsers built by composing small parsers into larger ones.
//!
//! A parser is anything implementing [`Parser`]: a pure function from an [`Input`]
//! cursor to either a value with the remaining input, or `None`. Combinators take
//! parsers and return new parsers, so a grammar is assembled before any input is seen
//! and can be applied any number of times.
//!
//! - **Failure is a value**: not matching is `None`, which alternation and
//!   optionality rely on. Nothing panics on ordinary input.
//! - **Left-biased choice**: [`alternative()`] commits to the first branch that matches
//!   and tags the result with [`Either`].
//! - **No hidden backtracking**: a sequence never re-splits input between its parts.
//! - **Linear cost**: inputs are cursors into a borrowed slice and repetition uses
//!   explicit loops.
//!
//! ```
//! use combinate::text::{chars, digit};
//! use combinate::{OneOrMoreExt, OptionalExt, Parser, SequenceExt, TransformExt, accept};
//!
//! let integer = accept('-')
//!     .optional()
//!     .and(digit().one_or_more())
//!     .map(|(sign, digits): (Option<char>, Vec<char>)| {
//!         let magnitude: i64 = digits.iter().collect::<String>().parse().unwrap();
//!         if sign.is_some() { -magnitude } else { magnitude }
//!     });
//!
//! assert_eq!(integer.parse_complete(&chars("-42")), Ok(-42));
//! assert!(integer.parse_complete(&chars("4x")).is_err());
//! ```

pub mod accept;
pub mod alternative;
pub mod between;
pub mod either;
pub mod end;
pub mod error;
pub mod filter;
pub mod input;
pub mod lazy;
pub mod not;
pub mod one_or_more;
pub mod optional;
pub mod parser;
pub mod separated_list;
pub mod sequence;
pub mod text;
pub mod traced;
pub mod transform;
pub mod zero_or_more;

pub use accept::{accept, accept_if, any};
pub use alternative::{AlternativeExt, alternative};
pub use between::between;
pub use either::Either;
pub use end::end;
pub use error::{InputError, ParseError};
pub use filter::{FilterExt, filter};
pub use input::Input;
pub use lazy::lazy;
pub use not::not;
pub use one_or_more::{OneOrMoreExt, one_or_more};
pub use optional::{OptionalExt, optional};
pub use parser::{BoxedExt, ParseResult, Parser};
pub use separated_list::separated_list;
pub use sequence::{SequenceExt, sequence, sequence_left, sequence_right};
pub use traced::{TracedExt, traced};
pub use transform::{TransformExt, transform};
pub use zero_or_more::{ZeroOrMoreExt, zero_or_more};
