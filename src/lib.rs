#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

//! Tiny composable prefix-matching parsers.
//!
//! A parser is an immutable value that matches a prefix of a `&str` and
//! reports the unconsumed remainder. Small parsers combine into larger ones
//! with `or`, `then`, `optional` and the repetition combinators, so grammar
//! fragments too small for a full parser generator (literal formats, simple
//! tokens) can still be built by composition.
//!
//! ```
//! use tinyparse::prelude::*;
//!
//! let parser = char_is('a').then(in_range('0', '9').more_than(0));
//! let outcome = parser.parse("a42!");
//! assert!(outcome.success);
//! assert_eq!(outcome.remainder, "!");
//! ```
//!
//! Run with `RUST_LOG=trace` (and an initialized `env_logger`) to see the
//! match trail of every node.

mod chars;
mod error;
mod exactly;
mod less_than;
mod logging;
mod many;
mod more_than;
mod optional;
mod or;
mod outcome;
mod parser;
mod then;
mod util;

pub mod built_in;
pub mod contrib;
pub mod prelude;

pub use crate::chars::{any_char, char_is, in_range, AnyChar, CharEquals, CharInRange};
pub use crate::error::ParseError;
pub use crate::exactly::{exactly, Exactly, ExactlyExt};
pub use crate::less_than::{less_than, LessThan, LessThanExt};
pub use crate::many::{many, Many, ManyExt};
pub use crate::more_than::{more_than, MoreThan, MoreThanExt};
pub use crate::optional::{optional, Optional, OptionalExt};
pub use crate::or::{or, Or, OrExt};
pub use crate::outcome::Outcome;
pub use crate::parser::{Consumer, Parser};
pub use crate::then::{then, Then, ThenExt};

pub(crate) const LOG_TARGET: &str = "tp"; // env!("CARGO_PKG_NAME");
