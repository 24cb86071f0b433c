use std::fmt;

/// Failure of a match attempt.
///
/// Match failure is binary and uninterpreted: no position, no message.
/// A consumer that panics is not represented here; the panic unwinds
/// through `parse` to the caller untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    NoMatch,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoMatch => write!(f, "no match"),
        }
    }
}

impl std::error::Error for ParseError {}
