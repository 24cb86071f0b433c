use std::fmt;

use crate::error::ParseError;
use crate::parser::Parser;

/// The result of one match attempt: the unconsumed remainder of the input
/// plus a success flag.
///
/// On failure the remainder is always the input view unchanged, so a failed
/// attempt never leaks partial consumption. On success the remainder is a
/// suffix of the input sharing the same backing storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome<'a> {
    /// The remaining input after the attempt.
    pub remainder: &'a str,
    /// Whether the attempt matched.
    pub success: bool,
}

impl<'a> Outcome<'a> {
    #[inline]
    pub fn success(remainder: &'a str) -> Self {
        Self {
            remainder,
            success: true,
        }
    }

    /// A failed attempt returns the input it was given, unconsumed.
    #[inline]
    pub fn failure(input: &'a str) -> Self {
        Self {
            remainder: input,
            success: false,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Apply another parser to the remainder, chaining independent attempts
    /// without nesting them in a `Then`.
    ///
    /// Like the combinators themselves, this does not inspect the previous
    /// success flag; it simply parses whatever is left.
    #[inline]
    pub fn chain<P: Parser>(self, parser: &P) -> Outcome<'a> {
        parser.parse(self.remainder)
    }

    /// Convert to a `Result`, so callers can `?` out of a failed match.
    pub fn validate(self) -> Result<&'a str, ParseError> {
        if self.success {
            Ok(self.remainder)
        } else {
            Err(ParseError::NoMatch)
        }
    }
}

impl<'a> fmt::Display for Outcome<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{:?}, {}}}", self.remainder, self.success)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    #[test]
    fn test_display() {
        assert_eq!(Outcome::success("rest").to_string(), "{\"rest\", true}");
        assert_eq!(Outcome::failure("x").to_string(), "{\"x\", false}");
    }

    #[test]
    fn test_chain() {
        let a = char_is('a');
        let b = char_is('b');
        let outcome = a.parse("abc").chain(&b);
        assert_eq!(outcome, Outcome::success("c"));

        // chaining parses the remainder even after a failure
        let outcome = a.parse("bc").chain(&b);
        assert_eq!(outcome, Outcome::success("c"));
    }

    #[test]
    fn test_validate() {
        assert_eq!(char_is('a').parse("ab").validate(), Ok("b"));
        assert_eq!(
            char_is('a').parse("xy").validate(),
            Err(ParseError::NoMatch)
        );
    }
}
