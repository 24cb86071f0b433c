use crate::outcome::Outcome;
use crate::parser::{Consumer, Parser};

/// Matches one specific character.
#[derive(Clone)]
pub struct CharEquals {
    ch: char,
    consumer: Option<Consumer>,
}

impl CharEquals {
    pub fn new(ch: char) -> Self {
        Self { ch, consumer: None }
    }
}

impl Parser for CharEquals {
    fn scan<'a>(&self, input: &'a str) -> Outcome<'a> {
        match input.chars().next() {
            Some(ch) if ch == self.ch => Outcome::success(&input[ch.len_utf8()..]),
            _ => Outcome::failure(input),
        }
    }

    fn min_length(&self) -> usize {
        1
    }

    fn consumer(&self) -> Option<&Consumer> {
        self.consumer.as_ref()
    }

    fn set_consumer(&mut self, consumer: Consumer) {
        self.consumer = Some(consumer);
    }

    fn label(&self) -> &'static str {
        "char_is"
    }
}

/// Matches one character in an inclusive range.
#[derive(Clone)]
pub struct CharInRange {
    lo: char,
    hi: char,
    consumer: Option<Consumer>,
}

impl CharInRange {
    pub fn new(lo: char, hi: char) -> Self {
        Self {
            lo,
            hi,
            consumer: None,
        }
    }
}

impl Parser for CharInRange {
    fn scan<'a>(&self, input: &'a str) -> Outcome<'a> {
        match input.chars().next() {
            Some(ch) if self.lo <= ch && ch <= self.hi => {
                Outcome::success(&input[ch.len_utf8()..])
            }
            _ => Outcome::failure(input),
        }
    }

    fn min_length(&self) -> usize {
        1
    }

    fn consumer(&self) -> Option<&Consumer> {
        self.consumer.as_ref()
    }

    fn set_consumer(&mut self, consumer: Consumer) {
        self.consumer = Some(consumer);
    }

    fn label(&self) -> &'static str {
        "in_range"
    }
}

/// Matches any single character.
#[derive(Clone, Default)]
pub struct AnyChar {
    consumer: Option<Consumer>,
}

impl AnyChar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Parser for AnyChar {
    fn scan<'a>(&self, input: &'a str) -> Outcome<'a> {
        match input.chars().next() {
            Some(ch) => Outcome::success(&input[ch.len_utf8()..]),
            None => Outcome::failure(input),
        }
    }

    fn min_length(&self) -> usize {
        1
    }

    fn consumer(&self) -> Option<&Consumer> {
        self.consumer.as_ref()
    }

    fn set_consumer(&mut self, consumer: Consumer) {
        self.consumer = Some(consumer);
    }

    fn label(&self) -> &'static str {
        "any_char"
    }
}

pub fn char_is(ch: char) -> CharEquals {
    CharEquals::new(ch)
}

pub fn in_range(lo: char, hi: char) -> CharInRange {
    CharInRange::new(lo, hi)
}

pub fn any_char() -> AnyChar {
    AnyChar::new()
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    #[test]
    fn test_char_is() {
        let parser = char_is('a');
        assert_eq!(parser.min_length(), 1);
        assert_eq!(parser.parse("a"), Outcome::success(""));
        assert_eq!(parser.parse("ab"), Outcome::success("b"));
        assert_eq!(parser.parse("b"), Outcome::failure("b"));
        assert_eq!(parser.parse(""), Outcome::failure(""));
    }

    #[test]
    fn test_in_range() {
        let parser = in_range('0', '9');
        assert_eq!(parser.min_length(), 1);
        assert_eq!(parser.parse("0"), Outcome::success(""));
        assert_eq!(parser.parse("9"), Outcome::success(""));
        assert_eq!(parser.parse("5x"), Outcome::success("x"));
        assert_eq!(parser.parse("a"), Outcome::failure("a"));
        assert_eq!(parser.parse(""), Outcome::failure(""));
    }

    #[test]
    fn test_any_char() {
        let parser = any_char();
        assert_eq!(parser.min_length(), 1);
        assert_eq!(parser.parse("a"), Outcome::success(""));
        assert_eq!(parser.parse("9"), Outcome::success(""));
        assert_eq!(parser.parse(""), Outcome::failure(""));
    }

    #[test]
    fn test_multibyte_unit() {
        // one unit is one char, not one byte
        assert_eq!(any_char().parse("éx"), Outcome::success("x"));
        assert_eq!(char_is('é').parse("éx"), Outcome::success("x"));
    }
}
