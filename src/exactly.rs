use crate::outcome::Outcome;
use crate::parser::{Consumer, Parser};

/// Exact repetition count: the child must match `times` in a row.
///
/// Atomic like `Then`: fewer successes than `times` fails the whole
/// combinator and returns the original input unconsumed.
#[derive(Clone)]
pub struct Exactly<P> {
    times: usize,
    parser: P,
    consumer: Option<Consumer>,
}

impl<P> Exactly<P> {
    pub fn new(times: usize, parser: P) -> Self {
        Self {
            times,
            parser,
            consumer: None,
        }
    }
}

impl<P: Parser> Parser for Exactly<P> {
    fn scan<'a>(&self, input: &'a str) -> Outcome<'a> {
        let mut count = 1;
        let mut outcome = self.parser.parse(input);
        while outcome.success && count < self.times {
            outcome = self.parser.parse(outcome.remainder);
            count += 1;
        }
        if count == self.times && outcome.success {
            outcome
        } else {
            Outcome::failure(input)
        }
    }

    fn min_length(&self) -> usize {
        self.times * self.parser.min_length()
    }

    fn consumer(&self) -> Option<&Consumer> {
        self.consumer.as_ref()
    }

    fn set_consumer(&mut self, consumer: Consumer) {
        self.consumer = Some(consumer);
    }

    fn label(&self) -> &'static str {
        "exactly"
    }
}

/// Adds `.exactly()` to every parser.
pub trait ExactlyExt: Parser {
    fn exactly(self, times: usize) -> Exactly<Self> {
        Exactly::new(times, self)
    }
}

impl<P: Parser> ExactlyExt for P {}

pub fn exactly<P: Parser>(times: usize, parser: P) -> Exactly<P> {
    Exactly::new(times, parser)
}
