use crate::outcome::Outcome;
use crate::parser::{Consumer, Parser};

/// Repetition with a strict lower bound: greedily repeats the child and
/// succeeds iff it matched more than `min` times, i.e. at least `min + 1`.
/// `more_than(0, p)` is the usual "one or more".
#[derive(Clone)]
pub struct MoreThan<P> {
    min: usize,
    parser: P,
    consumer: Option<Consumer>,
}

impl<P> MoreThan<P> {
    pub fn new(min: usize, parser: P) -> Self {
        Self {
            min,
            parser,
            consumer: None,
        }
    }
}

impl<P: Parser> Parser for MoreThan<P> {
    fn scan<'a>(&self, input: &'a str) -> Outcome<'a> {
        let mut count = 0;
        let mut outcome = self.parser.parse(input);
        while outcome.success {
            count += 1;
            outcome = self.parser.parse(outcome.remainder);
        }
        if count > self.min {
            // the failed attempt left the remainder of the last success
            Outcome::success(outcome.remainder)
        } else {
            Outcome::failure(input)
        }
    }

    fn min_length(&self) -> usize {
        (self.min + 1) * self.parser.min_length()
    }

    fn consumer(&self) -> Option<&Consumer> {
        self.consumer.as_ref()
    }

    fn set_consumer(&mut self, consumer: Consumer) {
        self.consumer = Some(consumer);
    }

    fn label(&self) -> &'static str {
        "more_than"
    }
}

/// Adds `.more_than()` to every parser.
pub trait MoreThanExt: Parser {
    fn more_than(self, min: usize) -> MoreThan<Self> {
        MoreThan::new(min, self)
    }
}

impl<P: Parser> MoreThanExt for P {}

pub fn more_than<P: Parser>(min: usize, parser: P) -> MoreThan<P> {
    MoreThan::new(min, parser)
}
