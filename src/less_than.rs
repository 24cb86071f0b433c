use crate::outcome::Outcome;
use crate::parser::{Consumer, Parser};

/// Bounded repetition: requires at least one match of the child, then
/// greedily repeats up to `max - 1` matches in total.
///
/// The bound is deliberately asymmetric. The lower limit is fixed at 1
/// whatever `max` is, and the loop stops strictly before reaching `max`,
/// so `less_than(3, p)` consumes one or two matches, never three.
///
/// `min_length()` reports 0 even though a match needs at least one
/// repetition. That mismatch is long-standing observable behavior and is
/// kept as-is.
#[derive(Clone)]
pub struct LessThan<P> {
    max: usize,
    parser: P,
    consumer: Option<Consumer>,
}

impl<P> LessThan<P> {
    pub fn new(max: usize, parser: P) -> Self {
        Self {
            max,
            parser,
            consumer: None,
        }
    }
}

impl<P: Parser> Parser for LessThan<P> {
    fn scan<'a>(&self, input: &'a str) -> Outcome<'a> {
        let mut outcome = self.parser.parse(input);
        let success = outcome.success;
        // the first attempt already ran; stop at max - 1 repetitions
        let mut count = 2;
        while outcome.success && count < self.max {
            outcome = self.parser.parse(outcome.remainder);
            count += 1;
        }
        Outcome {
            remainder: outcome.remainder,
            success,
        }
    }

    fn min_length(&self) -> usize {
        0
    }

    fn consumer(&self) -> Option<&Consumer> {
        self.consumer.as_ref()
    }

    fn set_consumer(&mut self, consumer: Consumer) {
        self.consumer = Some(consumer);
    }

    fn label(&self) -> &'static str {
        "less_than"
    }
}

/// Adds `.less_than()` to every parser.
pub trait LessThanExt: Parser {
    fn less_than(self, max: usize) -> LessThan<Self> {
        LessThan::new(max, self)
    }
}

impl<P: Parser> LessThanExt for P {}

pub fn less_than<P: Parser>(max: usize, parser: P) -> LessThan<P> {
    LessThan::new(max, parser)
}
