use crate::outcome::Outcome;
use crate::parser::{Consumer, Parser};

/// Ordered alternative: tries the first parser, and only if it fails, the
/// second, both on the same input. The first success wins; there is no
/// ambiguity resolution.
#[derive(Clone)]
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
    consumer: Option<Consumer>,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            consumer: None,
        }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    fn scan<'a>(&self, input: &'a str) -> Outcome<'a> {
        let outcome = self.first.parse(input);
        if outcome.success {
            return outcome;
        }
        self.second.parse(input)
    }

    fn min_length(&self) -> usize {
        self.first.min_length().min(self.second.min_length())
    }

    fn consumer(&self) -> Option<&Consumer> {
        self.consumer.as_ref()
    }

    fn set_consumer(&mut self, consumer: Consumer) {
        self.consumer = Some(consumer);
    }

    fn label(&self) -> &'static str {
        "or"
    }
}

/// Adds `.or()` to every parser.
pub trait OrExt: Parser {
    fn or<P: Parser>(self, other: P) -> Or<Self, P> {
        Or::new(self, other)
    }
}

impl<P: Parser> OrExt for P {}

pub fn or<P1: Parser, P2: Parser>(first: P1, second: P2) -> Or<P1, P2> {
    Or::new(first, second)
}
