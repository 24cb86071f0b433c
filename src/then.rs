use crate::outcome::Outcome;
use crate::parser::{Consumer, Parser};

/// Sequence: the second parser runs on the first one's remainder.
///
/// The combinator is atomic. If either half fails, the whole sequence
/// fails and the original input is returned unconsumed, even though a
/// consumer on an already-matched first half has fired by then. Input
/// consumption rolls back; side effects do not.
#[derive(Clone)]
pub struct Then<P1, P2> {
    first: P1,
    second: P2,
    consumer: Option<Consumer>,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            consumer: None,
        }
    }
}

impl<P1, P2> Parser for Then<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    fn scan<'a>(&self, input: &'a str) -> Outcome<'a> {
        let outcome = self.first.parse(input);
        if !outcome.success {
            return Outcome::failure(input);
        }
        let outcome = self.second.parse(outcome.remainder);
        if !outcome.success {
            return Outcome::failure(input);
        }
        outcome
    }

    fn min_length(&self) -> usize {
        self.first.min_length() + self.second.min_length()
    }

    fn consumer(&self) -> Option<&Consumer> {
        self.consumer.as_ref()
    }

    fn set_consumer(&mut self, consumer: Consumer) {
        self.consumer = Some(consumer);
    }

    fn label(&self) -> &'static str {
        "then"
    }
}

/// Adds `.then()` to every parser.
pub trait ThenExt: Parser {
    fn then<P: Parser>(self, next: P) -> Then<Self, P> {
        Then::new(self, next)
    }
}

impl<P: Parser> ThenExt for P {}

pub fn then<P1: Parser, P2: Parser>(first: P1, second: P2) -> Then<P1, P2> {
    Then::new(first, second)
}
