use crate::outcome::Outcome;
use crate::parser::{Consumer, Parser};

/// Zero-or-more: greedily repeats the child until it fails. Always
/// succeeds; zero repetitions is still a match. No backtracking over split
/// points.
#[derive(Clone)]
pub struct Many<P> {
    parser: P,
    consumer: Option<Consumer>,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            consumer: None,
        }
    }
}

impl<P: Parser> Parser for Many<P> {
    fn scan<'a>(&self, input: &'a str) -> Outcome<'a> {
        let mut outcome = self.parser.parse(input);
        while outcome.success {
            outcome = self.parser.parse(outcome.remainder);
        }
        Outcome::success(outcome.remainder)
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
        "many"
    }
}

/// Adds `.many()` to every parser.
pub trait ManyExt: Parser {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

impl<P: Parser> ManyExt for P {}

pub fn many<P: Parser>(parser: P) -> Many<P> {
    Many::new(parser)
}
