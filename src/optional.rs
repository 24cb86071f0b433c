use crate::outcome::Outcome;
use crate::parser::{Consumer, Parser};

/// Zero-or-one: attempts the child and succeeds either way, consuming the
/// child's match if there was one.
#[derive(Clone)]
pub struct Optional<P> {
    parser: P,
    consumer: Option<Consumer>,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            consumer: None,
        }
    }
}

impl<P: Parser> Parser for Optional<P> {
    fn scan<'a>(&self, input: &'a str) -> Outcome<'a> {
        Outcome::success(self.parser.parse(input).remainder)
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
        "optional"
    }
}

/// Adds `.optional()` to every parser.
pub trait OptionalExt: Parser {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<P: Parser> OptionalExt for P {}

pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional::new(parser)
}
