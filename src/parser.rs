use std::rc::Rc;

use crate::logging;
use crate::outcome::Outcome;

/// A callback invoked with the consumed span after a successful match.
///
/// Consumers are arbitrary external code. A panicking consumer unwinds
/// straight through [`Parser::parse`]: consumers that already fired keep
/// their effects, consumers that would have fired later never run.
pub type Consumer = Rc<dyn Fn(&str)>;

/// The uniform contract shared by every parser node.
///
/// Implementors supply the matching policy (`scan`) and a slot for an
/// optional [`Consumer`]; the provided [`parse`](Parser::parse) entry point
/// wires the two together. Combinators own their children by value, so a
/// parser is an independent immutable tree: attaching a consumer to one
/// copy never affects another.
pub trait Parser: Clone {
    /// The node's own matching policy, without the consumer side effect.
    ///
    /// Must return the input unchanged on failure.
    fn scan<'a>(&self, input: &'a str) -> Outcome<'a>;

    /// The minimum number of characters this parser could ever consume on
    /// a successful match. Purely structural; never consulted to gate a
    /// match.
    fn min_length(&self) -> usize;

    fn consumer(&self) -> Option<&Consumer>;

    fn set_consumer(&mut self, consumer: Consumer);

    /// Short name used in the trace log.
    fn label(&self) -> &'static str;

    /// Attempt to match a prefix of `input`.
    ///
    /// On success the node's consumer (if any) is invoked with exactly the
    /// consumed span. Composites call `parse` on their children, so every
    /// node that matches fires its own consumer with its own span, children
    /// before parents.
    fn parse<'a>(&self, input: &'a str) -> Outcome<'a> {
        let outcome = self.scan(input);
        if outcome.success {
            if let Some(consumer) = self.consumer() {
                let taken = input.len() - outcome.remainder.len();
                consumer(&input[..taken]);
            }
            logging::success(self.label(), input, outcome.remainder);
        } else {
            logging::failure(self.label(), input);
        }
        outcome
    }

    /// Attach a consumer, replacing any previous one, and return the parser
    /// for further chaining.
    fn with_consumer(mut self, consumer: impl Fn(&str) + 'static) -> Self
    where
        Self: Sized,
    {
        self.set_consumer(Rc::new(consumer));
        self
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;

    use crate::prelude::*;
    use test_log::test;

    #[test]
    fn test_consumer_receives_consumed_span() {
        let spans = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&spans);
        let parser = in_range('0', '9')
            .more_than(0)
            .with_consumer(move |s| log.borrow_mut().push(s.to_string()));

        let outcome = parser.parse("42abc");
        assert_eq!(outcome, Outcome::success("abc"));
        assert_eq!(*spans.borrow(), vec!["42"]);
    }

    #[test]
    fn test_consumer_not_invoked_on_failure() {
        let count = Rc::new(Cell::new(0));
        let hits = Rc::clone(&count);
        let parser = char_is('a').with_consumer(move |_| hits.set(hits.get() + 1));

        assert!(!parser.parse("b").success);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_nested_consumers_fire_children_first() {
        let spans = Rc::new(RefCell::new(Vec::new()));
        let log_a = Rc::clone(&spans);
        let log_b = Rc::clone(&spans);
        let log_ab = Rc::clone(&spans);
        let parser = char_is('a')
            .with_consumer(move |s| log_a.borrow_mut().push(format!("a:{s}")))
            .then(char_is('b').with_consumer(move |s| log_b.borrow_mut().push(format!("b:{s}"))))
            .with_consumer(move |s| log_ab.borrow_mut().push(format!("ab:{s}")));

        let outcome = parser.parse("abc");
        assert_eq!(outcome, Outcome::success("c"));
        assert_eq!(*spans.borrow(), vec!["a:a", "b:b", "ab:ab"]);
    }

    #[test]
    fn test_reattach_replaces_consumer() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let hits1 = Rc::clone(&first);
        let hits2 = Rc::clone(&second);
        let parser = char_is('a')
            .with_consumer(move |_| hits1.set(hits1.get() + 1))
            .with_consumer(move |_| hits2.set(hits2.get() + 1));

        parser.parse("a");
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_attaching_to_copy_leaves_original_alone() {
        let count = Rc::new(Cell::new(0));
        let a = char_is('a');
        let combined = a.clone().then(char_is('b'));

        // consumer attached after the combination; the combined tree owns
        // its own copy of `a` and must not see it
        let hits = Rc::clone(&count);
        let _a = a.with_consumer(move |_| hits.set(hits.get() + 1));

        assert!(combined.parse("ab").success);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_consumer_fault_unwinds_after_firing_once() {
        let count = Rc::new(Cell::new(0));
        let hits = Rc::clone(&count);
        let parser = char_is('a').with_consumer(move |_| {
            hits.set(hits.get() + 1);
            panic!("consumer fault");
        });

        let result = catch_unwind(AssertUnwindSafe(|| parser.parse("a")));
        assert!(result.is_err());
        assert_eq!(count.get(), 1);

        // no match, no consumer, no fault
        let outcome = parser.parse("b");
        assert_eq!(outcome, Outcome::failure("b"));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_consumer_fault_aborts_enclosing_composite() {
        let spans = Rc::new(RefCell::new(Vec::new()));
        let log_a = Rc::clone(&spans);
        let log_b = Rc::clone(&spans);
        let parser = char_is('a')
            .with_consumer(move |_| {
                log_a.borrow_mut().push("a");
                panic!("consumer fault");
            })
            .then(char_is('b').with_consumer(move |_| log_b.borrow_mut().push("b")));

        let result = catch_unwind(AssertUnwindSafe(|| parser.parse("ab")));
        assert!(result.is_err());
        // the first consumer fired and kept its effect; the second never ran
        assert_eq!(*spans.borrow(), vec!["a"]);
    }
}
