use std::cell::Cell;
use std::rc::Rc;

use crate::built_in;
use crate::prelude::*;

/// Four dot-separated digit runs, e.g. `192.168.1.1`.
///
/// Matches the shape only; octet ranges are not checked here. Use
/// [`is_ipv4`] for full validation.
pub fn ipv4() -> impl Parser {
    let octet = built_in::whole_number;
    octet()
        .then(built_in::dot())
        .then(octet())
        .then(built_in::dot())
        .then(octet())
        .then(built_in::dot())
        .then(octet())
}

/// Whether the whole input is a valid dotted-quad IPv4 address.
///
/// The shape comes from [`ipv4`]; each digit run is range-checked through
/// a consumer attached to the octet parser.
pub fn is_ipv4(candidate: &str) -> bool {
    let in_range = Rc::new(Cell::new(true));
    let octet = || {
        let ok = Rc::clone(&in_range);
        built_in::whole_number().with_consumer(move |span| {
            if span.parse::<u8>().is_err() {
                ok.set(false);
            }
        })
    };
    let parser = octet()
        .then(built_in::dot())
        .then(octet())
        .then(built_in::dot())
        .then(octet())
        .then(built_in::dot())
        .then(octet());

    let outcome = parser.parse(candidate);
    outcome.success && outcome.remainder.is_empty() && in_range.get()
}
