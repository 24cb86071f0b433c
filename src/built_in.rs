//! Ready-made grammar fragments for common literal shapes.
//!
//! Each function returns a fresh parser value; attach consumers or combine
//! further without affecting other call sites.

use crate::chars::{char_is, in_range, CharEquals, CharInRange};
use crate::more_than::{MoreThan, MoreThanExt};
use crate::optional::{Optional, OptionalExt};
use crate::or::{Or, OrExt};
use crate::parser::Parser;
use crate::then::{Then, ThenExt};

pub fn digit() -> CharInRange {
    in_range('0', '9')
}

pub fn lower_case() -> CharInRange {
    in_range('a', 'z')
}

pub fn upper_case() -> CharInRange {
    in_range('A', 'Z')
}

pub fn letter() -> Or<CharInRange, CharInRange> {
    lower_case().or(upper_case())
}

pub fn alphanumeric() -> impl Parser {
    letter().or(digit())
}

/// One or more digits.
pub fn whole_number() -> MoreThan<CharInRange> {
    digit().more_than(0)
}

/// Optional minus sign, then digits.
pub fn integer() -> Then<Optional<CharEquals>, MoreThan<CharInRange>> {
    dash().optional().then(whole_number())
}

/// Integer, dot, digits.
pub fn decimal() -> impl Parser {
    integer().then(dot()).then(whole_number())
}

/// Integer first, so a decimal input matches only up to the dot.
pub fn number() -> impl Parser {
    integer().or(decimal())
}

pub fn dash() -> CharEquals {
    char_is('-')
}

pub fn dot() -> CharEquals {
    char_is('.')
}

pub fn underscore() -> CharEquals {
    char_is('_')
}

pub fn space() -> CharEquals {
    char_is(' ')
}

pub fn tab() -> CharEquals {
    char_is('\t')
}

pub fn newline() -> CharEquals {
    char_is('\n')
}

pub fn carriage_return() -> CharEquals {
    char_is('\r')
}

/// Any single whitespace character.
pub fn whitespace() -> impl Parser {
    space().or(tab()).or(newline()).or(carriage_return())
}
