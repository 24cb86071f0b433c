use log::trace;

use crate::{util, LOG_TARGET};

const INPUT_WIDTH: usize = 35;
const LABEL_WIDTH: usize = 10;

pub(crate) fn success(label: &'static str, input: &str, remainder: &str) {
    trace!(
        target: LOG_TARGET,
        "{inp:<iw$} {label:<lw$} -> ok, rest {rest}",
        iw = INPUT_WIDTH,
        lw = LABEL_WIDTH,
        inp = util::snippet(input),
        rest = util::snippet(remainder),
    );
}

pub(crate) fn failure(label: &'static str, input: &str) {
    trace!(
        target: LOG_TARGET,
        "{inp:<iw$} {label:<lw$} -> no match",
        iw = INPUT_WIDTH,
        lw = LABEL_WIDTH,
        inp = util::snippet(input),
    );
}
