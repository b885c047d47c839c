//! Per-thread call counters for lazily computed properties.
//!
//! Only compiled for tests. Code paths that must run at most once per node call
//! [`hit`]; tests read the count back with [`count`].

use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static COUNTS: RefCell<HashMap<&'static str, usize>> = RefCell::new(HashMap::new());
}

pub(crate) const TEXT_WHITESPACE_SCAN: &str = "text.whitespace_scan";
pub(crate) const PARAGRAPH_WHITESPACE_SCAN: &str = "paragraph.whitespace_scan";
pub(crate) const DECL_INFO_FILL: &str = "decl_info.fill";

pub(crate) fn hit(probe: &'static str) {
    COUNTS.with(|counts| *counts.borrow_mut().entry(probe).or_insert(0) += 1);
}

pub(crate) fn count(probe: &'static str) -> usize {
    COUNTS.with(|counts| counts.borrow().get(probe).copied().unwrap_or(0))
}

pub(crate) fn reset() {
    COUNTS.with(|counts| counts.borrow_mut().clear());
}
