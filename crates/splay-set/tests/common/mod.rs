#![allow(dead_code)]

use simplelog::{Config, LevelFilter, TestLogger};
use splay_set::SplaySet;

/// Routes the crate's `trace!` records into the test harness output.
pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Values visited by stepping a cursor from `begin()` to `end()`.
pub fn walk<T: Clone, C>(set: &SplaySet<T, C>) -> Vec<T> {
    let mut out = Vec::new();
    let end = set.end();
    let mut it = set.begin();
    while it != end {
        out.push(it.value(set).expect("cursor before end is accessible").clone());
        it.move_next(set).expect("cursor before end can advance");
    }
    out
}

/// Values visited by stepping a cursor back from `end()` to `begin()`.
pub fn walk_back<T: Clone, C>(set: &SplaySet<T, C>) -> Vec<T> {
    let mut out = Vec::new();
    let begin = set.begin();
    let mut it = set.end();
    while it != begin {
        it.move_prev(set).expect("cursor after begin can retreat");
        out.push(it.value(set).expect("retreated cursor is accessible").clone());
    }
    out
}
