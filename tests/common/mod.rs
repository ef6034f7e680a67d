//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use countstore::{Counter, CountersState};
use parking_lot::Mutex;
use std::sync::Arc;

/// Build a state from `(id, count)` pairs.
pub fn state_of(counters: &[(&str, i64)]) -> CountersState {
    CountersState {
        counters: counters
            .iter()
            .map(|(id, count)| Counter {
                id: (*id).into(),
                count: *count,
            })
            .collect(),
    }
}

/// `(id, count)` pairs of a state, in order.
pub fn pairs(state: &CountersState) -> Vec<(&str, i64)> {
    state
        .counters
        .iter()
        .map(|c| (c.id.as_str(), c.count))
        .collect()
}

/// Records labelled listener calls in invocation order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}
