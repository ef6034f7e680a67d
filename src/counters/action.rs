//! Actions for the counter list.

use serde::{Deserialize, Serialize};

use crate::counters::state::CounterId;
use crate::mvi::Action;

/// Actions that can be dispatched to the counter reducer.
///
/// The serde form is a tagged object, e.g. `{"type":"INCREMENT","id":"..."}`
/// or `{"type":"ADD_COUNTER"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAction {
    /// Add one to the counter with this id.
    Increment { id: CounterId },

    /// Subtract one from the counter with this id.
    Decrement { id: CounterId },

    /// Append a new counter at zero.
    AddCounter,

    /// Remove the counter with this id.
    DelCounter { id: CounterId },
}

impl Action for CounterAction {}

pub fn increment_counter(id: impl Into<CounterId>) -> CounterAction {
    CounterAction::Increment { id: id.into() }
}

pub fn decrement_counter(id: impl Into<CounterId>) -> CounterAction {
    CounterAction::Decrement { id: id.into() }
}

pub fn add_counter() -> CounterAction {
    CounterAction::AddCounter
}

pub fn del_counter(id: impl Into<CounterId>) -> CounterAction {
    CounterAction::DelCounter { id: id.into() }
}
