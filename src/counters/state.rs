//! State for the counter list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mvi::AppState;

/// Opaque counter identifier.
///
/// Generated ids are random v4 UUIDs. Any string is accepted when an id
/// comes from outside (actions, commands), it simply may match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterId(String);

impl CounterId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CounterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CounterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub id: CounterId,
    pub count: i64,
}

impl Counter {
    /// A counter at zero with a freshly generated id.
    pub fn new() -> Self {
        Self::with_id(CounterId::generate())
    }

    /// A counter at zero with the given id.
    pub fn with_id(id: impl Into<CounterId>) -> Self {
        Self {
            id: id.into(),
            count: 0,
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered list of counters, in insertion order.
///
/// Counter ids are unique within the list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountersState {
    pub counters: Vec<Counter>,
}

impl AppState for CountersState {}

impl CountersState {
    /// The default application state: exactly one fresh counter at zero.
    pub fn initial() -> Self {
        Self::with_counters(1)
    }

    /// A state holding `n` fresh counters at zero.
    pub fn with_counters(n: usize) -> Self {
        Self {
            counters: (0..n).map(|_| Counter::new()).collect(),
        }
    }

    pub fn get(&self, id: &CounterId) -> Option<&Counter> {
        self.counters.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &CounterId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(CountersState::default().is_empty());
    }

    #[test]
    fn initial_has_one_counter_at_zero() {
        let state = CountersState::initial();
        assert_eq!(state.len(), 1);
        assert_eq!(state.counters[0].count, 0);
    }

    #[test]
    fn generated_ids_are_uuids_and_distinct() {
        let state = CountersState::with_counters(3);
        for counter in &state.counters {
            assert!(uuid::Uuid::parse_str(counter.id.as_str()).is_ok());
        }
        assert_ne!(state.counters[0].id, state.counters[1].id);
        assert_ne!(state.counters[1].id, state.counters[2].id);
    }

    #[test]
    fn get_finds_by_id() {
        let state = CountersState {
            counters: vec![Counter::with_id("a"), Counter::with_id("b")],
        };
        assert_eq!(state.get(&"b".into()).map(|c| c.count), Some(0));
        assert!(!state.contains(&"c".into()));
    }

    #[test]
    fn serializes_like_plain_objects() {
        let state = CountersState {
            counters: vec![Counter { id: "a".into(), count: -2 }],
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"counters":[{"id":"a","count":-2}]}"#);
    }
}
