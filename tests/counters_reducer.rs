mod common;

use common::{pairs, state_of};
use countstore::mvi::Reducer;
use countstore::{
    add_counter, decrement_counter, del_counter, increment_counter, CounterReducer, CountersState,
};

#[test]
fn increment_adds_one_to_matching_counter() {
    let state = state_of(&[("a", 3), ("b", 10)]);
    let new = CounterReducer::reduce(state, increment_counter("a"));
    assert_eq!(pairs(&new), vec![("a", 4), ("b", 10)]);
}

#[test]
fn decrement_subtracts_one_from_matching_counter() {
    let state = state_of(&[("a", 3), ("b", 10)]);
    let new = CounterReducer::reduce(state, decrement_counter("b"));
    assert_eq!(pairs(&new), vec![("a", 3), ("b", 9)]);
}

#[test]
fn decrement_goes_below_zero() {
    let state = state_of(&[("a", 0)]);
    let state = CounterReducer::reduce(state, decrement_counter("a"));
    let state = CounterReducer::reduce(state, decrement_counter("a"));
    assert_eq!(state.counters[0].count, -2);
}

#[test]
fn increment_unknown_id_is_noop() {
    let state = state_of(&[("a", 1), ("b", 2)]);
    let new = CounterReducer::reduce(state.clone(), increment_counter("zzz"));
    assert_eq!(new, state);
}

#[test]
fn decrement_unknown_id_is_noop() {
    let state = state_of(&[("a", 1)]);
    let new = CounterReducer::reduce(state.clone(), decrement_counter(""));
    assert_eq!(new, state);
}

#[test]
fn increment_then_decrement_round_trips() {
    let state = state_of(&[("a", 5), ("b", -1)]);
    let new = CounterReducer::reduce(state.clone(), increment_counter("b"));
    let new = CounterReducer::reduce(new, decrement_counter("b"));
    assert_eq!(new, state);
}

#[test]
fn add_appends_fresh_counter_at_zero() {
    let state = state_of(&[("a", 4), ("b", 2)]);
    let new = CounterReducer::reduce(state.clone(), add_counter());

    assert_eq!(new.len(), state.len() + 1);
    assert_eq!(&new.counters[..2], &state.counters[..]);

    let added = &new.counters[2];
    assert_eq!(added.count, 0);
    assert!(!state.contains(&added.id));
}

#[test]
fn add_to_empty_state() {
    let new = CounterReducer::reduce(CountersState::default(), add_counter());
    assert_eq!(new.len(), 1);
    assert_eq!(new.counters[0].count, 0);
}

#[test]
fn repeated_adds_produce_unique_ids() {
    let mut state = CountersState::default();
    for _ in 0..50 {
        state = CounterReducer::reduce(state, add_counter());
    }
    let mut ids: Vec<_> = state.counters.iter().map(|c| c.id.to_string()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn delete_removes_only_matching_counter_preserving_order() {
    let state = state_of(&[("a", 1), ("b", 2), ("c", 3)]);
    let new = CounterReducer::reduce(state, del_counter("b"));
    assert_eq!(pairs(&new), vec![("a", 1), ("c", 3)]);
}

#[test]
fn delete_unknown_id_is_noop() {
    let state = state_of(&[("a", 1), ("b", 2)]);
    let new = CounterReducer::reduce(state.clone(), del_counter("c"));
    assert_eq!(new, state);
}

#[test]
fn delete_last_counter_leaves_empty_state() {
    let new = CounterReducer::reduce(state_of(&[("a", 9)]), del_counter("a"));
    assert!(new.is_empty());
}

#[test]
fn increment_wraps_at_max() {
    let new = CounterReducer::reduce(state_of(&[("a", i64::MAX)]), increment_counter("a"));
    assert_eq!(new.counters[0].count, i64::MIN);
}

#[test]
fn walkthrough_scenario() {
    let state = state_of(&[("a", 0)]);

    let state = CounterReducer::reduce(state, increment_counter("a"));
    let state = CounterReducer::reduce(state, increment_counter("a"));
    assert_eq!(pairs(&state), vec![("a", 2)]);

    let state = CounterReducer::reduce(state, add_counter());
    assert_eq!(state.len(), 2);
    assert_eq!(state.counters[1].count, 0);
    let added = state.counters[1].id.clone();

    let state = CounterReducer::reduce(state, del_counter("a"));
    assert_eq!(state.len(), 1);
    assert_eq!(state.counters[0].id, added);
}
