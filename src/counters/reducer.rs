use crate::counters::action::CounterAction;
use crate::counters::state::{Counter, CounterId, CountersState};
use crate::mvi::Reducer;

/// Reducer for the counter list.
///
/// Takes the previous snapshot by value: once reduced, the old state is gone,
/// so no caller can observe it changing.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CountersState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CounterAction::Increment { id } => {
                update_count(state, &id, |count| count.wrapping_add(1))
            }
            CounterAction::Decrement { id } => {
                update_count(state, &id, |count| count.wrapping_sub(1))
            }
            CounterAction::AddCounter => {
                let mut counters = state.counters;
                counters.push(Counter::new());
                CountersState { counters }
            }
            CounterAction::DelCounter { id } => {
                if !state.contains(&id) {
                    return state;
                }
                let counters = state
                    .counters
                    .into_iter()
                    .filter(|counter| counter.id != id)
                    .collect();
                CountersState { counters }
            }
        }
    }
}

/// Apply `f` to the count of the counter matching `id`; unknown ids are a no-op.
fn update_count(
    state: CountersState,
    id: &CounterId,
    f: impl FnOnce(i64) -> i64,
) -> CountersState {
    let Some(index) = state.counters.iter().position(|c| &c.id == id) else {
        return state;
    };
    let mut counters = state.counters;
    counters[index].count = f(counters[index].count);
    CountersState { counters }
}
