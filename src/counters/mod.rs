//! Counter list state, its action vocabulary and reducer.

mod action;
mod reducer;
mod state;

pub use action::{add_counter, decrement_counter, del_counter, increment_counter, CounterAction};
pub use reducer::CounterReducer;
pub use state::{Counter, CounterId, CountersState};

use crate::store::Store;

/// Store over the counter reducer.
pub type CounterStore = Store<CounterReducer>;

/// Create a store holding the default state: one fresh counter at zero.
pub fn counter_store() -> CounterStore {
    Store::new(CountersState::initial())
}
