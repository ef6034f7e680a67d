//! Counter list managed with a unidirectional state container.
//!
//! Actions describe changes, [`counters::CounterReducer`] computes the next
//! state and [`store::Store`] holds the current snapshot and notifies
//! subscribers after each dispatch.

pub mod cli;
pub mod config;
pub mod counters;
pub mod logging;
pub mod mvi;
pub mod store;

pub use counters::{
    add_counter, counter_store, decrement_counter, del_counter, increment_counter, Counter,
    CounterAction, CounterId, CounterReducer, CounterStore, CountersState,
};
pub use store::{state_logger, SharedStore, Store, Subscription};
