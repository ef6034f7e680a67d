//! State container: holds the current snapshot, applies actions through a
//! reducer and notifies subscribers.

mod listener;
mod shared;

pub use listener::state_logger;
pub use shared::SharedStore;

use crate::mvi::Reducer;

type Listener<S> = Box<dyn FnMut(&S) + Send>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Single-owner state container.
///
/// Created by the caller with an explicit initial state. `dispatch` runs to
/// completion (reduce, then every listener) before returning.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<(Subscription, Listener<R::State>)>,
    next_subscription: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state snapshot.
    pub fn get_state(&self) -> &R::State {
        &self.state
    }

    /// Reduce `action` into a new state, then notify listeners in
    /// registration order.
    ///
    /// The new state is committed before any listener runs, so a panicking
    /// listener leaves the store holding the reduced state.
    pub fn dispatch(&mut self, action: R::Action) {
        tracing::debug!(?action, listeners = self.listeners.len(), "Dispatching action");

        self.state = R::reduce(std::mem::take(&mut self.state), action);

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Register a listener invoked with the new state after every dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        tracing::trace!(?subscription, "Listener subscribed");
        subscription
    }

    /// Remove a listener. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(s, _)| *s != subscription);
        let removed = self.listeners.len() != before;
        tracing::trace!(?subscription, removed, "Listener unsubscribed");
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
