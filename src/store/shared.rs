//! Thread-safe store handle.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::mvi::Reducer;
use crate::store::{Store, Subscription};

/// Cloneable, thread-safe wrapper around [`Store`].
///
/// One lock guards the whole dispatch (reduce + notify), so dispatches from
/// different threads never interleave. Listeners run under that lock and must
/// not call back into the same `SharedStore`.
pub struct SharedStore<R: Reducer> {
    inner: Arc<Mutex<Store<R>>>,
}

impl<R: Reducer> Clone for SharedStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> SharedStore<R> {
    pub fn new(initial: R::State) -> Self {
        Self::from_store(Store::new(initial))
    }

    pub fn from_store(store: Store<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Get a clone of the current state.
    pub fn get_state(&self) -> R::State {
        self.inner.lock().get_state().clone()
    }

    pub fn dispatch(&self, action: R::Action) {
        self.inner.lock().dispatch(action);
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        self.inner.lock().subscribe(listener)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.inner.lock().unsubscribe(subscription)
    }
}
