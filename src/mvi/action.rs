//! Base trait for actions in MVI architecture.

use std::fmt::Debug;

/// Marker trait for action values.
///
/// Actions are plain data: they describe a change, they never perform it.
/// Only a [`Reducer`](super::Reducer) turns an action into a new state.
pub trait Action: Debug + Send + 'static {}
