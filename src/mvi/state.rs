//! Base trait for application state in MVI architecture.

/// Marker trait for state snapshots.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
/// - Cheap to default (the store swaps in `Default` while reducing)
pub trait AppState: Clone + PartialEq + Default + Send + 'static {}
