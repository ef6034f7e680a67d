//! Model-View-Intent (MVI) primitives for unidirectional state flow.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Listeners
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, replaced wholesale on every dispatch
//! - **Action**: Description of an intended change
//! - **Reducer**: Pure function that computes the next state from an action

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::AppState;
