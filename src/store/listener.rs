//! Built-in listeners.

use serde::Serialize;

/// Listener that logs every new state at `info` level as JSON.
pub fn state_logger<S: Serialize + 'static>() -> impl FnMut(&S) + Send + 'static {
    |state: &S| match serde_json::to_string(state) {
        Ok(json) => tracing::info!(state = %json, "The state is now"),
        Err(e) => tracing::warn!(error = %e, "Failed to serialize state"),
    }
}
