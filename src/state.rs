//! Shared application state for all routes.

use crate::store::GroupStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; handlers never reach for a global client.
    pub store: Arc<dyn GroupStore>,
}

impl AppState {
    pub fn new<S: GroupStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
