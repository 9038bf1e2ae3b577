use std::sync::Arc;

use service::EntityStore;

/// Shared handler state; cloning only bumps the store's refcount.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntityStore>,
}

impl AppState {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }
}
