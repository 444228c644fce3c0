use std::sync::Arc;

use psymetric_storage::memory::MemoryStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
}
