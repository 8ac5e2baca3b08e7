//! Shared application state for the HTTP API.
//!
//! [`AppState`] holds the configured [`Storage`] backend. It carries no
//! per-request data: each reporting-structure computation owns its
//! traversal state, so concurrent requests never interfere.

use orgchart_db::Storage;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Debug, Default)]
pub struct AppState {
    /// Employee and compensation backend.
    pub storage: Storage,
}

impl AppState {
    /// Create application state over the given backend.
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Create application state over an empty in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(Storage::in_memory())
    }
}
