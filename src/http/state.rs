//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::FortuneService;

/// Shared application state passed to all handlers.
///
/// Everything here is read-only after startup, so requests run
/// concurrently without coordination.
#[derive(Clone)]
pub struct AppState {
    /// Fortune service wrapping the (optional) completion provider.
    pub fortune: Arc<FortuneService>,
}

impl AppState {
    /// Create a new application state with the given fortune service.
    pub fn new(fortune: Arc<FortuneService>) -> Self {
        Self { fortune }
    }
}
