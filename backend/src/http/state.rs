//! Application state for the HTTP server.

use std::sync::Arc;

use crate::context::DashboardContext;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable dataset context, read concurrently by every request
    pub context: Arc<DashboardContext>,
}

impl AppState {
    /// Create a new application state around a loaded context.
    pub fn new(context: Arc<DashboardContext>) -> Self {
        Self { context }
    }
}

impl From<DashboardContext> for AppState {
    fn from(context: DashboardContext) -> Self {
        Self::new(Arc::new(context))
    }
}
