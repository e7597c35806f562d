//! Application state for the HTTP server.

use std::sync::Arc;

use super::sessions::SessionStore;
use crate::services::Dashboard;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog, settings and pre-rendered map, shared read-only
    pub dashboard: Arc<Dashboard>,
    /// Per-viewer selection state
    pub sessions: SessionStore,
}

impl AppState {
    /// Create a new application state around a dashboard. Sessions expire
    /// after the dashboard's configured idle TTL.
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        let sessions = SessionStore::new(dashboard.session_ttl());
        Self {
            dashboard,
            sessions,
        }
    }
}
