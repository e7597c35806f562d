//! Router configuration for the dashboard.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Catalog and static map
        .route("/sites", get(handlers::list_sites))
        .route("/map", get(handlers::get_map_overlay))
        .route("/map/document", get(handlers::get_map_document))
        // Stateless recomputation
        .route("/views/{site}", get(handlers::get_view))
        // Per-viewer sessions
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/{session_id}",
            get(handlers::get_session).delete(handlers::close_session),
        )
        .route("/sessions/{session_id}/selection", put(handlers::change_selection));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Dashboard;

    #[test]
    fn test_router_creation() {
        let dashboard = Dashboard::sample().unwrap().into_shared();
        let state = AppState::new(dashboard);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
