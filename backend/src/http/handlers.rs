//! HTTP handlers for the dashboard.
//!
//! Each handler corresponds to an endpoint and delegates to the service
//! layer. Recomputation is synchronous and cheap, so nothing is offloaded to
//! blocking threads.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

use super::dto::{
    HealthResponse, SelectionRequest, SessionResponse, SiteListResponse, ViewResponse,
};
use super::error::AppError;
use super::page::render_page;
use super::state::AppState;
use crate::api::MapOverlay;
use crate::services::compute_view;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        sites: state.dashboard.catalog().len(),
    }))
}

// =============================================================================
// Presentation Shell
// =============================================================================

/// GET /
///
/// Open a new session and render the dashboard page for it.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (session_id, session) = state.sessions.create(&state.dashboard)?;
    let page = render_page(&state.dashboard, &session_id, &session)?;
    Ok(Html(page))
}

// =============================================================================
// Catalog and Map
// =============================================================================

/// GET /v1/sites
pub async fn list_sites(State(state): State<AppState>) -> HandlerResult<SiteListResponse> {
    let sites = state.dashboard.catalog().sites().to_vec();
    let total = sites.len();
    Ok(Json(SiteListResponse { sites, total }))
}

/// GET /v1/map
///
/// Static overlay: markers and circles for every site.
pub async fn get_map_overlay(State(state): State<AppState>) -> HandlerResult<MapOverlay> {
    Ok(Json(state.dashboard.map_overlay().clone()))
}

/// GET /v1/map/document
///
/// Standalone Leaflet page embedded by the dashboard iframe.
pub async fn get_map_document(State(state): State<AppState>) -> Html<String> {
    Html(state.dashboard.map_document().to_string())
}

// =============================================================================
// Views
// =============================================================================

/// GET /v1/views/{site}
///
/// Derived view for a site without touching any session.
pub async fn get_view(
    State(state): State<AppState>,
    Path(site): Path<String>,
) -> HandlerResult<ViewResponse> {
    let view = compute_view(state.dashboard.catalog(), &site)?;
    Ok(Json(view.into()))
}

// =============================================================================
// Sessions
// =============================================================================

/// POST /v1/sessions
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let (session_id, session) = state.sessions.create(&state.dashboard)?;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::new(session_id, &session)),
    ))
}

/// GET /v1/sessions/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<SessionResponse> {
    let session = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| AppError::session_not_found(&session_id))?;
    Ok(Json(SessionResponse::new(session_id, &session)))
}

/// PUT /v1/sessions/{session_id}/selection
///
/// Selector change. On rejection the session keeps its previous view.
pub async fn change_selection(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<SelectionRequest>,
) -> HandlerResult<SessionResponse> {
    if request.site.is_empty() {
        return Err(AppError::BadRequest("site must not be empty".to_string()));
    }

    let session = state
        .sessions
        .change_selection(&state.dashboard, &session_id, &request.site)
        .ok_or_else(|| AppError::session_not_found(&session_id))??;

    tracing::info!(session = %session_id, site = %request.site, "selection changed");
    Ok(Json(SessionResponse::new(session_id, &session)))
}

/// DELETE /v1/sessions/{session_id}
pub async fn close_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(&session_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::session_not_found(&session_id))
    }
}
