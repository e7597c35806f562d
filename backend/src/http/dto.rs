//! Data Transfer Objects for the HTTP API.
//!
//! View and map DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{BarChartFigure, DerivedView, MapOverlay, SiteRecord, ViewUpdate};
use crate::services::DashboardSession;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of sites in the catalog
    pub sites: usize,
}

/// Site list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteListResponse {
    /// Sites in catalog order
    pub sites: Vec<SiteRecord>,
    /// Total count
    pub total: usize,
}

/// Request body for a selector change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Site name picked in the selector
    pub site: String,
}

/// A session's selection together with its derived view and chart figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub selected: String,
    pub view: DerivedView,
    pub update: ViewUpdate,
}

impl SessionResponse {
    pub fn new(session_id: impl Into<String>, session: &DashboardSession) -> Self {
        Self {
            session_id: session_id.into(),
            selected: session.selected().to_string(),
            view: session.view().clone(),
            update: ViewUpdate::from(session.view()),
        }
    }
}

/// Stateless view response for a single site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewResponse {
    pub view: DerivedView,
    pub update: ViewUpdate,
}

impl From<DerivedView> for ViewResponse {
    fn from(view: DerivedView) -> Self {
        let update = ViewUpdate::from(&view);
        Self { view, update }
    }
}
