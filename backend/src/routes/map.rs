use serde::{Deserialize, Serialize};

use crate::models::GeographicLocation;

/// Point marker for one launch site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub site_name: String,
    pub location: GeographicLocation,
    /// Multi-line hover text (`\n` separated)
    pub tooltip: String,
    /// Click popup, already HTML (`<br>` separated, name escaped)
    pub popup: String,
    pub color: String,
}

/// Filled radius circle centred on a launch site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapCircle {
    pub site_name: String,
    pub center: GeographicLocation,
    pub radius_m: f64,
    pub color: String,
    pub fill: bool,
    pub fill_opacity: f64,
    pub popup: String,
}

/// Static map overlay: one marker and one circle per catalog site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOverlay {
    pub center: GeographicLocation,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
    pub circles: Vec<MapCircle>,
}

/// Route function name constants
pub const GET_MAP_OVERLAY: &str = "get_map_overlay";
pub const GET_MAP_DOCUMENT: &str = "get_map_document";
