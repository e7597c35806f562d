//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types served over HTTP.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::catalog::SiteCatalog;
pub use crate::error::{DashboardError, DashboardResult};
pub use crate::models::{GeographicLocation, SiteRecord};
pub use crate::routes::map::MapCircle;
pub use crate::routes::map::MapMarker;
pub use crate::routes::map::MapOverlay;
pub use crate::routes::view::AxisLayout;
pub use crate::routes::view::BarChartFigure;
pub use crate::routes::view::BarTrace;
pub use crate::routes::view::ChartLayout;
pub use crate::routes::view::DerivedView;
pub use crate::routes::view::SeriesPoint;
pub use crate::routes::view::ViewUpdate;
