//! Service layer for the dashboard.
//!
//! Services sit between the catalog and the HTTP layer: the static map
//! renderer, the per-viewer selection cell, the pure view recomputation and
//! the presentation shell that ties them together.

pub mod map_renderer;

pub mod selection;

pub mod shell;

pub mod view;


pub use map_renderer::{render_map_document, render_overlay};
pub use selection::SelectionState;
pub use shell::{Dashboard, DashboardSession};
pub use view::compute_view;
