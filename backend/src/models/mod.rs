//! Domain models for launch sites.

pub mod site;

pub use site::{format_percent, GeographicLocation, SiteRecord};
