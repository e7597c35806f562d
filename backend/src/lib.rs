//! # Launch Dashboard Backend
//!
//! Single-page dashboard for a small catalog of rocket launch sites.
//!
//! The backend owns the data and the one reactive behaviour of the page:
//! when the viewer picks a site, the summary line and both bar charts are
//! recomputed. The map overlay is computed once at startup. Drawing is left
//! to the browser (Leaflet for the map, Plotly for the charts).
//!
//! ## Architecture
//!
//! - [`catalog`]: validated, ordered launch-site records
//! - [`models`]: site record and coordinates
//! - [`services`]: map renderer, selection state, view recomputation, presentation shell
//! - [`routes`]: serializable map and view types
//! - [`config`]: environment and TOML configuration
//! - [`http`]: Axum server, page shell and per-viewer sessions

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
