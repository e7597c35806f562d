//! Presentation shell state.
//!
//! [`Dashboard`] holds everything that is shared and fixed for the lifetime of
//! the process: catalog, page title, initial selection and the pre-rendered
//! map. [`DashboardSession`] is one viewer's selection and the view derived
//! from it. The only transition is a selector change:
//!
//! ```text
//! (any selection) --on_selection_changed(name)--> (name, recomputed view)
//! ```
//!
//! A rejected change leaves both the selection and the displayed view as
//! they were.

use std::sync::Arc;
use std::time::Duration;

use crate::api::{DerivedView, MapOverlay};
use crate::catalog::SiteCatalog;
use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};

use super::map_renderer::{render_map_document, render_overlay};
use super::selection::SelectionState;
use super::view::compute_view;

/// Shared, read-only dashboard definition.
#[derive(Debug)]
pub struct Dashboard {
    catalog: SiteCatalog,
    title: String,
    initial_site: String,
    map_overlay: MapOverlay,
    map_document: String,
    session_ttl: Duration,
}

impl Dashboard {
    /// Build the dashboard from configuration. Fails before anything is
    /// rendered when the catalog is empty or invalid, or when the configured
    /// initial site is not in it.
    pub fn from_config(config: &DashboardConfig) -> DashboardResult<Self> {
        let catalog = config.catalog()?;
        let initial_site = match &config.dashboard.initial_site {
            Some(name) => {
                if !catalog.contains(name) {
                    return Err(DashboardError::Configuration(format!(
                        "initial_site '{}' is not in the site catalog",
                        name
                    )));
                }
                name.clone()
            }
            None => catalog.first().name.clone(),
        };

        let map_overlay = render_overlay(&catalog, &config.map)?;
        let map_document = render_map_document(&map_overlay)?;
        log::info!(
            "Dashboard ready: {} sites, initial selection '{}'",
            catalog.len(),
            initial_site
        );

        Ok(Self {
            catalog,
            title: config.dashboard.title.clone(),
            initial_site,
            map_overlay,
            map_document,
            session_ttl: config.dashboard.session_ttl(),
        })
    }

    /// Dashboard over the sample catalog with default settings.
    pub fn sample() -> DashboardResult<Self> {
        Self::from_config(&DashboardConfig::default())
    }

    pub fn catalog(&self) -> &SiteCatalog {
        &self.catalog
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn initial_site(&self) -> &str {
        &self.initial_site
    }

    pub fn map_overlay(&self) -> &MapOverlay {
        &self.map_overlay
    }

    pub fn map_document(&self) -> &str {
        &self.map_document
    }

    /// How long an idle viewer session is kept.
    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Start a viewer session on the initial site.
    pub fn open_session(&self) -> DashboardResult<DashboardSession> {
        let selection = SelectionState::new(&self.catalog, &self.initial_site)?;
        let view = compute_view(&self.catalog, selection.get())?;
        Ok(DashboardSession { selection, view })
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// One viewer's selection and the view currently displayed for it.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSession {
    selection: SelectionState,
    view: DerivedView,
}

impl DashboardSession {
    pub fn selected(&self) -> &str {
        self.selection.get()
    }

    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    /// Handle a selector change: validate, recompute, then commit both the
    /// selection and the view. Nothing changes on error.
    pub fn on_selection_changed(
        &mut self,
        dashboard: &Dashboard,
        name: &str,
    ) -> DashboardResult<&DerivedView> {
        let mut next = self.selection.clone();
        next.set(dashboard.catalog(), name)?;
        let view = compute_view(dashboard.catalog(), next.get())?;

        self.selection = next;
        self.view = view;
        Ok(&self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DashboardSettings, SiteEntry};

    #[test]
    fn test_sample_dashboard() {
        let dashboard = Dashboard::sample().unwrap();
        assert_eq!(dashboard.title(), "SpaceX Launch Dashboard");
        assert_eq!(dashboard.initial_site(), "Cape Canaveral");
        assert_eq!(dashboard.catalog().len(), 3);
        assert_eq!(dashboard.map_overlay().markers.len(), 3);
        assert!(dashboard.map_document().contains("L.map"));
        assert_eq!(dashboard.session_ttl(), Duration::from_secs(1800));
    }

    #[test]
    fn test_open_session_uses_initial_site() {
        let dashboard = Dashboard::sample().unwrap();
        let session = dashboard.open_session().unwrap();
        assert_eq!(session.selected(), "Cape Canaveral");
        assert_eq!(
            session.view().summary_text,
            "Cape Canaveral - Launches: 50, Success Rate: 92.0%"
        );
    }

    #[test]
    fn test_selection_change_recomputes() {
        let dashboard = Dashboard::sample().unwrap();
        let mut session = dashboard.open_session().unwrap();
        let initial_series = session.view().launch_series.clone();

        let view = session
            .on_selection_changed(&dashboard, "Kennedy Space Center")
            .unwrap();
        assert_eq!(
            view.summary_text,
            "Kennedy Space Center - Launches: 45, Success Rate: 95.0%"
        );
        assert_eq!(view.launch_series, initial_series);
        assert_eq!(session.selected(), "Kennedy Space Center");
    }

    #[test]
    fn test_invalid_selection_keeps_prior_view() {
        let dashboard = Dashboard::sample().unwrap();
        let mut session = dashboard.open_session().unwrap();
        session
            .on_selection_changed(&dashboard, "Kennedy Space Center")
            .unwrap();
        let before = session.clone();

        let err = session
            .on_selection_changed(&dashboard, "Nonexistent Site")
            .unwrap_err();
        assert_eq!(err, DashboardError::invalid_selection("Nonexistent Site"));
        assert_eq!(session, before);
    }

    #[test]
    fn test_map_unaffected_by_selection() {
        let dashboard = Dashboard::sample().unwrap();
        let overlay_before = dashboard.map_overlay().clone();
        let mut session = dashboard.open_session().unwrap();
        session
            .on_selection_changed(&dashboard, "Vandenberg Space Force Base")
            .unwrap();
        assert_eq!(dashboard.map_overlay(), &overlay_before);
    }

    #[test]
    fn test_empty_catalog_fails_fast() {
        let config = DashboardConfig {
            sites: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(
            Dashboard::from_config(&config).unwrap_err(),
            DashboardError::EmptyCatalog
        );
    }

    #[test]
    fn test_unknown_initial_site_fails() {
        let config = DashboardConfig {
            dashboard: DashboardSettings {
                initial_site: Some("Baikonur".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = Dashboard::from_config(&config).unwrap_err();
        assert!(matches!(err, DashboardError::Configuration(ref m) if m.contains("Baikonur")));
    }

    #[test]
    fn test_initial_site_defaults_to_first_configured() {
        let config = DashboardConfig {
            sites: Some(vec![
                SiteEntry {
                    name: "Starbase".to_string(),
                    latitude: 25.997,
                    longitude: -97.157,
                    launches: 9,
                    success_rate: 0.5,
                },
                SiteEntry {
                    name: "Kodiak".to_string(),
                    latitude: 57.435,
                    longitude: -152.337,
                    launches: 2,
                    success_rate: 1.0,
                },
            ]),
            ..Default::default()
        };
        let dashboard = Dashboard::from_config(&config).unwrap();
        assert_eq!(dashboard.initial_site(), "Starbase");
        let session = dashboard.open_session().unwrap();
        assert_eq!(session.view().launch_series.len(), 2);
    }
}
