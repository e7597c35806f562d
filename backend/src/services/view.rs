use crate::api::{DerivedView, SeriesPoint};
use crate::catalog::SiteCatalog;
use crate::error::DashboardResult;
use crate::models::{format_percent, SiteRecord};

/// Summary line for one site, e.g.
/// `Cape Canaveral - Launches: 50, Success Rate: 92.0%`.
pub fn summary_text(site: &SiteRecord) -> String {
    format!(
        "{} - Launches: {}, Success Rate: {}%",
        site.name,
        site.launch_count,
        format_percent(site.success_percent())
    )
}

/// Launch counts for every site, in catalog order.
pub fn launch_series(catalog: &SiteCatalog) -> Vec<SeriesPoint<u32>> {
    catalog
        .sites()
        .iter()
        .map(|s| SeriesPoint::new(s.name.clone(), s.launch_count))
        .collect()
}

/// Success percentages for every site, in catalog order.
pub fn success_series(catalog: &SiteCatalog) -> Vec<SeriesPoint<f64>> {
    catalog
        .sites()
        .iter()
        .map(|s| SeriesPoint::new(s.name.clone(), s.success_percent()))
        .collect()
}

/// Recompute the derived view for a selected site.
///
/// Pure and deterministic. Fails with `NotFound` when `selected` is not an
/// exact catalog name. Both series always cover the whole catalog; only the
/// summary depends on the selection.
pub fn compute_view(catalog: &SiteCatalog, selected: &str) -> DashboardResult<DerivedView> {
    let site = catalog.lookup(selected)?;
    log::debug!("Recomputing dashboard view for '{}'", site.name);

    Ok(DerivedView {
        selected: site.name.clone(),
        summary_text: summary_text(site),
        launch_series: launch_series(catalog),
        success_series: success_series(catalog),
    })
}
