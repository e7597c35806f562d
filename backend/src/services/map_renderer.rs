//! Static map overlay for the launch sites.
//!
//! The overlay is computed once from the full catalog and never depends on
//! the current selection. [`render_map_document`] turns it into a standalone
//! Leaflet page that the dashboard embeds in an iframe; tiles come from the
//! public OpenStreetMap servers.

use crate::api::{MapCircle, MapMarker, MapOverlay};
use crate::catalog::SiteCatalog;
use crate::config::MapSettings;
use crate::error::DashboardResult;
use crate::models::{format_percent, SiteRecord};

/// Radius of the circle drawn around every site, in meters.
pub const CIRCLE_RADIUS_M: f64 = 50_000.0;
pub const OVERLAY_COLOR: &str = "blue";
pub const CIRCLE_FILL_OPACITY: f64 = 0.1;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Marker hover text: name, launch count and success percentage on separate lines.
pub fn marker_tooltip(site: &SiteRecord) -> String {
    format!(
        "{}\n{} launches\n{}% success",
        site.name,
        site.launch_count,
        format_percent(site.success_percent())
    )
}

/// Marker click popup as HTML: name, launches and success rate separated by `<br>`.
pub fn marker_popup(site: &SiteRecord) -> String {
    format!(
        "{}<br>Launches: {}<br>Success Rate: {}%",
        html_escape::encode_text(&site.name),
        site.launch_count,
        format_percent(site.success_percent())
    )
}

fn marker_for(site: &SiteRecord) -> MapMarker {
    MapMarker {
        site_name: site.name.clone(),
        location: site.coordinates,
        tooltip: marker_tooltip(site),
        popup: marker_popup(site),
        color: OVERLAY_COLOR.to_string(),
    }
}

fn circle_for(site: &SiteRecord) -> MapCircle {
    MapCircle {
        site_name: site.name.clone(),
        center: site.coordinates,
        radius_m: CIRCLE_RADIUS_M,
        color: OVERLAY_COLOR.to_string(),
        fill: true,
        fill_opacity: CIRCLE_FILL_OPACITY,
        popup: format!("{} Launch Area", site.name),
    }
}

/// Build the overlay: one marker and one circle per site, in catalog order.
pub fn render_overlay(catalog: &SiteCatalog, settings: &MapSettings) -> DashboardResult<MapOverlay> {
    let center = settings.center()?;
    let markers = catalog.sites().iter().map(marker_for).collect();
    let circles = catalog.sites().iter().map(circle_for).collect();

    Ok(MapOverlay {
        center,
        zoom: settings.zoom,
        markers,
        circles,
    })
}

/// Render the overlay as a self-contained Leaflet HTML document.
pub fn render_map_document(overlay: &MapOverlay) -> DashboardResult<String> {
    let overlay_json = serde_json::to_string(overlay).map_err(|e| {
        crate::error::DashboardError::Configuration(format!("Failed to encode map overlay: {}", e))
    })?;
    // Keep the payload from closing the surrounding <script> element.
    let overlay_json = overlay_json.replace("</", "<\\/");

    Ok(MAP_TEMPLATE
        .replace("{{LEAFLET_CSS}}", LEAFLET_CSS)
        .replace("{{LEAFLET_JS}}", LEAFLET_JS)
        .replace("{{TILE_URL}}", TILE_URL)
        .replace("{{TILE_ATTRIBUTION}}", &TILE_ATTRIBUTION.replace('"', "\\\""))
        .replace("{{OVERLAY_JSON}}", &overlay_json))
}

const MAP_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<link rel="stylesheet" href="{{LEAFLET_CSS}}">
<script src="{{LEAFLET_JS}}"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
const overlay = {{OVERLAY_JSON}};
const escapeHtml = (s) => s.replace(/[&<>"']/g, (c) => ({'&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'}[c]));
const map = L.map('map').setView([overlay.center.latitude, overlay.center.longitude], overlay.zoom);
L.tileLayer("{{TILE_URL}}", { attribution: "{{TILE_ATTRIBUTION}}" }).addTo(map);
for (const m of overlay.markers) {
  L.marker([m.location.latitude, m.location.longitude])
    .bindTooltip(escapeHtml(m.tooltip).replace(/\n/g, '<br>'))
    .bindPopup(m.popup)
    .addTo(map);
}
for (const c of overlay.circles) {
  L.circle([c.center.latitude, c.center.longitude], {
    radius: c.radius_m,
    color: c.color,
    fill: c.fill,
    fillOpacity: c.fill_opacity,
  }).bindPopup(escapeHtml(c.popup)).addTo(map);
}
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SiteRecord;

    fn overlay() -> MapOverlay {
        render_overlay(&SiteCatalog::sample(), &MapSettings::default()).unwrap()
    }

    #[test]
    fn test_one_marker_and_circle_per_site() {
        let overlay = overlay();
        assert_eq!(overlay.markers.len(), 3);
        assert_eq!(overlay.circles.len(), 3);
        let names: Vec<&str> = overlay.markers.iter().map(|m| m.site_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Cape Canaveral",
                "Kennedy Space Center",
                "Vandenberg Space Force Base"
            ]
        );
    }

    #[test]
    fn test_marker_tooltip_format() {
        let overlay = overlay();
        assert_eq!(
            overlay.markers[0].tooltip,
            "Cape Canaveral\n50 launches\n92.0% success"
        );
        assert_eq!(
            overlay.markers[2].tooltip,
            "Vandenberg Space Force Base\n20 launches\n85.0% success"
        );
    }

    #[test]
    fn test_marker_popup_format() {
        let overlay = overlay();
        assert_eq!(
            overlay.markers[0].popup,
            "Cape Canaveral<br>Launches: 50<br>Success Rate: 92.0%"
        );
        assert_eq!(
            overlay.markers[1].popup,
            "Kennedy Space Center<br>Launches: 45<br>Success Rate: 95.0%"
        );
    }

    #[test]
    fn test_marker_popup_escapes_name() {
        let site = SiteRecord::new("Pad <39A> & Co", 0.0, 0.0, 2, 0.5).unwrap();
        assert_eq!(
            marker_popup(&site),
            "Pad &lt;39A&gt; &amp; Co<br>Launches: 2<br>Success Rate: 50.0%"
        );
    }

    #[test]
    fn test_map_document_binds_marker_popups() {
        let html = render_map_document(&overlay()).unwrap();
        assert!(html.contains(".bindPopup(m.popup)"));
        assert!(html.contains("Cape Canaveral<br>Launches: 50<br>Success Rate: 92.0%"));
    }

    #[test]
    fn test_circle_styling() {
        for (circle, site) in overlay().circles.iter().zip(SiteCatalog::sample().sites()) {
            assert_eq!(circle.center, site.coordinates);
            assert_eq!(circle.radius_m, 50_000.0);
            assert_eq!(circle.color, "blue");
            assert!(circle.fill);
            assert_eq!(circle.fill_opacity, 0.1);
            assert_eq!(circle.popup, format!("{} Launch Area", site.name));
        }
    }

    #[test]
    fn test_marker_sits_on_site_coordinates() {
        let overlay = overlay();
        assert_eq!(overlay.markers[1].location.as_lat_lng(), [28.5721, -80.6480]);
        assert_eq!(overlay.markers[0].location, overlay.circles[0].center);
    }

    #[test]
    fn test_viewport_from_settings() {
        let settings = MapSettings {
            center_lat: 34.0,
            center_lon: -120.0,
            zoom: 3,
        };
        let overlay = render_overlay(&SiteCatalog::sample(), &settings).unwrap();
        assert_eq!(overlay.center.as_lat_lng(), [34.0, -120.0]);
        assert_eq!(overlay.zoom, 3);
    }

    #[test]
    fn test_map_document_embeds_overlay() {
        let html = render_map_document(&overlay()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("leaflet.js"));
        assert!(html.contains("Kennedy Space Center Launch Area"));
        assert!(html.contains("\"radius_m\":50000.0"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_map_document_escapes_script_close() {
        let catalog = SiteCatalog::new(vec![
            SiteRecord::new("</script><b>", 0.0, 0.0, 1, 0.5).unwrap(),
        ])
        .unwrap();
        let overlay = render_overlay(&catalog, &MapSettings::default()).unwrap();
        let html = render_map_document(&overlay).unwrap();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains("<\\/script><b>"));
    }
}
