use crate::models::{GeographicLocation, SiteRecord};

fn record(name: &str, latitude: f64, longitude: f64, launch_count: u32, success_rate: f64) -> SiteRecord {
    SiteRecord {
        name: name.to_string(),
        coordinates: GeographicLocation {
            latitude,
            longitude,
        },
        launch_count,
        success_rate,
    }
}

/// Sample SpaceX launch sites shipped with the dashboard.
pub fn sample_sites() -> Vec<SiteRecord> {
    vec![
        record("Cape Canaveral", 28.3922, -80.6077, 50, 0.92),
        record("Kennedy Space Center", 28.5721, -80.6480, 45, 0.95),
        record("Vandenberg Space Force Base", 34.7322, -120.6105, 20, 0.85),
    ]
}
