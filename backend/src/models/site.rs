use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Geographic position of a launch site in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicLocation {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
}

impl GeographicLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// `[lat, lon]` pair as Leaflet expects it.
    pub fn as_lat_lng(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

/// A single launch site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRecord {
    pub name: String,
    pub coordinates: GeographicLocation,
    pub launch_count: u32,
    /// Fraction of successful launches in [0, 1]
    pub success_rate: f64,
}

impl SiteRecord {
    /// Build a record, checking coordinate ranges and the success rate.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        launch_count: u32,
        success_rate: f64,
    ) -> DashboardResult<Self> {
        let name = name.into();
        let coordinates = GeographicLocation::new(latitude, longitude).map_err(|message| {
            DashboardError::InvalidCoordinates {
                name: name.clone(),
                message,
            }
        })?;
        let record = Self {
            name,
            coordinates,
            launch_count,
            success_rate,
        };
        record.validate()?;
        Ok(record)
    }

    /// Re-check invariants on a record that may have been deserialized directly.
    pub fn validate(&self) -> DashboardResult<()> {
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(DashboardError::InvalidSuccessRate {
                name: self.name.clone(),
                rate: self.success_rate,
            });
        }
        GeographicLocation::new(self.coordinates.latitude, self.coordinates.longitude).map_err(
            |message| DashboardError::InvalidCoordinates {
                name: self.name.clone(),
                message,
            },
        )?;
        Ok(())
    }

    /// Success rate scaled to a percentage.
    pub fn success_percent(&self) -> f64 {
        self.success_rate * 100.0
    }
}

/// Format a percentage in shortest round-trip form, always keeping a
/// fractional part (`92.0`, `7.000000000000001`).
///
/// Magnitudes below `1e-4` (or from `1e16`) switch to exponent notation with a
/// signed, two-digit exponent: `1e-05`, `2.5e-07`.
pub fn format_percent(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
