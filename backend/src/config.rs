//! Dashboard configuration.
//!
//! Two layers:
//! - [`ServerConfig`]: bind address and config-file path from environment variables.
//! - [`DashboardConfig`]: optional TOML file with page, map and catalog settings.
//!
//! Every key has a default, so a missing file yields the sample dashboard.
//! Unknown keys are rejected.
//!
//! ```toml
//! [dashboard]
//! title = "SpaceX Launch Dashboard"
//! initial_site = "Cape Canaveral"
//! session_ttl_secs = 1800
//!
//! [map]
//! center_lat = 28.5721
//! center_lon = -80.6480
//! zoom = 6
//!
//! [[sites]]
//! name = "Cape Canaveral"
//! latitude = 28.3922
//! longitude = -80.6077
//! launches = 50
//! success_rate = 0.92
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::SiteCatalog;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{GeographicLocation, SiteRecord};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8050;
pub const CONFIG_FILE_NAME: &str = "dashboard.toml";
pub const DEFAULT_SESSION_TTL_SECS: u64 = 1800;

/// Server settings loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Explicit dashboard config path, if any
    pub config_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read server settings from the environment.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0)
    /// - `PORT` (optional, default: 8050)
    /// - `DASHBOARD_CONFIG` (optional): path to a dashboard TOML file
    ///
    /// # Errors
    /// Returns an error if `PORT` is not a valid port number.
    pub fn from_env() -> DashboardResult<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                DashboardError::Configuration(format!("PORT must be a valid port number, got '{}'", raw))
            })?,
            Err(_) => DEFAULT_PORT,
        };
        let config_path = env::var("DASHBOARD_CONFIG").ok().map(PathBuf::from);

        Ok(Self {
            host,
            port,
            config_path,
        })
    }

    pub fn socket_addr(&self) -> DashboardResult<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().map_err(|e| {
            DashboardError::Configuration(format!(
                "Invalid bind address {}:{}: {}",
                self.host, self.port, e
            ))
        })
    }

    /// Load the dashboard file named by `DASHBOARD_CONFIG`, else search the
    /// default locations, else fall back to defaults.
    pub fn load_dashboard_config(&self) -> DashboardResult<DashboardConfig> {
        match &self.config_path {
            Some(path) => DashboardConfig::from_file(path),
            None => Ok(DashboardConfig::from_default_location()?.unwrap_or_default()),
        }
    }
}

/// Dashboard configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub map: MapSettings,
    /// Replaces the sample catalog when present (an empty list is an error)
    #[serde(default)]
    pub sites: Option<Vec<SiteEntry>>,
}

/// Page-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardSettings {
    #[serde(default = "default_title")]
    pub title: String,
    /// Site selected when a session opens; defaults to the first catalog site
    #[serde(default)]
    pub initial_site: Option<String>,
    /// Idle time after which a viewer session is dropped
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            initial_site: None,
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}

impl DashboardSettings {
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

/// Map viewport settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapSettings {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lon: default_center_lon(),
            zoom: default_zoom(),
        }
    }
}

impl MapSettings {
    pub fn center(&self) -> DashboardResult<GeographicLocation> {
        GeographicLocation::new(self.center_lat, self.center_lon)
            .map_err(|e| DashboardError::Configuration(format!("Invalid map center: {}", e)))
    }
}

/// One `[[sites]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteEntry {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub launches: u32,
    pub success_rate: f64,
}

fn default_title() -> String {
    "SpaceX Launch Dashboard".to_string()
}

fn default_session_ttl_secs() -> u64 {
    DEFAULT_SESSION_TTL_SECS
}

fn default_center_lat() -> f64 {
    28.5721
}

fn default_center_lon() -> f64 {
    -80.6480
}

fn default_zoom() -> u8 {
    6
}

impl DashboardConfig {
    /// Load dashboard configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DashboardError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> DashboardResult<Self> {
        toml::from_str(content).map_err(|e| {
            DashboardError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Search for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> DashboardResult<Option<Self>> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Loading dashboard config from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Build the site catalog: the `[[sites]]` table if given, else the sample.
    pub fn catalog(&self) -> DashboardResult<SiteCatalog> {
        match &self.sites {
            None => Ok(SiteCatalog::sample()),
            Some(entries) => {
                let records = entries
                    .iter()
                    .map(|e| {
                        SiteRecord::new(
                            e.name.clone(),
                            e.latitude,
                            e.longitude,
                            e.launches,
                            e.success_rate,
                        )
                    })
                    .collect::<DashboardResult<Vec<_>>>()?;
                SiteCatalog::new(records)
            }
        }
    }
}
