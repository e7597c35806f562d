//! Error types for catalog, selection and view operations.
//!
//! Every failure in the dashboard core is local and recoverable: a rejected
//! selection leaves the previous view in place, and a bad catalog stops the
//! server before anything is rendered.

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error type for dashboard operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    /// A lookup referenced a site name absent from the catalog.
    #[error("Not found: no launch site named '{name}'")]
    NotFound { name: String },

    /// An attempt to select a site that is not in the catalog.
    #[error("Invalid selection: '{name}' is not a catalog site")]
    InvalidSelection { name: String },

    /// The catalog holds no sites.
    #[error("Configuration error: site catalog is empty")]
    EmptyCatalog,

    /// Two catalog entries share a name.
    #[error("Configuration error: duplicate site name '{name}'")]
    DuplicateSite { name: String },

    /// A success rate outside [0, 1] (or NaN).
    #[error("Configuration error: success rate {rate} for '{name}' is outside [0, 1]")]
    InvalidSuccessRate { name: String, rate: f64 },

    /// Latitude or longitude out of range.
    #[error("Configuration error: coordinates for '{name}' are invalid: {message}")]
    InvalidCoordinates { name: String, message: String },

    /// Configuration file or environment problem.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DashboardError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn invalid_selection(name: impl Into<String>) -> Self {
        Self::InvalidSelection { name: name.into() }
    }
}
