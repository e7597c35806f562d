use serde::Serialize;

use crate::catalog::SiteCatalog;
use crate::error::{DashboardError, DashboardResult};

/// The currently selected site name, always a member of the catalog it was
/// validated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionState {
    selected: String,
}

impl SelectionState {
    pub fn new(catalog: &SiteCatalog, initial: &str) -> DashboardResult<Self> {
        if !catalog.contains(initial) {
            return Err(DashboardError::invalid_selection(initial));
        }
        Ok(Self {
            selected: initial.to_string(),
        })
    }

    pub fn get(&self) -> &str {
        &self.selected
    }

    /// Replace the selection. Non-catalog names are rejected and the previous
    /// value is kept; there is no fallback to the first site.
    pub fn set(&mut self, catalog: &SiteCatalog, name: &str) -> DashboardResult<()> {
        if !catalog.contains(name) {
            return Err(DashboardError::invalid_selection(name));
        }
        name.clone_into(&mut self.selected);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_catalog_name() {
        let catalog = SiteCatalog::sample();
        let state = SelectionState::new(&catalog, "Cape Canaveral").unwrap();
        assert_eq!(state.get(), "Cape Canaveral");
    }

    #[test]
    fn test_new_rejects_unknown_name() {
        let catalog = SiteCatalog::sample();
        assert_eq!(
            SelectionState::new(&catalog, "Baikonur"),
            Err(DashboardError::invalid_selection("Baikonur"))
        );
    }

    #[test]
    fn test_set_valid() {
        let catalog = SiteCatalog::sample();
        let mut state = SelectionState::new(&catalog, "Cape Canaveral").unwrap();
        state.set(&catalog, "Vandenberg Space Force Base").unwrap();
        assert_eq!(state.get(), "Vandenberg Space Force Base");
    }

    #[test]
    fn test_set_invalid_rejected_explicitly() {
        // Unknown names do not silently fall back to the first catalog row.
        let catalog = SiteCatalog::sample();
        let mut state = SelectionState::new(&catalog, "Kennedy Space Center").unwrap();
        let err = state.set(&catalog, "Nonexistent Site").unwrap_err();
        assert_eq!(err, DashboardError::invalid_selection("Nonexistent Site"));
        assert_eq!(state.get(), "Kennedy Space Center");
    }

    #[test]
    fn test_serializes_as_string() {
        let catalog = SiteCatalog::sample();
        let state = SelectionState::new(&catalog, "Cape Canaveral").unwrap();
        assert_eq!(serde_json::to_value(&state).unwrap(), "Cape Canaveral");
    }
}
