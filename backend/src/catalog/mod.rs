//! Launch site catalog.
//!
//! The catalog is an immutable, ordered list of [`SiteRecord`]s. It is built
//! once at startup, validated as a whole, and then shared read-only by the map
//! renderer, the selection cells and the view recomputation.
//!
//! # Invariants
//!
//! - at least one site
//! - site names are pairwise distinct (they double as selection keys)
//! - every success rate lies in `[0, 1]`
//!
//! Catalog order is significant: charts list sites in the order they were
//! supplied.

mod sample;

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};
use crate::models::SiteRecord;

pub use sample::sample_sites;

/// Validated, ordered collection of launch sites.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SiteCatalog {
    sites: Vec<SiteRecord>,
}

impl SiteCatalog {
    /// Build a catalog from records, rejecting empty or inconsistent input.
    pub fn new(sites: Vec<SiteRecord>) -> DashboardResult<Self> {
        if sites.is_empty() {
            return Err(DashboardError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(sites.len());
        for site in &sites {
            site.validate()?;
            if !seen.insert(site.name.as_str()) {
                return Err(DashboardError::DuplicateSite {
                    name: site.name.clone(),
                });
            }
        }

        log::debug!("Built site catalog with {} sites", sites.len());
        Ok(Self { sites })
    }

    /// The compiled-in sample catalog.
    pub fn sample() -> Self {
        Self {
            sites: sample_sites(),
        }
    }

    pub fn sites(&self) -> &[SiteRecord] {
        &self.sites
    }

    /// Site names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sites.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn first(&self) -> &SiteRecord {
        &self.sites[0]
    }

    /// Exact-match lookup by site name.
    pub fn lookup(&self, name: &str) -> DashboardResult<&SiteRecord> {
        self.sites
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| DashboardError::not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sites.iter().any(|s| s.name == name)
    }
}
