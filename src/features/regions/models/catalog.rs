use serde::{Deserialize, Serialize};

use super::{District, Province, Regency};

/// The complete region dataset, loaded once per process and read-only
/// afterwards. The serde shape matches the external catalog document:
/// `{ "provinces": [...], "regencies": [...], "districts": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCatalog {
    pub provinces: Vec<Province>,
    pub regencies: Vec<Regency>,
    pub districts: Vec<District>,
}

impl RegionCatalog {
    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty() && self.regencies.is_empty() && self.districts.is_empty()
    }
}

/// Outcome of the startup catalog load. `degraded` records that the load
/// fell back to empty data, which drives the unavailable notice on the page.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub catalog: RegionCatalog,
    pub degraded: bool,
}

impl CatalogState {
    pub fn loaded(catalog: RegionCatalog) -> Self {
        Self {
            catalog,
            degraded: false,
        }
    }

    pub fn degraded() -> Self {
        Self {
            catalog: RegionCatalog::default(),
            degraded: true,
        }
    }
}
