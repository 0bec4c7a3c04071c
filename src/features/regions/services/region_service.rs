use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{CatalogState, District, Province, Regency, RegionCatalog};

/// Read-only queries over the loaded region catalog.
pub struct RegionService {
    state: Arc<CatalogState>,
}

fn matches_search(name: &str, search: Option<&str>) -> bool {
    match search {
        Some(term) if !term.is_empty() => name.to_lowercase().contains(&term.to_lowercase()),
        _ => true,
    }
}

impl RegionService {
    pub fn new(state: Arc<CatalogState>) -> Self {
        Self { state }
    }

    /// The full catalog document in its external shape
    pub fn catalog(&self) -> &RegionCatalog {
        &self.state.catalog
    }

    // ==================== Province Methods ====================

    /// List all provinces with optional search
    pub fn list_provinces(&self, search: Option<&str>) -> Vec<Province> {
        self.state
            .catalog
            .provinces
            .iter()
            .filter(|p| matches_search(&p.name, search))
            .cloned()
            .collect()
    }

    /// Get a province by its id
    pub fn get_province(&self, id: i64) -> Result<Province> {
        self.state
            .catalog
            .provinces
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Province with id '{}' not found", id)))
    }

    // ==================== Regency Methods ====================

    /// List all regencies in a province with optional search
    pub fn list_regencies_by_province(
        &self,
        province_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<Regency>> {
        // First verify the province exists
        let province = self.get_province(province_id)?;

        Ok(self
            .state
            .catalog
            .regencies
            .iter()
            .filter(|r| r.province_id == province.id && matches_search(&r.name, search))
            .cloned()
            .collect())
    }

    /// Get a regency by its id
    pub fn get_regency(&self, id: i64) -> Result<Regency> {
        self.state
            .catalog
            .regencies
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Regency with id '{}' not found", id)))
    }

    // ==================== District Methods ====================

    /// List all districts in a regency with optional search
    pub fn list_districts_by_regency(
        &self,
        regency_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<District>> {
        // First verify the regency exists
        let regency = self.get_regency(regency_id)?;

        Ok(self
            .state
            .catalog
            .districts
            .iter()
            .filter(|d| d.regency_id == regency.id && matches_search(&d.name, search))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> RegionService {
        let catalog = RegionCatalog {
            provinces: vec![
                Province {
                    id: 31,
                    name: "DKI Jakarta".to_string(),
                },
                Province {
                    id: 32,
                    name: "Jawa Barat".to_string(),
                },
            ],
            regencies: vec![
                Regency {
                    id: 3201,
                    name: "Kabupaten Bogor".to_string(),
                    province_id: 32,
                },
                Regency {
                    id: 3273,
                    name: "Kota Bandung".to_string(),
                    province_id: 32,
                },
                Regency {
                    id: 3171,
                    name: "Jakarta Selatan".to_string(),
                    province_id: 31,
                },
            ],
            districts: vec![
                District {
                    id: 327301,
                    name: "Sukasari".to_string(),
                    regency_id: 3273,
                },
                District {
                    id: 327302,
                    name: "Coblong".to_string(),
                    regency_id: 3273,
                },
                District {
                    id: 320101,
                    name: "Cibinong".to_string(),
                    regency_id: 3201,
                },
            ],
        };
        RegionService::new(Arc::new(CatalogState::loaded(catalog)))
    }

    #[test]
    fn test_list_provinces_with_search() {
        let service = service();
        assert_eq!(service.list_provinces(None).len(), 2);

        let hits = service.list_provinces(Some("jawa"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Jawa Barat");

        assert!(service.list_provinces(Some("sumatera")).is_empty());
    }

    #[test]
    fn test_list_regencies_filters_by_province() {
        let service = service();
        let regencies = service.list_regencies_by_province(32, None).unwrap();
        assert_eq!(regencies.len(), 2);
        assert!(regencies.iter().all(|r| r.province_id == 32));
    }

    #[test]
    fn test_list_regencies_unknown_province_is_not_found() {
        let service = service();
        let err = service.list_regencies_by_province(99, None).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_list_districts_filters_by_regency() {
        let service = service();
        let districts = service.list_districts_by_regency(3273, None).unwrap();
        assert_eq!(districts.len(), 2);
        assert!(districts.iter().all(|d| d.regency_id == 3273));

        let hits = service.list_districts_by_regency(3273, Some("cob")).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Coblong");
    }
}
