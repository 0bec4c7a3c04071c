use std::sync::Arc;

use crate::features::picker::models::Selection;
use crate::features::regions::models::{CatalogState, District, Province, Regency};

/// Everything the view needs, derived from the catalog and the current
/// selection. Recomputed on every read; holds no state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionView {
    pub province_name: Option<String>,
    pub regency_name: Option<String>,
    pub district_name: Option<String>,
    pub filtered_regencies: Vec<Regency>,
    pub filtered_districts: Vec<District>,
    /// Selected names, coarsest to finest
    pub breadcrumb: Vec<String>,
}

/// Derives the picker view state from the shared catalog.
pub struct SelectionService {
    state: Arc<CatalogState>,
}

impl SelectionService {
    pub fn new(state: Arc<CatalogState>) -> Self {
        Self { state }
    }

    /// Whether the catalog load fell back to empty data.
    pub fn degraded(&self) -> bool {
        self.state.degraded
    }

    pub fn provinces(&self) -> &[Province] {
        &self.state.catalog.provinces
    }

    pub fn derive(&self, selection: &Selection) -> SelectionView {
        let catalog = &self.state.catalog;

        let province_id = selection.province_id();
        let regency_id = selection.regency_id();
        let district_id = selection.district_id();

        let filtered_regencies: Vec<Regency> = match province_id {
            Some(pid) => catalog
                .regencies
                .iter()
                .filter(|r| r.province_id == pid)
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        let filtered_districts: Vec<District> = match regency_id {
            Some(rid) => catalog
                .districts
                .iter()
                .filter(|d| d.regency_id == rid)
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        // Each level resolves independently; an identifier inconsistent with
        // its parent still resolves to whatever it names.
        let province_name = province_id
            .and_then(|pid| catalog.provinces.iter().find(|p| p.id == pid))
            .map(|p| p.name.clone());
        let regency_name = regency_id
            .and_then(|rid| catalog.regencies.iter().find(|r| r.id == rid))
            .map(|r| r.name.clone());
        let district_name = district_id
            .and_then(|did| catalog.districts.iter().find(|d| d.id == did))
            .map(|d| d.name.clone());

        let breadcrumb = [&province_name, &regency_name, &district_name]
            .into_iter()
            .filter_map(|name| name.clone())
            .collect();

        SelectionView {
            province_name,
            regency_name,
            district_name,
            filtered_regencies,
            filtered_districts,
            breadcrumb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::models::RegionCatalog;

    fn service() -> SelectionService {
        let catalog = RegionCatalog {
            provinces: vec![
                Province {
                    id: 11,
                    name: "Jawa Barat".to_string(),
                },
                Province {
                    id: 12,
                    name: "Jawa Tengah".to_string(),
                },
            ],
            regencies: vec![
                Regency {
                    id: 110,
                    name: "Kota Bandung".to_string(),
                    province_id: 11,
                },
                Regency {
                    id: 111,
                    name: "Kabupaten Bogor".to_string(),
                    province_id: 11,
                },
                Regency {
                    id: 120,
                    name: "Kota Semarang".to_string(),
                    province_id: 12,
                },
            ],
            districts: vec![
                District {
                    id: 1100,
                    name: "Sukasari".to_string(),
                    regency_id: 110,
                },
                District {
                    id: 1200,
                    name: "Tembalang".to_string(),
                    regency_id: 120,
                },
            ],
        };
        SelectionService::new(Arc::new(CatalogState::loaded(catalog)))
    }

    #[test]
    fn test_no_selection_yields_empty_view() {
        let view = service().derive(&Selection::default());
        assert_eq!(view.province_name, None);
        assert!(view.filtered_regencies.is_empty());
        assert!(view.filtered_districts.is_empty());
        assert!(view.breadcrumb.is_empty());
    }

    #[test]
    fn test_filtered_regencies_match_selected_province_exactly() {
        let selection = Selection::default().set_province("11");
        let view = service().derive(&selection);

        assert_eq!(view.filtered_regencies.len(), 2);
        assert!(view.filtered_regencies.iter().all(|r| r.province_id == 11));
        assert_eq!(view.province_name.as_deref(), Some("Jawa Barat"));
    }

    #[test]
    fn test_unmatched_province_id_yields_no_match() {
        let selection = Selection::default().set_province("999");
        let view = service().derive(&selection);

        assert_eq!(view.province_name, None);
        assert!(view.filtered_regencies.is_empty());
    }

    #[test]
    fn test_non_numeric_identifier_yields_no_match() {
        let selection = Selection::default().set_province("jawa");
        let view = service().derive(&selection);

        assert_eq!(view.province_name, None);
        assert!(view.filtered_regencies.is_empty());
    }

    #[test]
    fn test_inconsistent_selection_resolves_each_level_independently() {
        // district from Semarang under a Bandung regency selection
        let selection = Selection::new(
            Some("11".to_string()),
            Some("110".to_string()),
            Some("1200".to_string()),
        );
        let view = service().derive(&selection);

        assert_eq!(view.district_name.as_deref(), Some("Tembalang"));
        assert_eq!(
            view.breadcrumb,
            vec!["Jawa Barat", "Kota Bandung", "Tembalang"]
        );
    }

    #[test]
    fn test_breadcrumb_follows_the_selection_sequence() {
        let service = service();

        let selection = Selection::default().set_province("11");
        assert_eq!(service.derive(&selection).breadcrumb, vec!["Jawa Barat"]);

        let selection = selection.set_regency("110");
        assert_eq!(
            service.derive(&selection).breadcrumb,
            vec!["Jawa Barat", "Kota Bandung"]
        );

        let selection = selection.set_district("1100");
        assert_eq!(
            service.derive(&selection).breadcrumb,
            vec!["Jawa Barat", "Kota Bandung", "Sukasari"]
        );

        let selection = selection.reset();
        assert!(service.derive(&selection).breadcrumb.is_empty());
    }
}
