use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/regions/provinces", get(handlers::list_provinces))
        .route("/api/regions/provinces/{id}", get(handlers::get_province))
        .route(
            "/api/regions/provinces/{id}/regencies",
            get(handlers::list_regencies_by_province),
        )
        .route(
            "/api/regions/regencies/{id}/districts",
            get(handlers::list_districts_by_regency),
        )
        .route("/api/regions/catalog", get(handlers::get_catalog))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::models::{
        CatalogState, District, Province, Regency, RegionCatalog,
    };
    use axum_test::TestServer;
    use serde_json::Value;

    fn test_catalog() -> RegionCatalog {
        RegionCatalog {
            provinces: vec![Province {
                id: 32,
                name: "Jawa Barat".to_string(),
            }],
            regencies: vec![Regency {
                id: 3273,
                name: "Kota Bandung".to_string(),
                province_id: 32,
            }],
            districts: vec![District {
                id: 327301,
                name: "Sukasari".to_string(),
                regency_id: 3273,
            }],
        }
    }

    fn server() -> TestServer {
        let state = Arc::new(CatalogState::loaded(test_catalog()));
        let app = routes(Arc::new(RegionService::new(state)));
        TestServer::new(app).expect("test server")
    }

    #[tokio::test]
    async fn test_list_provinces_envelope() {
        let server = server();
        let response = server.get("/api/regions/provinces").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["name"], "Jawa Barat");
    }

    #[tokio::test]
    async fn test_list_regencies_by_province() {
        let server = server();
        let response = server.get("/api/regions/provinces/32/regencies").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"][0]["id"], 3273);
        assert_eq!(body["data"][0]["provinceId"], 32);
    }

    #[tokio::test]
    async fn test_unknown_province_is_404() {
        let server = server();
        let response = server.get("/api/regions/provinces/99/regencies").await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_catalog_document_round_trips() {
        let server = server();
        let response = server.get("/api/regions/catalog").await;
        response.assert_status_ok();

        let body: RegionCatalog = response.json();
        assert_eq!(body, test_catalog());
    }
}
