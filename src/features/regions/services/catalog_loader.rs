use crate::core::error::{AppError, Result};
use crate::features::regions::models::{CatalogState, RegionCatalog};

/// Loads the region catalog document from its configured source.
///
/// The load is a single best-effort attempt: no retry, no timeout. Any
/// failure falls back to an empty catalog so the rest of the service can
/// start and render without data.
pub struct CatalogLoader {
    client: reqwest::Client,
    source: String,
}

impl CatalogLoader {
    pub fn new(source: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("WilayahFilter/0.1 (region-picker)")
                .build()
                .unwrap_or_default(),
            source,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Load the catalog, falling back to empty degraded data on any failure.
    /// Never returns an error past this boundary.
    pub async fn load(&self) -> CatalogState {
        match self.fetch().await {
            Ok(catalog) => {
                tracing::info!(
                    "Region catalog loaded from {}: {} provinces, {} regencies, {} districts",
                    self.source,
                    catalog.provinces.len(),
                    catalog.regencies.len(),
                    catalog.districts.len()
                );
                CatalogState::loaded(catalog)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to load region catalog from {}: {}. Serving empty catalog.",
                    self.source,
                    e
                );
                CatalogState::degraded()
            }
        }
    }

    async fn fetch(&self) -> Result<RegionCatalog> {
        if self.source.starts_with("http://") || self.source.starts_with("https://") {
            self.fetch_http().await
        } else {
            self.read_file().await
        }
    }

    async fn fetch_http(&self) -> Result<RegionCatalog> {
        let response = self.client.get(&self.source).send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Catalog request failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Catalog source returned status: {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to parse catalog response: {}", e))
        })
    }

    async fn read_file(&self) -> Result<RegionCatalog> {
        let bytes = tokio::fs::read(&self.source).await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to read catalog file: {}", e))
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to parse catalog file: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::models::{District, Province, Regency};
    use axum::{routing::get, Json, Router};

    fn sample_catalog() -> RegionCatalog {
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

    async fn spawn_catalog_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test app");
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_load_from_file_round_trips_document() {
        let loader = CatalogLoader::new("data/indonesia_regions.json".to_string());
        let state = loader.load().await;

        assert!(!state.degraded);
        let raw = std::fs::read_to_string("data/indonesia_regions.json").expect("sample document");
        let expected: RegionCatalog = serde_json::from_str(&raw).expect("sample document parses");
        assert_eq!(state.catalog, expected);
    }

    #[tokio::test]
    async fn test_load_missing_file_falls_back_to_empty() {
        let loader = CatalogLoader::new("data/does_not_exist.json".to_string());
        let state = loader.load().await;

        assert!(state.degraded);
        assert!(state.catalog.is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_file_falls_back_to_empty() {
        let path = std::env::temp_dir().join("wilayah_filter_malformed_catalog.json");
        std::fs::write(&path, "not a catalog").expect("write temp file");

        let loader = CatalogLoader::new(path.to_string_lossy().to_string());
        let state = loader.load().await;

        assert!(state.degraded);
        assert!(state.catalog.is_empty());
    }

    #[tokio::test]
    async fn test_load_over_http_returns_document_unchanged() {
        let app = Router::new().route(
            "/data/indonesia_regions.json",
            get(|| async { Json(sample_catalog()) }),
        );
        let base = spawn_catalog_server(app).await;

        let loader = CatalogLoader::new(format!("{}/data/indonesia_regions.json", base));
        let state = loader.load().await;

        assert!(!state.degraded);
        assert_eq!(state.catalog, sample_catalog());
    }

    #[tokio::test]
    async fn test_load_over_http_connection_error_falls_back_to_empty() {
        // Bind and drop a listener so the port is known to be closed
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        drop(listener);

        let loader = CatalogLoader::new(format!("http://{}/data/indonesia_regions.json", addr));
        let state = loader.load().await;

        assert!(state.degraded);
        assert!(state.catalog.is_empty());
    }

    #[tokio::test]
    async fn test_load_over_http_error_status_falls_back_to_empty() {
        let app = Router::new().route(
            "/data/indonesia_regions.json",
            get(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = spawn_catalog_server(app).await;

        let loader = CatalogLoader::new(format!("{}/data/indonesia_regions.json", base));
        let state = loader.load().await;

        assert!(state.degraded);
        assert!(state.catalog.is_empty());
    }

    #[tokio::test]
    async fn test_load_over_http_malformed_body_falls_back_to_empty() {
        let app = Router::new().route(
            "/data/indonesia_regions.json",
            get(|| async { "definitely not json" }),
        );
        let base = spawn_catalog_server(app).await;

        let loader = CatalogLoader::new(format!("{}/data/indonesia_regions.json", base));
        let state = loader.load().await;

        assert!(state.degraded);
        assert!(state.catalog.is_empty());
    }
}
