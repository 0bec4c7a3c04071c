use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::picker::handlers;
use crate::features::picker::services::SelectionService;

/// Create routes for the picker feature
pub fn routes(service: Arc<SelectionService>) -> Router {
    Router::new()
        .route("/", get(handlers::show_picker))
        .route("/select/province", get(handlers::set_province))
        .route("/select/regency", get(handlers::set_regency))
        .route("/select/district", get(handlers::set_district))
        .route("/reset", get(handlers::reset_selection))
        .route("/api/selection", get(handlers::get_selection))
        .with_state(service)
}
