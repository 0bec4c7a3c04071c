use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Json,
};
use minijinja::Value;

use crate::core::error::Result;
use crate::features::picker::dtos::{SelectChangeQuery, SelectionQuery, SelectionViewDto};
use crate::features::picker::models::Selection;
use crate::features::picker::services::SelectionService;
use crate::shared::templates::render_template;
use crate::shared::types::ApiResponse;

// ==================== Page ====================

/// Render the picker page for the selection carried in the URL.
///
/// When the catalog load fell back to empty data, renders the plain-text
/// unavailable notice instead of the filter UI.
pub async fn show_picker(
    State(service): State<Arc<SelectionService>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Html<String>> {
    if service.degraded() {
        let html = render_template("unavailable.html", &HashMap::new())?;
        return Ok(Html(html));
    }

    let selection = Selection::from(query);
    let view = service.derive(&selection);

    let mut ctx = HashMap::new();
    ctx.insert("provinces", Value::from_serialize(service.provinces()));
    ctx.insert("regencies", Value::from_serialize(&view.filtered_regencies));
    ctx.insert("districts", Value::from_serialize(&view.filtered_districts));
    ctx.insert("selection", Value::from_serialize(&selection));
    ctx.insert(
        "selected_province_id",
        Value::from_serialize(selection.province_id()),
    );
    ctx.insert(
        "selected_regency_id",
        Value::from_serialize(selection.regency_id()),
    );
    ctx.insert(
        "selected_district_id",
        Value::from_serialize(selection.district_id()),
    );
    ctx.insert("province_name", Value::from_serialize(&view.province_name));
    ctx.insert("regency_name", Value::from_serialize(&view.regency_name));
    ctx.insert("district_name", Value::from_serialize(&view.district_name));
    ctx.insert("breadcrumb", Value::from_serialize(&view.breadcrumb));

    let html = render_template("picker.html", &ctx)?;
    Ok(Html(html))
}

// ==================== Transitions ====================
// The single mutation boundary: each endpoint applies one rule of the
// transition table to the submitted selection and redirects back to the page
// carrying the new query string.

/// Choose a province; clears regency and district
pub async fn set_province(Query(query): Query<SelectChangeQuery>) -> Redirect {
    let next = query.current().set_province(query.value);
    Redirect::to(&next.href())
}

/// Choose a regency; clears district
pub async fn set_regency(Query(query): Query<SelectChangeQuery>) -> Redirect {
    let next = query.current().set_regency(query.value);
    Redirect::to(&next.href())
}

/// Choose a district
pub async fn set_district(Query(query): Query<SelectChangeQuery>) -> Redirect {
    let next = query.current().set_district(query.value);
    Redirect::to(&next.href())
}

/// Clear the whole selection
pub async fn reset_selection() -> Redirect {
    Redirect::to(&Selection::default().href())
}

// ==================== API ====================

/// Derived view state for a selection
#[utoipa::path(
    get,
    path = "/api/selection",
    params(SelectionQuery),
    responses(
        (status = 200, description = "Derived names, filtered options and breadcrumb", body = ApiResponse<SelectionViewDto>)
    ),
    tag = "picker"
)]
pub async fn get_selection(
    State(service): State<Arc<SelectionService>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<ApiResponse<SelectionViewDto>>> {
    let selection = Selection::from(query);
    let view = service.derive(&selection);
    Ok(Json(ApiResponse::success(Some(view.into()), None, None)))
}
