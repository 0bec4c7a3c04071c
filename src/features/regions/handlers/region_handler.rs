use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::regions::dtos::{
    DistrictResponseDto, ProvinceResponseDto, RegencyResponseDto, RegionSearchQuery,
};
use crate::features::regions::models::RegionCatalog;
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

// ==================== Province Handlers ====================

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/regions/provinces",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<ProvinceResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_provinces(
    State(service): State<Arc<RegionService>>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    let provinces = service.list_provinces(query.search.as_deref());
    let total = provinces.len() as i64;
    let dtos: Vec<ProvinceResponseDto> = provinces.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get a province by id
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{id}",
    params(
        ("id" = i64, Path, description = "Province id")
    ),
    responses(
        (status = 200, description = "Province details", body = ApiResponse<ProvinceResponseDto>),
        (status = 404, description = "Province not found")
    ),
    tag = "regions"
)]
pub async fn get_province(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ProvinceResponseDto>>> {
    let province = service.get_province(id)?;
    Ok(Json(ApiResponse::success(
        Some(province.into()),
        None,
        None,
    )))
}

/// List regencies in a province
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{id}/regencies",
    params(
        ("id" = i64, Path, description = "Province id"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "List of regencies in the province", body = ApiResponse<Vec<RegencyResponseDto>>),
        (status = 404, description = "Province not found")
    ),
    tag = "regions"
)]
pub async fn list_regencies_by_province(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<i64>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegencyResponseDto>>>> {
    let regencies = service.list_regencies_by_province(id, query.search.as_deref())?;
    let total = regencies.len() as i64;
    let dtos: Vec<RegencyResponseDto> = regencies.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

// ==================== District Handlers ====================

/// List districts in a regency
#[utoipa::path(
    get,
    path = "/api/regions/regencies/{id}/districts",
    params(
        ("id" = i64, Path, description = "Regency id"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "List of districts in the regency", body = ApiResponse<Vec<DistrictResponseDto>>),
        (status = 404, description = "Regency not found")
    ),
    tag = "regions"
)]
pub async fn list_districts_by_regency(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<i64>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let districts = service.list_districts_by_regency(id, query.search.as_deref())?;
    let total = districts.len() as i64;
    let dtos: Vec<DistrictResponseDto> = districts.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

// ==================== Catalog Handler ====================

/// The full catalog document in its external shape, so an instance can host
/// the well-known resource for another instance's loader.
#[utoipa::path(
    get,
    path = "/api/regions/catalog",
    responses(
        (status = 200, description = "The full region catalog document")
    ),
    tag = "regions"
)]
pub async fn get_catalog(State(service): State<Arc<RegionService>>) -> Json<RegionCatalog> {
    Json(service.catalog().clone())
}
