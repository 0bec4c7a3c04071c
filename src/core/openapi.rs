use utoipa::{Modify, OpenApi};

use crate::features::picker::{dtos as picker_dtos, handlers as picker_handlers};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_provinces,
        regions_handlers::get_province,
        regions_handlers::list_regencies_by_province,
        regions_handlers::list_districts_by_regency,
        regions_handlers::get_catalog,
        // Picker
        picker_handlers::get_selection,
    ),
    components(
        schemas(
            regions_dtos::ProvinceResponseDto,
            regions_dtos::RegencyResponseDto,
            regions_dtos::DistrictResponseDto,
            picker_dtos::SelectionViewDto,
            Meta,
            ApiResponse<regions_dtos::ProvinceResponseDto>,
            ApiResponse<Vec<regions_dtos::ProvinceResponseDto>>,
            ApiResponse<Vec<regions_dtos::RegencyResponseDto>>,
            ApiResponse<Vec<regions_dtos::DistrictResponseDto>>,
            ApiResponse<picker_dtos::SelectionViewDto>,
        )
    ),
    tags(
        (name = "regions", description = "Indonesian administrative regions (provinces, regencies, districts)"),
        (name = "picker", description = "Derived selection state for the region picker"),
    ),
    info(
        title = "Wilayah Filter API",
        version = "0.1.0",
        description = "API documentation for the Indonesian region picker",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
