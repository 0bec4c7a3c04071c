use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::picker::models::Selection;
use crate::features::picker::services::SelectionView;
use crate::features::regions::dtos::{DistrictResponseDto, RegencyResponseDto};

/// The shareable page state: one optional string identifier per level.
/// Absence means "not selected".
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SelectionQuery {
    /// Selected province id
    #[param(example = "32")]
    pub province: Option<String>,
    /// Selected regency id
    #[param(example = "3273")]
    pub regency: Option<String>,
    /// Selected district id
    #[param(example = "327301")]
    pub district: Option<String>,
}

impl From<SelectionQuery> for Selection {
    fn from(query: SelectionQuery) -> Self {
        Selection::new(query.province, query.regency, query.district)
    }
}

/// Query for the `/select/{level}` transition endpoints: the newly chosen
/// value plus the current selection being transitioned from.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SelectChangeQuery {
    /// The newly chosen identifier
    pub value: String,
    pub province: Option<String>,
    pub regency: Option<String>,
    pub district: Option<String>,
}

impl SelectChangeQuery {
    pub fn current(&self) -> Selection {
        Selection::new(
            self.province.clone(),
            self.regency.clone(),
            self.district.clone(),
        )
    }
}

/// Response DTO for the derived selection view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionViewDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regency_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_name: Option<String>,
    pub filtered_regencies: Vec<RegencyResponseDto>,
    pub filtered_districts: Vec<DistrictResponseDto>,
    pub breadcrumb: Vec<String>,
}

impl From<SelectionView> for SelectionViewDto {
    fn from(view: SelectionView) -> Self {
        Self {
            province_name: view.province_name,
            regency_name: view.regency_name,
            district_name: view.district_name,
            filtered_regencies: view
                .filtered_regencies
                .into_iter()
                .map(Into::into)
                .collect(),
            filtered_districts: view
                .filtered_districts
                .into_iter()
                .map(Into::into)
                .collect(),
            breadcrumb: view.breadcrumb,
        }
    }
}
