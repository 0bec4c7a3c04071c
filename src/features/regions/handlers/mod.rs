mod region_handler;

pub use region_handler::{
    get_catalog, get_province, list_districts_by_regency, list_provinces,
    list_regencies_by_province,
};

// Re-export the `__path_*` structs generated by `#[utoipa::path]` so the
// OpenApi derive in `core::openapi` can resolve them via this module path.
#[allow(unused_imports)]
pub use region_handler::{
    __path_get_catalog, __path_get_province, __path_list_districts_by_regency,
    __path_list_provinces, __path_list_regencies_by_province,
};
