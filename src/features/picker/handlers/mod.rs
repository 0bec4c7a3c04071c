mod picker_handler;

pub use picker_handler::{
    get_selection, reset_selection, set_district, set_province, set_regency, show_picker,
};

// Re-export the `__path_*` struct generated by `#[utoipa::path]` so the
// OpenApi derive in `core::openapi` can resolve it via this module path.
#[allow(unused_imports)]
pub use picker_handler::__path_get_selection;
