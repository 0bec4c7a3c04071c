//! Region picker feature.
//!
//! The page at `/` derives its entire state from the `province`, `regency`
//! and `district` query parameters, so any view is reconstructible from its
//! URL. The `/select/*` endpoints are the only mutators: each applies one
//! rule of the cascading transition table and redirects back to `/` with the
//! resulting query string.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SelectionService;
