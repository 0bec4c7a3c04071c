use serde::{Deserialize, Serialize};

/// District model (kecamatan); belongs to exactly one regency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: i64,
    pub name: String,
    pub regency_id: i64,
}
