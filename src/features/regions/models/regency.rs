use serde::{Deserialize, Serialize};

/// Regency/city model (kabupaten/kota); belongs to exactly one province
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regency {
    pub id: i64,
    pub name: String,
    pub province_id: i64,
}
