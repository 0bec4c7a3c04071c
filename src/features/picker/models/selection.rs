use serde::{Deserialize, Serialize};

/// The user's current choice at each hierarchy level, taken verbatim from the
/// URL query parameters. Never stored server-side; reconstructed per request.
///
/// Identifiers stay strings until comparison time. A value that does not
/// coerce to a catalog id simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub province: Option<String>,
    pub regency: Option<String>,
    pub district: Option<String>,
}

fn coerce_id(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse::<i64>().ok())
}

impl Selection {
    pub fn new(
        province: Option<String>,
        regency: Option<String>,
        district: Option<String>,
    ) -> Self {
        Self {
            province,
            regency,
            district,
        }
    }

    // ==================== Transition table ====================
    // The only mutators. A coarser change invalidates the finer levels.

    /// Choose a province; regency and district are no longer guaranteed
    /// consistent and are cleared unconditionally.
    pub fn set_province(self, value: impl Into<String>) -> Self {
        Self {
            province: Some(value.into()),
            regency: None,
            district: None,
        }
    }

    /// Choose a regency; district is cleared unconditionally.
    pub fn set_regency(self, value: impl Into<String>) -> Self {
        Self {
            regency: Some(value.into()),
            district: None,
            ..self
        }
    }

    /// Choose a district; coarser levels are left untouched.
    pub fn set_district(self, value: impl Into<String>) -> Self {
        Self {
            district: Some(value.into()),
            ..self
        }
    }

    /// Clear all three levels.
    pub fn reset(self) -> Self {
        Self::default()
    }

    // ==================== Coerced identifiers ====================

    pub fn province_id(&self) -> Option<i64> {
        coerce_id(self.province.as_deref())
    }

    pub fn regency_id(&self) -> Option<i64> {
        coerce_id(self.regency.as_deref())
    }

    pub fn district_id(&self) -> Option<i64> {
        coerce_id(self.district.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.province.is_none() && self.regency.is_none() && self.district.is_none()
    }

    // ==================== URL state ====================

    /// Serialize to the page query string ("province=32&regency=3273").
    pub fn to_query_string(&self) -> String {
        let pairs = [
            ("province", &self.province),
            ("regency", &self.regency),
            ("district", &self.district),
        ];

        pairs
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(|v| format!("{}={}", key, urlencoding::encode(v)))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Relative page URL carrying this selection.
    pub fn href(&self) -> String {
        if self.is_empty() {
            "/".to_string()
        } else {
            format!("/?{}", self.to_query_string())
        }
    }
}
