use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{BudgetRange, CampusType, FacilitiesImportance, PreferenceCriteria};

/// Value students send when they do not mind the campus type
pub const NO_PREFERENCE: &str = "No Preference";

/// Request body for the recommendations endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub preferred_course: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub budget_range: Option<BudgetRangeRequest>,
    #[validate(length(max = 37))]
    #[serde(default)]
    pub preferred_states: Option<Vec<String>>,
    #[validate(custom(function = "validate_campus_preference"))]
    #[serde(default)]
    pub campus_type_preference: Option<String>,
    #[serde(default)]
    pub facilities_importance: Option<FacilitiesImportanceRequest>,
    /// Accepted for compatibility with existing clients; not scored
    #[serde(default)]
    pub academic_level: Option<String>,
    /// Accepted for compatibility with existing clients; not scored
    #[serde(default)]
    pub scholarship_needed: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct BudgetRangeRequest {
    #[validate(range(min = 0))]
    pub min: i64,
    #[validate(range(min = 0))]
    pub max: i64,
}

/// Facility flags; each accepts a boolean or a numeric importance (non-zero = important)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitiesImportanceRequest {
    #[serde(default, deserialize_with = "deserialize_importance")]
    pub library: bool,
    #[serde(default, deserialize_with = "deserialize_importance")]
    pub hostel: bool,
    #[serde(default, deserialize_with = "deserialize_importance")]
    pub laboratory: bool,
    #[serde(default, deserialize_with = "deserialize_importance")]
    pub sports_complex: bool,
    #[serde(default, deserialize_with = "deserialize_importance")]
    pub medical_center: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Importance {
    Flag(bool),
    Level(f64),
    Missing(()),
}

fn deserialize_importance<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Importance::deserialize(deserializer)? {
        Importance::Flag(flag) => flag,
        Importance::Level(level) => level != 0.0,
        Importance::Missing(()) => false,
    })
}

fn validate_campus_preference(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value == NO_PREFERENCE || value.parse::<CampusType>().is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("campus_type_preference"))
    }
}

impl From<&RecommendationRequest> for PreferenceCriteria {
    fn from(req: &RecommendationRequest) -> Self {
        Self {
            preferred_course: req
                .preferred_course
                .as_ref()
                .filter(|course| !course.is_empty())
                .cloned(),
            budget_range: req.budget_range.map(|range| BudgetRange {
                min: range.min,
                max: range.max,
            }),
            preferred_states: req.preferred_states.clone().unwrap_or_default(),
            campus_type: req
                .campus_type_preference
                .as_deref()
                .and_then(|value| value.parse().ok()),
            facilities: req
                .facilities_importance
                .map(|flags| FacilitiesImportance {
                    library: flags.library,
                    hostel: flags.hostel,
                    laboratory: flags.laboratory,
                    sports_complex: flags.sports_complex,
                    medical_center: flags.medical_center,
                })
                .unwrap_or_default(),
        }
    }
}

/// Query string for the trends endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendsQuery {
    pub limit: Option<usize>,
    pub category: Option<String>,
}

/// Query string for the universities listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniversitiesQuery {
    pub state: Option<String>,
    pub course: Option<String>,
    #[serde(rename = "maxFee")]
    pub max_fee: Option<i64>,
}
