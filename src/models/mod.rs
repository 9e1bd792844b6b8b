// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    University, TuitionFee, Ranking, CampusType, StudentRatio, Facility, BudgetRange,
    FacilitiesImportance, PreferenceCriteria, MatchWeights, ScoredUniversity, TrendCategory,
    TrendingUniversity, RATIO_NOT_AVAILABLE,
};
pub use requests::{RecommendationRequest, TrendsQuery, UniversitiesQuery, NO_PREFERENCE};
pub use responses::{TrendsResponse, HealthResponse, ErrorResponse};
