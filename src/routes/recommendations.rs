use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::matches_preferences;
use crate::error::ApiError;
use crate::models::{PreferenceCriteria, RecommendationRequest, University};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendations", web::post().to(recommend));
}

/// Recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "preferredCourse": "Computer Science",
///   "budgetRange": { "min": 500000, "max": 1500000 },
///   "preferredStates": ["Lagos", "Ogun"],
///   "campusTypePreference": "Urban",
///   "facilitiesImportance": { "library": true, "hostel": true }
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: {:?}", errors);
        return Err(errors.into());
    }

    let preferences = PreferenceCriteria::from(&*req);
    let catalog = state.catalog.universities().await?;

    let candidates: Vec<University> = if state.prefilter {
        catalog
            .iter()
            .filter(|university| matches_preferences(university, &preferences))
            .cloned()
            .collect()
    } else {
        catalog.to_vec()
    };

    let recommendations = state.matcher.rank(&candidates, &preferences);

    tracing::info!(
        "Returning {} recommendations (from {} universities)",
        recommendations.len(),
        catalog.len()
    );

    Ok(HttpResponse::Ok().json(recommendations))
}
