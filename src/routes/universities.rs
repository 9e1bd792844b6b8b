use actix_web::{web, HttpResponse, Responder};
use crate::core::UniversityFilter;
use crate::error::ApiError;
use crate::models::{HealthResponse, UniversitiesQuery};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/universities", web::get().to(list_universities));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let (status, universities) = match state.catalog.universities().await {
        Ok(catalog) => ("healthy", catalog.len()),
        Err(e) => {
            tracing::warn!("Catalog unavailable during health check: {}", e);
            ("degraded", 0)
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        universities,
    })
}

/// List universities
///
/// GET /api/v1/universities?state={state}&course={course}&maxFee={maxFee}
async fn list_universities(
    state: web::Data<AppState>,
    query: web::Query<UniversitiesQuery>,
) -> Result<HttpResponse, ApiError> {
    let filter = UniversityFilter::from(query.into_inner());
    let catalog = state.catalog.universities().await?;

    let universities = filter.apply(&catalog);

    tracing::info!(
        "Listing {} of {} universities (filter: {:?})",
        universities.len(),
        catalog.len(),
        filter
    );

    Ok(HttpResponse::Ok().json(universities))
}
