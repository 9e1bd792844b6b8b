use actix_web::{web, HttpResponse};
use crate::error::ApiError;
use crate::models::{TrendCategory, TrendsQuery, TrendsResponse};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/trends", web::get().to(trending));
}

/// Trending universities endpoint
///
/// GET /api/v1/trends?limit={limit}&category={category}
///
/// `category` must be one of the labels returned in `categories`.
async fn trending(
    state: web::Data<AppState>,
    query: web::Query<TrendsQuery>,
) -> Result<HttpResponse, ApiError> {
    let category = match query.category.as_deref().filter(|c| !c.is_empty()) {
        Some(raw) => Some(raw.parse::<TrendCategory>().map_err(|e| {
            let valid: Vec<&str> = TrendCategory::ALL.iter().map(TrendCategory::label).collect();
            ApiError::bad_request(
                "invalid_category",
                format!("{}; expected one of: {}", e, valid.join(", ")),
            )
        })?),
        None => None,
    };
    let limit = state.trend_limit(query.limit);

    let catalog = state.catalog.universities().await?;
    let ranking = state.trend_scorer().rank(&catalog, category, limit);

    tracing::info!(
        "Returning {} trending universities (category: {:?}, total: {})",
        ranking.trending.len(),
        category,
        ranking.total
    );

    Ok(HttpResponse::Ok().json(TrendsResponse {
        trending: ranking.trending,
        categories: TrendCategory::ALL.to_vec(),
        total: ranking.total,
    }))
}
