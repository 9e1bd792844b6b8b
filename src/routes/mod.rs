// Route exports
pub mod recommendations;
pub mod trends;
pub mod universities;

use actix_web::web;
use chrono::Datelike;
use crate::config::Settings;
use crate::core::{MatchScorer, TrendPoints, TrendScorer};
use crate::services::Catalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub matcher: MatchScorer,
    pub trend_points: TrendPoints,
    /// Fixed year for trend scoring; `None` uses the current year per request
    pub trend_year: Option<i32>,
    pub prefilter: bool,
    pub default_trend_limit: usize,
    pub max_trend_limit: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: &Settings) -> Self {
        Self {
            catalog,
            matcher: MatchScorer::new(settings.match_weights()),
            trend_points: TrendPoints::default(),
            trend_year: None,
            prefilter: settings.matching.prefilter,
            default_trend_limit: settings.trending.default_limit,
            max_trend_limit: settings.trending.max_limit,
        }
    }

    /// Pin trend scoring to a given year
    pub fn with_trend_year(mut self, year: i32) -> Self {
        self.trend_year = Some(year);
        self
    }

    /// Trend scorer for the current request
    pub fn trend_scorer(&self) -> TrendScorer {
        let year = self.trend_year.unwrap_or_else(|| chrono::Utc::now().year());
        TrendScorer::new(self.trend_points, year)
    }

    /// Clamp a requested trends limit to the configured bounds
    pub fn trend_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_trend_limit)
            .min(self.max_trend_limit)
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(universities::configure)
            .configure(recommendations::configure)
            .configure(trends::configure),
    );
}
