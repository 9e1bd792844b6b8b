use serde::{Deserialize, Serialize};
use crate::models::domain::{TrendCategory, TrendingUniversity};

/// Response for the trends endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsResponse {
    pub trending: Vec<TrendingUniversity>,
    pub categories: Vec<TrendCategory>,
    /// Matches after category filtering, before the limit is applied
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub universities: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
