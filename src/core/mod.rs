// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod trending;

pub use filters::{matches_preferences, UniversityFilter};
pub use matcher::{match_reasons, MatchScorer, FALLBACK_MATCH_REASON};
pub use scoring::format_naira;
pub use trending::{
    TrendPoints, TrendRanking, TrendScorer, FALLBACK_TREND_REASON, MAX_TREND_REASONS,
};
