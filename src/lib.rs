//! UniMatch - recommendation and trend scoring service for university discovery
//!
//! This library provides the scoring engine behind UniMatch: a weighted
//! match scorer that ranks universities against a student's preferences, and
//! an additive trend scorer that ranks and categorizes universities on their
//! own merits. Both are pure functions over catalog snapshots.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{MatchScorer, TrendScorer, TrendPoints, UniversityFilter, format_naira};
pub use models::{
    MatchWeights, PreferenceCriteria, ScoredUniversity, TrendCategory, TrendingUniversity,
    University,
};
