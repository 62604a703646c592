//! CETea Match - compatibility scoring and matchmaking for the CETea campus dating app
//!
//! The heart of this library is the compatibility engine in [`crate::core::compatibility`]:
//! a pure function over two profiles that yields a raw score, a 0-100 percentage,
//! explanatory tags and a match classification. The discovery feed, the
//! match-creation path and the admin matchmaking tool are layered on top of it
//! in [`crate::core::matcher`] and exposed over HTTP by [`routes`].

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{analyze_compatibility, compatibility_score, rank_by_compatibility, MatchAnalysis, MatchType, Matcher};
pub use crate::models::{AdminRecommendation, Profile};
