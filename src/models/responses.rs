use serde::{Deserialize, Serialize};

use crate::core::MatchAnalysis;
use crate::models::domain::{FeedEntry, MatchRecord, Profile, Suggestion};

/// Response for the rank endpoint; `scores[i]` belongs to `profiles[i]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub profiles: Vec<Profile>,
    pub scores: Vec<i32>,
}

/// Response for the discovery feed endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub entries: Vec<FeedEntry>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the admin suggestions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

/// Response for the create match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatchResponse {
    pub matched: bool,
    pub instant: bool,
    #[serde(rename = "match")]
    pub record: Option<MatchRecord>,
    pub analysis: Option<MatchAnalysis>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn bad_request(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code: 400,
        }
    }
}
