// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{is_blank_id, AdminRecommendation, FeedEntry, Gender, InterestedIn, MatchRecord, Profile, RecommendationType, Suggestion};
pub use requests::{AnalyzeRequest, CreateMatchRequest, FeedRequest, RankRequest, SuggestionsRequest};
pub use responses::{CreateMatchResponse, ErrorResponse, FeedResponse, HealthResponse, RankResponse, SuggestionsResponse};
