// Core algorithm exports
pub mod compatibility;
pub mod filters;
pub mod matcher;
pub mod vocabulary;

pub use compatibility::{analyze_compatibility, compatibility_score, rank_by_compatibility, rank_scored, MatchAnalysis, MatchType};
pub use filters::{is_eligible, matches_gender_preferences};
pub use matcher::{Feed, MatchError, MatchOutcome, Matcher};
pub use vocabulary::InterestCategory;
