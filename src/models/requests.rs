use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::{Validate, ValidationError};

use crate::models::domain::{is_blank_id, AdminRecommendation, Profile};

/// Request to explain compatibility between two profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(custom(function = "validate_profile"))]
    pub subject: Profile,
    #[validate(custom(function = "validate_profile"))]
    pub other: Profile,
}

/// Request to order candidates by compatibility
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(custom(function = "validate_profile"))]
    pub subject: Profile,
    #[validate(custom(function = "validate_profiles"))]
    pub candidates: Vec<Profile>,
}

/// Request to build a discovery feed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedRequest {
    #[validate(custom(function = "validate_profile"))]
    pub viewer: Profile,
    #[validate(custom(function = "validate_profiles"))]
    pub candidates: Vec<Profile>,
    #[serde(default)]
    pub recommendations: Vec<AdminRecommendation>,
    #[serde(default)]
    #[serde(alias = "ignored_ids", rename = "ignoredIds")]
    pub ignored_ids: HashSet<String>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Request for admin matchmaking suggestions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestionsRequest {
    #[validate(custom(function = "validate_profile"))]
    pub target: Profile,
    #[validate(custom(function = "validate_profiles"))]
    pub users: Vec<Profile>,
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<u8>,
}

/// Request sent when a user swipes right
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMatchRequest {
    #[validate(custom(function = "validate_profile"))]
    pub subject: Profile,
    #[validate(custom(function = "validate_profile"))]
    pub other: Profile,
    /// Whether `other` already swiped right on `subject`
    #[serde(default)]
    #[serde(alias = "other_liked", rename = "otherLiked")]
    pub other_liked: bool,
    #[serde(default)]
    pub recommendations: Vec<AdminRecommendation>,
}

fn validate_profile(profile: &Profile) -> Result<(), ValidationError> {
    if is_blank_id(&profile.id) {
        return Err(ValidationError::new("profile_id_required"));
    }
    Ok(())
}

fn validate_profiles(profiles: &Vec<Profile>) -> Result<(), ValidationError> {
    profiles.iter().try_for_each(validate_profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_rejects_blank_id() {
        let json = r#"{
            "subject": {"id": " ", "name": "A", "age": 20, "gender": "Female"},
            "other": {"id": "b", "name": "B", "age": 21, "gender": "Male"}
        }"#;
        let req: AnalyzeRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_feed_request_defaults() {
        let json = r#"{
            "viewer": {"id": "a", "name": "A", "age": 20, "gender": "Female"},
            "candidates": []
        }"#;
        let req: FeedRequest = serde_json::from_str(json).unwrap();

        assert!(req.validate().is_ok());
        assert!(req.recommendations.is_empty());
        assert!(req.ignored_ids.is_empty());
        assert_eq!(req.limit, None);
    }

    #[test]
    fn test_suggestions_limit_range() {
        let json = r#"{
            "target": {"id": "a", "name": "A", "age": 20, "gender": "Female"},
            "users": [],
            "limit": 0
        }"#;
        let req: SuggestionsRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_err());
    }
}
