use serde::{Deserialize, Deserializer, Serialize};

use crate::core::MatchAnalysis;

/// Gender a user identifies as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-binary")]
    NonBinary,
    Other,
}

/// Who a user wants to see in discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterestedIn {
    Male,
    Female,
    #[default]
    Everyone,
}

impl InterestedIn {
    /// Whether a person of `gender` falls within this preference
    pub fn accepts(self, gender: Gender) -> bool {
        match self {
            InterestedIn::Everyone => true,
            InterestedIn::Male => gender == Gender::Male,
            InterestedIn::Female => gender == Gender::Female,
        }
    }
}

/// A student's profile as used for discovery and scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    #[serde(rename = "interestedIn", alias = "interested_in", default, deserialize_with = "null_as_default")]
    pub interested_in: InterestedIn,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(rename = "primaryPhoto", alias = "primary_photo", default)]
    pub primary_photo: Option<String>,
    #[serde(rename = "isAdmin", alias = "is_admin", default, deserialize_with = "null_as_default")]
    pub is_admin: bool,
}

impl Profile {
    /// Display string combining department and major, e.g. "B.Tech - Computer Science"
    pub fn course(&self) -> String {
        match (self.department.as_deref(), self.major.as_deref()) {
            (Some(dept), Some(major)) if !major.is_empty() => format!("{} - {}", dept, major),
            (Some(dept), _) => dept.to_string(),
            (None, Some(major)) => major.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Non-empty department, if any
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref().filter(|d| !d.is_empty())
    }
}

/// True for ids that are empty or whitespace only
pub fn is_blank_id(id: &str) -> bool {
    id.trim().is_empty()
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Kind of admin recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    #[default]
    Standard,
    Soulmate,
    Friend,
}

/// An administrator-curated pairing shown to `target_user_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminRecommendation {
    #[serde(rename = "targetUserId", alias = "target_user_id")]
    pub target_user_id: String,
    #[serde(rename = "recommendedUserId", alias = "recommended_user_id")]
    pub recommended_user_id: String,
    #[serde(rename = "type", default)]
    pub recommendation_type: RecommendationType,
}

impl AdminRecommendation {
    pub fn is_soulmate(&self) -> bool {
        self.recommendation_type == RecommendationType::Soulmate
    }
}

/// A created match. The compatibility score is fixed at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: uuid::Uuid,
    pub user1: String,
    pub user2: String,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: i32,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// One card in the discovery stack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntry {
    pub profile: Profile,
    pub analysis: MatchAnalysis,
    #[serde(rename = "isRecommended")]
    pub is_recommended: bool,
    #[serde(rename = "isSoulmate")]
    pub is_soulmate: bool,
}

impl FeedEntry {
    /// Feed group: soulmates first, then other recommendations, then the rest
    pub fn priority(&self) -> u8 {
        if self.is_soulmate {
            0
        } else if self.is_recommended {
            1
        } else {
            2
        }
    }
}

/// Candidate suggested to the admin matchmaking tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub profile: Profile,
    pub score: i32,
}
