use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::vocabulary::{
    compatible_departments, compatible_personalities, is_in_category, InterestCategory,
    CASUAL_DATING, FRIENDSHIP_FIRST, SERIOUS_RELATIONSHIP,
};
use crate::models::Profile;

/// Point values for each scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityWeights {
    pub interest: i32,
    pub intent_match: i32,
    pub intent_mismatch_penalty: i32,
    pub personality_compatible: i32,
    pub personality_match: i32,
    pub friendship_similarity: i32,
    pub personality_cap: i32,
    pub department_match: i32,
    pub major_match: i32,
    pub cross_discipline: i32,
    pub friendship_bonus: i32,
}

pub const WEIGHTS: CompatibilityWeights = CompatibilityWeights {
    interest: 5,
    intent_match: 30,
    intent_mismatch_penalty: -30,
    personality_compatible: 15,
    personality_match: 10,
    friendship_similarity: 5,
    personality_cap: 40,
    department_match: 10,
    major_match: 15,
    cross_discipline: 5,
    friendship_bonus: 20,
};

pub const STUDY_BUDDIES: &str = "Study Buddies 📚";
pub const POWER_COUPLE: &str = "Power Couple 🚀";
pub const SAME_INTENT_TAG: &str = "Looking for the same thing";
pub const POTENTIAL_BFF_TAG: &str = "Potential BFF 👯‍♀️";
pub const VIBE_CHECK_TAG: &str = "Vibe Check Passed";

/// Classification shown on the match reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MatchType {
    #[serde(rename = "Soul Mate")]
    SoulMate,
    Bestie,
    #[serde(rename = "Study Buddy")]
    StudyBuddy,
    #[default]
    Standard,
}

/// Explained compatibility between a subject and another profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    /// Raw accumulated points, may be negative or above 100
    pub score: i32,
    /// Score clamped into 0..=100
    pub percentage: u8,
    pub common_interests: Vec<String>,
    pub vibe_tags: Vec<String>,
    pub academic_synergy: Option<String>,
    pub match_type: MatchType,
}

/// Score how well `other` fits `subject`.
///
/// The roles are not interchangeable: the subject's department keys the
/// cross-discipline table and the subject's personality tags drive the
/// pairwise comparison, so `analyze_compatibility(a, b)` and
/// `analyze_compatibility(b, a)` can differ.
///
/// Total over its input: missing academic fields or empty interest lists
/// only mean the corresponding rule contributes nothing.
pub fn analyze_compatibility(subject: &Profile, other: &Profile) -> MatchAnalysis {
    let mut score = 0;
    let mut vibe_tags = Vec::new();
    let mut match_type = MatchType::Standard;

    // 1. Academics
    let academic_synergy = match (subject.department(), other.department()) {
        (Some(dept), Some(other_dept)) if dept == other_dept => {
            score += WEIGHTS.department_match;
            if subject.major == other.major {
                score += WEIGHTS.major_match;
                match_type = MatchType::StudyBuddy;
                Some(STUDY_BUDDIES.to_string())
            } else {
                Some(format!("{} Squad", dept))
            }
        }
        (Some(dept), Some(other_dept)) if compatible_departments(dept).contains(&other_dept) => {
            score += WEIGHTS.cross_discipline;
            Some(POWER_COUPLE.to_string())
        }
        _ => None,
    };

    // 2. Shared interests, in the other profile's order
    let subject_interests: HashSet<&str> = subject.interests.iter().map(String::as_str).collect();
    let common_interests: Vec<String> = other
        .interests
        .iter()
        .filter(|tag| subject_interests.contains(tag.as_str()))
        .cloned()
        .collect();
    score += WEIGHTS.interest * common_interests.len() as i32;

    // 3. Dating intent
    let subject_intent = first_tag_in(subject, InterestCategory::DatingIntent);
    let other_intent = first_tag_in(other, InterestCategory::DatingIntent);
    let is_friendship =
        subject_intent == Some(FRIENDSHIP_FIRST) || other_intent == Some(FRIENDSHIP_FIRST);

    if let (Some(mine), Some(theirs)) = (subject_intent, other_intent) {
        if mine == theirs {
            score += WEIGHTS.intent_match;
            vibe_tags.push(SAME_INTENT_TAG.to_string());

            if mine == FRIENDSHIP_FIRST {
                score += WEIGHTS.friendship_bonus;
                match_type = MatchType::Bestie;
                vibe_tags.push(POTENTIAL_BFF_TAG.to_string());
            }
        } else if is_serious_casual_mismatch(mine, theirs) {
            score += WEIGHTS.intent_mismatch_penalty;
        }
    }

    // 4. Personality, every pair compared, total capped
    let other_personality: Vec<&str> = tags_in(other, InterestCategory::Personality).collect();
    let mut personality_score = 0;

    for mine in tags_in(subject, InterestCategory::Personality) {
        for &theirs in &other_personality {
            if mine == theirs {
                personality_score += WEIGHTS.personality_match;
                if is_friendship {
                    personality_score += WEIGHTS.friendship_similarity;
                }
            } else if compatible_personalities(mine).contains(&theirs) {
                personality_score += WEIGHTS.personality_compatible;
                if !vibe_tags.iter().any(|tag| tag == VIBE_CHECK_TAG) {
                    vibe_tags.push(VIBE_CHECK_TAG.to_string());
                }
            }
        }
    }
    score += personality_score.min(WEIGHTS.personality_cap);

    // 5. Normalize
    let percentage = to_percentage(score);

    // 6. Final classification
    if percentage >= 90 {
        match_type = MatchType::SoulMate;
    } else if is_friendship && percentage >= 70 {
        match_type = MatchType::Bestie;
    }

    MatchAnalysis {
        score,
        percentage,
        common_interests,
        vibe_tags,
        academic_synergy,
        match_type,
    }
}

/// Raw score only, for callers that just need an ordering
#[inline]
pub fn compatibility_score(subject: &Profile, other: &Profile) -> i32 {
    analyze_compatibility(subject, other).score
}

/// Candidates ordered by descending raw score against `subject`.
///
/// The sort is stable, so equal scores keep their input order. `candidates`
/// is left untouched.
pub fn rank_by_compatibility(subject: &Profile, candidates: &[Profile]) -> Vec<Profile> {
    rank_scored(subject, candidates)
        .into_iter()
        .map(|(_, profile)| profile.clone())
        .collect()
}

/// Same ordering as [`rank_by_compatibility`], paired with each raw score.
/// Every candidate is scored exactly once.
pub fn rank_scored<'a>(subject: &Profile, candidates: &'a [Profile]) -> Vec<(i32, &'a Profile)> {
    let mut scored: Vec<(i32, &Profile)> = candidates
        .iter()
        .map(|candidate| (compatibility_score(subject, candidate), candidate))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
}

/// Raw score clamped into 0..=100. Scores are whole points, so the rounding
/// step of the percentage formula is the identity here.
#[inline]
fn to_percentage(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

#[inline]
fn is_serious_casual_mismatch(a: &str, b: &str) -> bool {
    (a == SERIOUS_RELATIONSHIP && b == CASUAL_DATING)
        || (a == CASUAL_DATING && b == SERIOUS_RELATIONSHIP)
}

fn tags_in(profile: &Profile, category: InterestCategory) -> impl Iterator<Item = &str> {
    profile
        .interests
        .iter()
        .map(String::as_str)
        .filter(move |tag| is_in_category(tag, category))
}

fn first_tag_in(profile: &Profile, category: InterestCategory) -> Option<&str> {
    tags_in(profile, category).next()
}
