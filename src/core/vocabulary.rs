//! Controlled vocabularies the compatibility engine scores against.
//!
//! These tables are part of the scoring contract: changing a single entry
//! changes the score of every pair that touches it. Lookups are linear scans
//! over small static slices, which keeps them trivially auditable.

use serde::{Deserialize, Serialize};

/// Interest tag categories shown during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterestCategory {
    Lifestyle,
    Personality,
    DatingIntent,
    Hobbies,
}

impl InterestCategory {
    pub const ALL: [InterestCategory; 4] = [
        InterestCategory::Lifestyle,
        InterestCategory::Personality,
        InterestCategory::DatingIntent,
        InterestCategory::Hobbies,
    ];
}

pub const LIFESTYLE: &[&str] = &[
    "Fitness", "Gaming", "Partying", "Reading", "Traveling", "Cooking", "Photography",
];

pub const PERSONALITY: &[&str] = &[
    "Introvert", "Extrovert", "Ambivert", "Deep thinker", "Funny", "Chill", "Romantic", "Adventurous",
];

pub const DATING_INTENT: &[&str] = &[
    "Serious relationship", "Casual dating", "Friendship first", "See where it goes",
];

pub const HOBBIES: &[&str] = &[
    "Music", "Movies", "Tech", "Sports", "Art", "Fashion", "Startups",
];

pub const SERIOUS_RELATIONSHIP: &str = "Serious relationship";
pub const CASUAL_DATING: &str = "Casual dating";
pub const FRIENDSHIP_FIRST: &str = "Friendship first";

/// Cross-discipline department pairs, keyed by the subject's department.
///
/// Not symmetric: M.Tech lists PhD, PhD has no entry of its own.
pub const DEPARTMENT_COMPATIBILITY: &[(&str, &[&str])] = &[
    ("B.Tech", &["B.Tech", "M.Tech", "MCA"]),
    ("M.Tech", &["B.Tech", "M.Tech", "PhD"]),
    ("MCA", &["B.Tech", "MCA", "B.Sc"]),
    ("MBA", &["MBA", "BBA", "B.Tech"]),
    ("B.Arch", &["B.Arch", "B.Des", "Fine Arts"]),
];

/// Personality archetypes that pair well, keyed by the subject's archetype
pub const PERSONALITY_COMPATIBILITY: &[(&str, &[&str])] = &[
    ("Introvert", &["Extrovert", "Ambivert", "Deep thinker"]),
    ("Extrovert", &["Introvert", "Ambivert", "Funny"]),
    ("Deep thinker", &["Deep thinker", "Introvert", "Romantic"]),
    ("Adventurous", &["Adventurous", "Funny", "Chill"]),
    ("Chill", &["Chill", "Adventurous", "Ambivert"]),
    ("Romantic", &["Romantic", "Deep thinker"]),
    ("Funny", &["Funny", "Extrovert", "Adventurous"]),
];

/// All tags belonging to a category
pub fn tags(category: InterestCategory) -> &'static [&'static str] {
    match category {
        InterestCategory::Lifestyle => LIFESTYLE,
        InterestCategory::Personality => PERSONALITY,
        InterestCategory::DatingIntent => DATING_INTENT,
        InterestCategory::Hobbies => HOBBIES,
    }
}

#[inline]
pub fn is_in_category(tag: &str, category: InterestCategory) -> bool {
    tags(category).contains(&tag)
}

/// Category of a known tag, `None` for tags outside the vocabulary
pub fn category_of(tag: &str) -> Option<InterestCategory> {
    InterestCategory::ALL
        .into_iter()
        .find(|category| is_in_category(tag, *category))
}

fn lookup(table: &'static [(&'static str, &'static [&'static str])], key: &str) -> &'static [&'static str] {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, values)| *values)
        .unwrap_or(&[])
}

/// Departments considered compatible with `department`; empty when unknown
pub fn compatible_departments(department: &str) -> &'static [&'static str] {
    lookup(DEPARTMENT_COMPATIBILITY, department)
}

/// Archetypes considered compatible with `personality`; empty when unknown
pub fn compatible_personalities(personality: &str) -> &'static [&'static str] {
    lookup(PERSONALITY_COMPATIBILITY, personality)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of_known_tags() {
        assert_eq!(category_of("Gaming"), Some(InterestCategory::Lifestyle));
        assert_eq!(category_of("Introvert"), Some(InterestCategory::Personality));
        assert_eq!(category_of("Casual dating"), Some(InterestCategory::DatingIntent));
        assert_eq!(category_of("Startups"), Some(InterestCategory::Hobbies));
    }

    #[test]
    fn test_unknown_tag_has_no_category() {
        assert_eq!(category_of("Knitting"), None);
        // Matching is case sensitive
        assert_eq!(category_of("gaming"), None);
    }

    #[test]
    fn test_categories_are_disjoint() {
        for category in InterestCategory::ALL {
            for tag in tags(category) {
                assert_eq!(category_of(tag), Some(category), "tag {} in two categories", tag);
            }
        }
    }

    #[test]
    fn test_department_table_is_asymmetric() {
        assert!(compatible_departments("M.Tech").contains(&"PhD"));
        assert!(compatible_departments("PhD").is_empty());
        assert!(compatible_departments("MBA").contains(&"B.Tech"));
        assert!(!compatible_departments("B.Tech").contains(&"MBA"));
    }

    #[test]
    fn test_personality_table() {
        assert_eq!(
            compatible_personalities("Introvert"),
            &["Extrovert", "Ambivert", "Deep thinker"]
        );
        assert_eq!(compatible_personalities("Romantic").len(), 2);
        // Ambivert is a valid tag with no table entry of its own
        assert!(compatible_personalities("Ambivert").is_empty());
    }
}
