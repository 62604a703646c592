// Unit tests for the compatibility engine

use cetea_match::core::{
    compatibility::{POWER_COUPLE, SAME_INTENT_TAG, STUDY_BUDDIES, VIBE_CHECK_TAG},
    vocabulary::{tags, InterestCategory},
    analyze_compatibility, compatibility_score, rank_by_compatibility, MatchType,
};
use cetea_match::models::{Gender, InterestedIn, Profile};

fn student(id: &str, department: Option<&str>, major: Option<&str>, interests: &[&str]) -> Profile {
    Profile {
        id: id.to_string(),
        name: format!("Student {}", id),
        age: 20,
        gender: Gender::Male,
        interested_in: InterestedIn::Everyone,
        department: department.map(str::to_string),
        major: major.map(str::to_string),
        year: Some("3rd Year".to_string()),
        bio: None,
        interests: interests.iter().map(|s| s.to_string()).collect(),
        primary_photo: None,
        is_admin: false,
    }
}

/// A small spread of profiles covering every rule
fn sample_profiles() -> Vec<Profile> {
    vec![
        student("empty", None, None, &[]),
        student("cs", Some("B.Tech"), Some("Computer Science"), &["Gaming", "Introvert", "Serious relationship"]),
        student("cs2", Some("B.Tech"), Some("Computer Science"), &["Gaming", "Extrovert", "Casual dating"]),
        student("mech", Some("B.Tech"), Some("Mechanical"), &["Sports", "Funny", "Friendship first"]),
        student("mba", Some("MBA"), Some("Finance"), &["Startups", "Chill", "Adventurous", "See where it goes"]),
        student("arch", Some("B.Arch"), Some("Architecture"), &["Art", "Romantic", "Deep thinker", "Friendship first"]),
        student("phd", Some("PhD"), None, &["Reading", "Deep thinker", "Unknown tag"]),
        student(
            "max",
            Some("B.Tech"),
            Some("Computer Science"),
            &["Introvert", "Extrovert", "Deep thinker", "Serious relationship", "Gaming", "Music", "Tech"],
        ),
    ]
}

#[test]
fn test_percentage_always_in_range() {
    let profiles = sample_profiles();

    for a in &profiles {
        for b in &profiles {
            let analysis = analyze_compatibility(a, b);
            assert!(analysis.percentage <= 100, "{} -> {}", a.id, b.id);
            assert_eq!(analysis.percentage as i32, analysis.score.clamp(0, 100));
        }
    }
}

#[test]
fn test_analysis_is_deterministic() {
    let profiles = sample_profiles();

    for a in &profiles {
        for b in &profiles {
            assert_eq!(analyze_compatibility(a, b), analyze_compatibility(a, b));
        }
    }
}

#[test]
fn test_self_analysis_gets_full_academic_and_interest_credit() {
    let profile = student("cs", Some("B.Tech"), Some("Computer Science"), &["Gaming", "Music", "Tech"]);

    let analysis = analyze_compatibility(&profile, &profile);

    assert_eq!(analysis.common_interests, profile.interests);
    assert_eq!(analysis.academic_synergy.as_deref(), Some(STUDY_BUDDIES));
    assert_eq!(analysis.score, 25 + 15);
    assert_eq!(analysis.match_type, MatchType::StudyBuddy);
}

#[test]
fn test_no_overlap_is_standard_zero() {
    let a = student("a", Some("B.Tech"), Some("Civil"), &["Gaming"]);
    let b = student("b", Some("B.Arch"), Some("Architecture"), &["Art"]);

    let analysis = analyze_compatibility(&a, &b);

    assert_eq!(analysis.score, 0);
    assert_eq!(analysis.percentage, 0);
    assert_eq!(analysis.match_type, MatchType::Standard);
}

#[test]
fn test_serious_casual_penalty_is_exactly_thirty() {
    let base = student("a", Some("B.Tech"), Some("Civil"), &["Gaming", "Music"]);
    let other = student("b", Some("B.Tech"), Some("Civil"), &["Gaming", "Music"]);
    let baseline = compatibility_score(&base, &other);

    let mut serious = base.clone();
    serious.interests.push("Serious relationship".to_string());
    let mut casual = other.clone();
    casual.interests.push("Casual dating".to_string());

    assert_eq!(compatibility_score(&serious, &casual), baseline - 30);
    assert_eq!(compatibility_score(&casual, &serious), baseline - 30);
}

#[test]
fn test_other_unequal_intents_contribute_nothing() {
    let intents = tags(InterestCategory::DatingIntent);

    for mine in intents {
        for theirs in intents {
            if mine == theirs {
                continue;
            }
            let a = student("a", None, None, &[*mine]);
            let b = student("b", None, None, &[*theirs]);
            let expected = if (*mine, *theirs) == ("Serious relationship", "Casual dating")
                || (*mine, *theirs) == ("Casual dating", "Serious relationship")
            {
                -30
            } else {
                0
            };
            assert_eq!(compatibility_score(&a, &b), expected, "{} vs {}", mine, theirs);
        }
    }
}

#[test]
fn test_vibe_check_passed_at_most_once() {
    let a = student("a", None, None, &["Introvert", "Extrovert", "Chill"]);
    let b = student("b", None, None, &["Ambivert", "Adventurous", "Deep thinker", "Funny"]);

    let analysis = analyze_compatibility(&a, &b);

    assert_eq!(analysis.vibe_tags.iter().filter(|t| *t == VIBE_CHECK_TAG).count(), 1);
}

#[test]
fn test_personality_never_exceeds_forty() {
    let personality = tags(InterestCategory::Personality);
    let a = student("a", None, None, personality);
    let b = student("b", None, None, personality);

    // Every tag is shared (8 * 5), no intent, personality capped at 40
    assert_eq!(compatibility_score(&a, &b), 40 + 40);
}

#[test]
fn test_soul_mate_overrides_study_buddy() {
    let interests = ["Serious relationship", "Introvert", "Deep thinker", "Gaming", "Music", "Tech"];
    let a = student("a", Some("B.Tech"), Some("Civil"), &interests);
    let b = student("b", Some("B.Tech"), Some("Civil"), &interests);

    let analysis = analyze_compatibility(&a, &b);

    assert!(analysis.percentage >= 90);
    assert_eq!(analysis.match_type, MatchType::SoulMate);
    assert_eq!(analysis.academic_synergy.as_deref(), Some(STUDY_BUDDIES));
}

#[test]
fn test_soul_mate_overrides_bestie() {
    let interests = ["Friendship first", "Funny", "Gaming", "Music", "Tech", "Art"];
    let a = student("a", Some("MCA"), Some("Computer Applications"), &interests);
    let b = student("b", Some("MCA"), Some("Computer Applications"), &interests);

    let analysis = analyze_compatibility(&a, &b);

    // 25 academic + 30 shared + 50 intent + 15 personality
    assert_eq!(analysis.score, 120);
    assert_eq!(analysis.match_type, MatchType::SoulMate);
}

#[test]
fn test_same_track_study_buddy_example() {
    let a = student("a", Some("Engineering-A"), Some("CS"), &["Gaming", "Introvert", "Serious relationship"]);
    let b = student("b", Some("Engineering-A"), Some("CS"), &["Gaming", "Reading", "Introvert", "Serious relationship"]);

    let analysis = analyze_compatibility(&a, &b);

    assert_eq!(analysis.score, 80);
    assert_eq!(analysis.percentage, 80);
    assert_eq!(analysis.vibe_tags, vec![SAME_INTENT_TAG]);
    assert_eq!(analysis.match_type, MatchType::StudyBuddy);
}

#[test]
fn test_power_couple_requires_subject_table_entry() {
    let mtech = student("a", Some("M.Tech"), Some("Robotics"), &[]);
    let phd = student("b", Some("PhD"), None, &[]);

    assert_eq!(analyze_compatibility(&mtech, &phd).academic_synergy.as_deref(), Some(POWER_COUPLE));
    assert_eq!(analyze_compatibility(&phd, &mtech).academic_synergy, None);
}

#[test]
fn test_unknown_tags_are_inert_beyond_sharing() {
    let a = student("a", None, None, &["Underwater basket weaving"]);
    let b = student("b", None, None, &["Underwater basket weaving"]);

    let analysis = analyze_compatibility(&a, &b);

    // Still a shared interest, but drives no intent or personality rule
    assert_eq!(analysis.score, 5);
    assert!(analysis.vibe_tags.is_empty());
}

#[test]
fn test_rank_is_non_increasing_and_leaves_input_alone() {
    let profiles = sample_profiles();
    let subject = profiles[1].clone();
    let candidates: Vec<Profile> = profiles[2..].to_vec();
    let snapshot = candidates.clone();

    let ranked = rank_by_compatibility(&subject, &candidates);

    assert_eq!(candidates, snapshot);
    assert_eq!(ranked.len(), candidates.len());
    let scores: Vec<i32> = ranked.iter().map(|p| compatibility_score(&subject, p)).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "scores not sorted: {:?}", scores);
}

#[test]
fn test_rank_empty_candidates() {
    let subject = student("a", None, None, &[]);
    assert!(rank_by_compatibility(&subject, &[]).is_empty());
}
