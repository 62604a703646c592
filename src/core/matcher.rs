use std::collections::HashSet;
use thiserror::Error;

use crate::core::compatibility::{analyze_compatibility, compatibility_score, MatchAnalysis};
use crate::core::filters::is_eligible;
use crate::models::{is_blank_id, AdminRecommendation, FeedEntry, MatchRecord, Profile, Suggestion};

pub const SOUL_MATE_TAG: &str = "Soul Mate ✨";

/// Number of suggestions the admin matchmaking tool shows by default
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Errors raised by matchmaking operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("cannot match user {0} with themselves")]
    SelfMatch(String),

    #[error("cannot recommend user {0} to themselves")]
    SelfRecommendation(String),

    #[error("missing user id: {0}")]
    MissingUserId(&'static str),
}

/// Ordered discovery stack
#[derive(Debug)]
pub struct Feed {
    pub entries: Vec<FeedEntry>,
    pub total_candidates: usize,
}

/// A created match along with the analysis shown on the reveal screen
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub record: MatchRecord,
    pub analysis: MatchAnalysis,
    pub instant: bool,
}

/// Matchmaking orchestrator used by the discovery feed, the swipe path and
/// the admin tool.
///
/// # Feed order
/// 1. Soulmate recommendations
/// 2. Other admin recommendations
/// 3. Everyone else
///
/// Within each group candidates keep descending compatibility order.
#[derive(Debug, Clone)]
pub struct Matcher {
    suggestion_limit: usize,
}

impl Matcher {
    pub fn new(suggestion_limit: usize) -> Self {
        Self { suggestion_limit }
    }

    /// Build the swipe stack for `viewer`
    ///
    /// # Arguments
    /// * `viewer` - The user opening the feed
    /// * `candidates` - Profiles fetched from the store
    /// * `recommendations` - Admin recommendations; only those targeting the viewer apply
    /// * `ignored_ids` - Already swiped, matched or blocked profiles
    /// * `limit` - Maximum number of entries to return
    pub fn build_feed(
        &self,
        viewer: &Profile,
        candidates: &[Profile],
        recommendations: &[AdminRecommendation],
        ignored_ids: &HashSet<String>,
        limit: usize,
    ) -> Feed {
        let total_candidates = candidates.len();

        let mine: Vec<&AdminRecommendation> = recommendations
            .iter()
            .filter(|rec| rec.target_user_id == viewer.id)
            .collect();

        let mut entries: Vec<FeedEntry> = candidates
            .iter()
            .filter(|candidate| is_eligible(viewer, candidate, ignored_ids))
            .map(|candidate| {
                let is_recommended = mine.iter().any(|rec| rec.recommended_user_id == candidate.id);
                let is_soulmate = mine
                    .iter()
                    .any(|rec| rec.recommended_user_id == candidate.id && rec.is_soulmate());

                FeedEntry {
                    analysis: analyze_compatibility(viewer, candidate),
                    profile: candidate.clone(),
                    is_recommended,
                    is_soulmate,
                }
            })
            .collect();

        // Stable sort: group first, then descending raw score
        entries.sort_by(|a, b| {
            a.priority()
                .cmp(&b.priority())
                .then_with(|| b.analysis.score.cmp(&a.analysis.score))
        });

        entries.truncate(limit);

        tracing::debug!(
            "Built feed for {}: {} entries from {} candidates ({} recommendations)",
            viewer.id,
            entries.len(),
            total_candidates,
            mine.len()
        );

        Feed {
            entries,
            total_candidates,
        }
    }

    /// Top candidates for `target` among `users`, for the admin matchmaking tool
    pub fn suggest(&self, target: &Profile, users: &[Profile], limit: Option<usize>) -> Vec<Suggestion> {
        let limit = limit.unwrap_or(self.suggestion_limit);

        let mut scored: Vec<Suggestion> = users
            .iter()
            .filter(|user| user.id != target.id)
            .map(|user| Suggestion {
                score: compatibility_score(target, user),
                profile: user.clone(),
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit);
        scored
    }

    /// Reject recommendations the admin tool must not store
    pub fn validate_recommendation(&self, rec: &AdminRecommendation) -> Result<(), MatchError> {
        if is_blank_id(&rec.target_user_id) {
            return Err(MatchError::MissingUserId("targetUserId"));
        }
        if is_blank_id(&rec.recommended_user_id) {
            return Err(MatchError::MissingUserId("recommendedUserId"));
        }
        if rec.target_user_id == rec.recommended_user_id {
            return Err(MatchError::SelfRecommendation(rec.target_user_id.clone()));
        }
        Ok(())
    }

    /// Decide whether a right swipe from `subject` on `other` creates a match.
    ///
    /// A match happens when `other` already liked `subject`, or when an
    /// admin recommended `other` to `subject` (instant match). Soulmate
    /// recommendations store a full score regardless of the computed one.
    /// Returns `Ok(None)` when no match is created.
    pub fn create_match(
        &self,
        subject: &Profile,
        other: &Profile,
        other_liked: bool,
        recommendations: &[AdminRecommendation],
    ) -> Result<Option<MatchOutcome>, MatchError> {
        if subject.id == other.id {
            return Err(MatchError::SelfMatch(subject.id.clone()));
        }

        let recommendation = recommendations
            .iter()
            .filter(|rec| rec.target_user_id == subject.id && rec.recommended_user_id == other.id)
            .max_by_key(|rec| rec.is_soulmate());

        let instant = recommendation.is_some();
        if !other_liked && !instant {
            return Ok(None);
        }

        let mut analysis = analyze_compatibility(subject, other);
        if recommendation.is_some_and(AdminRecommendation::is_soulmate) {
            analysis.score = 100;
            analysis.percentage = 100;
            analysis.vibe_tags.insert(0, SOUL_MATE_TAG.to_string());
        }

        let record = MatchRecord {
            id: uuid::Uuid::new_v4(),
            user1: subject.id.clone(),
            user2: other.id.clone(),
            compatibility_score: analysis.score,
            created_at: chrono::Utc::now(),
        };

        tracing::info!(
            "Match created: {} <-> {} (score: {}, instant: {})",
            subject.id,
            other.id,
            record.compatibility_score,
            instant
        );

        Ok(Some(MatchOutcome {
            record,
            analysis,
            instant,
        }))
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTION_LIMIT)
    }
}
