use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use crate::core::{analyze_compatibility, MatchAnalysis};
use crate::models::Profile;

/// In-process cache of pair analyses
///
/// The swipe-card UI asks for the same pair every time a card is rendered.
/// Entries are keyed on both ids plus a fingerprint of every scored field,
/// so an edited profile never hits a stale entry.
#[derive(Clone)]
pub struct AnalysisCache {
    l1_cache: moka::future::Cache<String, MatchAnalysis>,
}

impl AnalysisCache {
    /// Create a new cache holding at most `capacity` analyses
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let l1_cache = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { l1_cache }
    }

    /// Return the cached analysis for this pair, computing it on a miss
    pub async fn get_or_analyze(&self, subject: &Profile, other: &Profile) -> MatchAnalysis {
        let key = CacheKey::analysis(&subject.id, &other.id, fingerprint(subject, other));

        if let Some(analysis) = self.l1_cache.get(&key).await {
            tracing::trace!("L1 cache hit: {}", key);
            return analysis;
        }

        tracing::trace!("Cache miss: {}", key);
        let analysis = analyze_compatibility(subject, other);
        self.l1_cache.insert(key, analysis.clone()).await;
        analysis
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a pair analysis
    pub fn analysis(subject_id: &str, other_id: &str, fingerprint: u64) -> String {
        format!("analysis:{}:{}:{:016x}", subject_id, other_id, fingerprint)
    }
}

/// Hash of every field the engine reads, for both sides of the pair
fn fingerprint(subject: &Profile, other: &Profile) -> u64 {
    let mut hasher = DefaultHasher::new();
    for profile in [subject, other] {
        profile.department.hash(&mut hasher);
        profile.major.hash(&mut hasher);
        profile.interests.hash(&mut hasher);
    }
    hasher.finish()
}
