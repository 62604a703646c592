use std::collections::HashSet;

use crate::models::Profile;

/// Whether `candidate` was already swiped, matched, or blocked by the viewer
#[inline]
pub fn is_ignored(candidate: &Profile, ignored_ids: &HashSet<String>) -> bool {
    ignored_ids.contains(&candidate.id)
}

/// Both sides must fall within each other's gender preference
#[inline]
pub fn matches_gender_preferences(viewer: &Profile, candidate: &Profile) -> bool {
    viewer.interested_in.accepts(candidate.gender)
        && candidate.interested_in.accepts(viewer.gender)
}

/// Check if a candidate may appear in the viewer's discovery feed
#[inline]
pub fn is_eligible(viewer: &Profile, candidate: &Profile, ignored_ids: &HashSet<String>) -> bool {
    // Never show the viewer to themselves
    if candidate.id == viewer.id {
        return false;
    }

    if is_ignored(candidate, ignored_ids) {
        return false;
    }

    matches_gender_preferences(viewer, candidate)
}
