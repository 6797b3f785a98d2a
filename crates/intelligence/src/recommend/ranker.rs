//! Filtering, ordering and truncation of scored candidates.

use super::profile::NormalizedProfile;
use super::scorer::{ActivityScorer, Scorer};
use super::ScoredCandidate;
use crate::catalog::Catalog;

/// Ranks the catalog for `profile` with the canonical scorer.
pub fn rank<'a>(
    catalog: &'a Catalog,
    profile: &NormalizedProfile,
    count: usize,
) -> Vec<ScoredCandidate<'a>> {
    rank_with(&ActivityScorer, catalog, profile, count)
}

/// Ranks the catalog for `profile`, returning at most `count` entries.
///
/// Completed activities are skipped before scoring. Results are ordered by
/// descending score; equal scores keep catalog order.
pub fn rank_with<'a, S: Scorer + ?Sized>(
    scorer: &S,
    catalog: &'a Catalog,
    profile: &NormalizedProfile,
    count: usize,
) -> Vec<ScoredCandidate<'a>> {
    if count == 0 {
        return Vec::new();
    }

    let mut scored: Vec<ScoredCandidate<'a>> = catalog
        .iter()
        .filter(|c| !profile.has_completed(&c.title))
        .map(|c| scorer.score(c, profile))
        .collect();

    // `sort_by` is stable, which keeps catalog order among ties.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(count);
    scored
}
