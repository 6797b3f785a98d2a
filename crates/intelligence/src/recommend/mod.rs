//! Activity recommendations combining interest, skill and seniority signals.

mod explainer;
pub mod profile;
mod ranker;
mod scorer;

pub use explainer::{generate_explanation, summarize_recommendations, DEFAULT_REASON};
pub use profile::{NormalizedProfile, SENIOR_YEAR};
pub use ranker::{rank, rank_with};
pub use scorer::{score, tiebreak_noise, ActivityScorer, Scorer, SENIOR_CATEGORIES};

use crate::catalog::Catalog;
use crate::types::{Activity, CandidateActivity, Recommendation, StudentProfile};
use serde::{Deserialize, Serialize};

/// Number of recommendations returned when the caller does not ask for a count.
pub const DEFAULT_COUNT: usize = 6;

/// Breakdown of an affinity score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Weighted tag overlap with the student's interests.
    pub interest_score: f64,
    /// Weighted tag overlap with the student's skills.
    pub skill_score: f64,
    /// Bonus for senior students on internships and projects.
    pub seniority_score: f64,
    /// Deterministic per-title offset separating otherwise equal scores.
    pub tiebreak: f64,
}

impl ScoreBreakdown {
    /// Calculate total score.
    ///
    /// Weighted signals are summed before the tie-break is added.
    pub fn total(&self) -> f64 {
        (self.interest_score + self.skill_score + self.seniority_score) + self.tiebreak
    }
}

/// Signals that contribute to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationSignal {
    /// Candidate tags overlap the student's interests.
    InterestMatch {
        /// Matched tags, lowercased and sorted.
        matched: Vec<String>,
    },
    /// Candidate tags overlap the student's skills.
    SkillMatch {
        /// Matched tags, lowercased and sorted.
        matched: Vec<String>,
    },
    /// Senior student and a portfolio-building category.
    Seniority,
}

impl RecommendationSignal {
    /// Get a short label for this signal.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InterestMatch { .. } => "interest-match",
            Self::SkillMatch { .. } => "skill-match",
            Self::Seniority => "seniority",
        }
    }
}

/// A catalog entry paired with its score for one profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Signals that fired, in explanation order.
    pub signals: Vec<RecommendationSignal>,
    pub candidate: &'a CandidateActivity,
}

impl ScoredCandidate<'_> {
    /// Builds the client-facing record with its reason string.
    pub fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            category: self.candidate.category.clone(),
            title: self.candidate.title.clone(),
            tags: self.candidate.tags.clone(),
            description: self.candidate.description.clone(),
            reason: generate_explanation(&self.signals),
        }
    }
}

/// Recommends up to `count` catalog activities for a student.
///
/// Activities whose title (ignoring case) appears in `history` are never
/// suggested. Identical inputs always produce identical output.
pub fn recommend(
    catalog: &Catalog,
    profile: &StudentProfile,
    history: &[Activity],
    count: usize,
) -> Vec<Recommendation> {
    let normalized = NormalizedProfile::new(profile, history);
    let ranked = rank(catalog, &normalized, count);

    tracing::debug!(
        target: "learnavia::recommend",
        catalog = catalog.len(),
        completed = normalized.completed().len(),
        requested = count,
        returned = ranked.len(),
        "Ranked activity recommendations"
    );

    ranked.iter().map(ScoredCandidate::to_recommendation).collect()
}
