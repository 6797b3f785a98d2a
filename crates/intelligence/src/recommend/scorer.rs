//! Multi-signal affinity scoring.

use super::profile::{lowercase_set, NormalizedProfile};
use super::{RecommendationSignal, ScoreBreakdown, ScoredCandidate};
use crate::types::CandidateActivity;
use std::collections::HashSet;

/// Weights for different recommendation signals.
const INTEREST_WEIGHT: f64 = 3.0;
const SKILL_WEIGHT: f64 = 2.0;
const SENIORITY_BONUS: f64 = 2.0;

/// Categories that earn the seniority bonus.
pub const SENIOR_CATEGORIES: [&str; 2] = ["internship", "project"];

/// Trait for computing recommendation scores.
pub trait Scorer {
    /// Score one catalog entry against a normalized profile.
    fn score<'a>(
        &self,
        candidate: &'a CandidateActivity,
        profile: &NormalizedProfile,
    ) -> ScoredCandidate<'a>;
}

/// The canonical scorer: interest overlap, skill overlap, seniority, tie-break.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActivityScorer;

impl ActivityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Collects the signals that fire for `candidate`, in explanation order.
    pub fn signals(
        &self,
        candidate: &CandidateActivity,
        profile: &NormalizedProfile,
    ) -> Vec<RecommendationSignal> {
        let tags = lowercase_set(&candidate.tags);
        let mut signals = Vec::new();

        let interests = sorted_overlap(&tags, profile.interests());
        if !interests.is_empty() {
            signals.push(RecommendationSignal::InterestMatch { matched: interests });
        }

        let skills = sorted_overlap(&tags, profile.skills());
        if !skills.is_empty() {
            signals.push(RecommendationSignal::SkillMatch { matched: skills });
        }

        if profile.is_senior() && SENIOR_CATEGORIES.contains(&candidate.category.as_str()) {
            signals.push(RecommendationSignal::Seniority);
        }

        signals
    }
}

impl Scorer for ActivityScorer {
    fn score<'a>(
        &self,
        candidate: &'a CandidateActivity,
        profile: &NormalizedProfile,
    ) -> ScoredCandidate<'a> {
        let signals = self.signals(candidate, profile);
        let mut breakdown = ScoreBreakdown {
            tiebreak: tiebreak_noise(&candidate.title),
            ..ScoreBreakdown::default()
        };

        for signal in &signals {
            match signal {
                RecommendationSignal::InterestMatch { matched } => {
                    breakdown.interest_score += INTEREST_WEIGHT * matched.len() as f64;
                }
                RecommendationSignal::SkillMatch { matched } => {
                    breakdown.skill_score += SKILL_WEIGHT * matched.len() as f64;
                }
                RecommendationSignal::Seniority => {
                    breakdown.seniority_score += SENIORITY_BONUS;
                }
            }
        }

        ScoredCandidate {
            score: breakdown.total(),
            breakdown,
            signals,
            candidate,
        }
    }
}

/// Affinity score of one candidate for one profile.
pub fn score(candidate: &CandidateActivity, profile: &NormalizedProfile) -> f64 {
    ActivityScorer.score(candidate, profile).score
}

/// Fixed offset in `[0.0, 0.4]` derived from the title's code points.
///
/// `(sum of code points mod 5) / 10`. Not random: the same title always
/// yields the same value.
pub fn tiebreak_noise(title: &str) -> f64 {
    let sum: u64 = title.chars().map(|c| u64::from(u32::from(c))).sum();
    (sum % 5) as f64 / 10.0
}

fn sorted_overlap(tags: &HashSet<String>, wanted: &HashSet<String>) -> Vec<String> {
    let mut matched: Vec<String> = tags.intersection(wanted).cloned().collect();
    matched.sort();
    matched
}
