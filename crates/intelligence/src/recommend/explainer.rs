//! Generate human-readable explanations for recommendations.

use super::RecommendationSignal;

/// Reason given when no signal fired.
pub const DEFAULT_REASON: &str = "recommended";

/// Generate a human-readable explanation from recommendation signals.
pub fn generate_explanation(signals: &[RecommendationSignal]) -> String {
    if signals.is_empty() {
        return DEFAULT_REASON.to_string();
    }

    signals
        .iter()
        .map(|signal| match signal {
            RecommendationSignal::InterestMatch { .. } => "matches your interests",
            RecommendationSignal::SkillMatch { .. } => "uses your skills",
            RecommendationSignal::Seniority => "good for final-year portfolio",
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Generate a summary of a recommendation result set.
pub fn summarize_recommendations(count: usize, completed: usize) -> String {
    let mut parts = Vec::new();

    parts.push(match count {
        1 => "Found 1 recommendation".to_string(),
        n => format!("Found {n} recommendations"),
    });

    if completed > 0 {
        parts.push(format!("skipping {completed} completed activities"));
    }

    parts.join(", ")
}
