//! Extracurricular activity recommendations for student portfolios.
//!
//! This crate provides:
//! - The candidate activity catalog (built-in pool or loaded from TOML/JSON)
//! - Profile normalization against the student's activity history
//! - Affinity scoring, ranking and reason annotation
//! - Per-category badge tallies of past activities
//!
//! # Examples
//!
//! ```
//! use learnavia_intelligence::{recommend, Catalog, StudentProfile};
//!
//! let profile = StudentProfile::new(["python"], ["nlp"], Some(4));
//! let recs = recommend(&Catalog::builtin(), &profile, &[], 2);
//! assert_eq!(recs[0].title, "Research Internship (CS Dept)");
//! ```

#![deny(unsafe_code)]

pub mod badges;
pub mod catalog;
pub mod recommend;
pub mod types;

pub use badges::{tally_badges, title_case, Badge};
pub use catalog::{Catalog, CatalogError};
pub use recommend::{
    generate_explanation, rank, rank_with, recommend, score, summarize_recommendations,
    tiebreak_noise, ActivityScorer, NormalizedProfile, RecommendationSignal, ScoreBreakdown,
    ScoredCandidate, Scorer, DEFAULT_COUNT, DEFAULT_REASON,
};
pub use types::{Activity, CandidateActivity, Recommendation, StudentProfile};
