//! Case-folded, set-based view of a profile and its history.

use crate::types::{Activity, StudentProfile};
use std::collections::HashSet;

/// Year of study from which seniority signals apply.
pub const SENIOR_YEAR: i64 = 3;

/// Lowercased interests, skills and completed titles for one request.
///
/// Built once per request and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedProfile {
    interests: HashSet<String>,
    skills: HashSet<String>,
    completed: HashSet<String>,
    year: Option<i64>,
}

impl NormalizedProfile {
    /// Normalizes `profile` against the student's activity `history`.
    pub fn new(profile: &StudentProfile, history: &[Activity]) -> Self {
        Self {
            interests: lowercase_set(&profile.interests),
            skills: lowercase_set(&profile.skills),
            completed: history.iter().map(|a| a.title.to_lowercase()).collect(),
            year: profile.year,
        }
    }

    pub fn interests(&self) -> &HashSet<String> {
        &self.interests
    }

    pub fn skills(&self) -> &HashSet<String> {
        &self.skills
    }

    /// Lowercased titles the student has already done.
    pub fn completed(&self) -> &HashSet<String> {
        &self.completed
    }

    pub fn year(&self) -> Option<i64> {
        self.year
    }

    /// True when `title` matches a completed activity, ignoring case.
    pub fn has_completed(&self, title: &str) -> bool {
        self.completed.contains(&title.to_lowercase())
    }

    /// True for students in their third year or later.
    pub fn is_senior(&self) -> bool {
        self.year.is_some_and(|y| y >= SENIOR_YEAR)
    }
}

pub(crate) fn lowercase_set(values: &[String]) -> HashSet<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}
