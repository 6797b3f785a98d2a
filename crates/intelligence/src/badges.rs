//! Per-category tallies of a student's activities.

use crate::types::Activity;
use serde::{Deserialize, Serialize};

/// How many activities a student has in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Title-cased category, e.g. `Workshop`.
    pub label: String,
    pub count: usize,
}

/// Counts activities per category, in the order categories first appear.
pub fn tally_badges(history: &[Activity]) -> Vec<Badge> {
    let mut badges: Vec<(&str, usize)> = Vec::new();
    for activity in history {
        match badges.iter_mut().find(|(c, _)| *c == activity.category) {
            Some((_, count)) => *count += 1,
            None => badges.push((activity.category.as_str(), 1)),
        }
    }

    badges
        .into_iter()
        .map(|(category, count)| Badge {
            label: title_case(category),
            count,
        })
        .collect()
}

/// Upper-cases the first letter of each word and lower-cases the rest.
///
/// A word starts after any non-alphabetic character, so `open-source`
/// becomes `Open-Source`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
