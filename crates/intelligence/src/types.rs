//! Common types shared across intelligence modules.
//!
//! Field names follow the JSON shape the portfolio frontend already sends:
//! an activity's category travels as `type`, and list fields may be absent
//! or `null`.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` the same as a missing field.
///
/// Every call builds a fresh default, so no two requests ever share a list.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn default_status() -> Option<String> {
    Some("approved".to_string())
}

/// An activity the student has already undertaken.
///
/// Only `title` matters to the recommender; the rest is carried so the same
/// record can feed the badge tally and any downstream rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Opaque identifier assigned by the activity store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-form category such as `workshop` or `internship`.
    #[serde(rename = "type")]
    pub category: String,
    /// Display title; its lowercased form is the dedup key.
    pub title: String,
    /// Date as supplied by the client (ISO date or free text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_url: Option<String>,
    /// Review status; defaults to `approved` when the client omits it.
    #[serde(default = "default_status")]
    pub status: Option<String>,
}

impl Activity {
    /// Creates an activity with just a category and title.
    pub fn new(category: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: None,
            category: category.into(),
            title: title.into(),
            date: None,
            description: None,
            tags: Vec::new(),
            proof_url: None,
            status: default_status(),
        }
    }
}

/// A student's portfolio profile.
///
/// The engine reads `skills`, `interests` and `year`; the remaining fields
/// describe the student for portfolio output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Year of study (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

impl StudentProfile {
    /// Creates a profile holding only the fields the recommender reads.
    pub fn new(
        skills: impl IntoIterator<Item = impl Into<String>>,
        interests: impl IntoIterator<Item = impl Into<String>>,
        year: Option<i64>,
    ) -> Self {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
            interests: interests.into_iter().map(Into::into).collect(),
            year,
            ..Self::default()
        }
    }
}

/// One entry of the candidate catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateActivity {
    #[serde(rename = "type")]
    pub category: String,
    pub title: String,
    /// Tags in catalog order; compared case-insensitively as a set.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "desc")]
    pub description: String,
}

impl CandidateActivity {
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            description: description.into(),
        }
    }
}

/// A ranked suggestion returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub category: String,
    pub title: String,
    pub tags: Vec<String>,
    pub description: String,
    /// Human-readable justification, e.g. `matches your interests; uses your skills`.
    pub reason: String,
}
