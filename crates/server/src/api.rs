//! Request and response bodies shared by the HTTP service and the CLI.

use learnavia_intelligence::{
    recommend, summarize_recommendations, tally_badges, Activity, Badge, Catalog,
    NormalizedProfile, Recommendation, StudentProfile, DEFAULT_COUNT,
};
use serde::{Deserialize, Serialize};

/// Body of `POST /recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub profile: StudentProfile,
    /// Activities already on the student's record; `null` means none.
    #[serde(default)]
    pub activities: Option<Vec<Activity>>,
    /// Requested number of suggestions; `null` or absent means the default.
    #[serde(default)]
    pub num_recs: Option<i64>,
}

impl RecommendationRequest {
    /// Number of recommendations to return.
    pub fn count(&self) -> usize {
        requested_count(self.num_recs)
    }

    fn history(&self) -> &[Activity] {
        self.activities.as_deref().unwrap_or_default()
    }

    /// Number of `catalog` entries excluded because the student already did them.
    pub fn skipped(&self, catalog: &Catalog) -> usize {
        let profile = NormalizedProfile::new(&self.profile, self.history());
        catalog
            .iter()
            .filter(|c| profile.has_completed(&c.title))
            .count()
    }

    /// Runs the engine against `catalog`.
    pub fn respond(&self, catalog: &Catalog) -> RecommendationResponse {
        let recommendations = recommend(catalog, &self.profile, self.history(), self.count());
        let summary = summarize_recommendations(recommendations.len(), self.skipped(catalog));

        tracing::info!(
            target: "learnavia::recommend",
            summary = %summary,
            "Served recommendations"
        );

        RecommendationResponse { recommendations }
    }
}

/// Maps the wire count onto the engine's: absent means the default and
/// anything below one means an empty result.
pub fn requested_count(num_recs: Option<i64>) -> usize {
    match num_recs {
        None => DEFAULT_COUNT,
        Some(n) => usize::try_from(n).unwrap_or(0),
    }
}

/// Body returned by `POST /recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Body of `POST /badges`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BadgeRequest {
    #[serde(default)]
    pub activities: Option<Vec<Activity>>,
}

impl BadgeRequest {
    pub fn respond(&self) -> BadgeResponse {
        BadgeResponse {
            badges: tally_badges(self.activities.as_deref().unwrap_or_default()),
        }
    }
}

/// Body returned by `POST /badges`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeResponse {
    pub badges: Vec<Badge>,
}

/// Body returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current UTC time, RFC 3339.
    pub time: String,
}
