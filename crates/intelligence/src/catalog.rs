//! The candidate activity catalog.
//!
//! A catalog is loaded once at startup and shared read-only between requests.
//! Its order is significant: ranking falls back to it when scores tie.
//!
//! ## File formats
//!
//! TOML, one `[[activity]]` table per entry:
//!
//! ```toml
//! [[activity]]
//! type = "workshop"
//! title = "Advanced ML Workshop"
//! tags = ["ml", "python", "projects"]
//! description = "Hands-on ML workshop"
//! ```
//!
//! JSON, either a bare array of entries or `{"activities": [...]}`. The
//! description may also be spelled `desc`.

use crate::types::CandidateActivity;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog file was not valid TOML.
    #[error("invalid TOML catalog {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// The catalog file was not valid JSON.
    #[error("invalid JSON catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The file extension is neither `.toml` nor `.json`.
    #[error("unsupported catalog format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
    /// The catalog file parsed but lists no activities.
    #[error("catalog {0} lists no activities")]
    Empty(PathBuf),
    /// An entry has a blank title.
    #[error("catalog entry #{index} has an empty title")]
    EmptyTitle { index: usize },
    /// Two entries share a title, ignoring case.
    #[error("duplicate catalog title '{title}'")]
    DuplicateTitle { title: String },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCatalog {
    #[serde(default)]
    activity: Vec<CandidateActivity>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<CandidateActivity>),
    Wrapped { activities: Vec<CandidateActivity> },
}

/// Immutable, ordered collection of candidate activities.
///
/// Cloning is cheap; all clones share the same entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Arc<[CandidateActivity]>,
}

impl Catalog {
    /// Validates and wraps a list of entries, keeping their order.
    pub fn new(entries: Vec<CandidateActivity>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let title = entry.title.trim();
            if title.is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }
            if !seen.insert(title.to_lowercase()) {
                return Err(CatalogError::DuplicateTitle {
                    title: entry.title.clone(),
                });
            }
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    /// The default pool of eight activities.
    pub fn builtin() -> Self {
        let entries = vec![
            CandidateActivity::new(
                "workshop",
                "Advanced ML Workshop",
                ["ml", "python", "projects"],
                "Hands-on ML workshop",
            ),
            CandidateActivity::new(
                "internship",
                "Research Internship (CS Dept)",
                ["research", "paper", "nlp"],
                "Short research internship",
            ),
            CandidateActivity::new(
                "project",
                "Open-source Contribution Sprint",
                ["github", "collab", "backend"],
                "Contribute to OSS",
            ),
            CandidateActivity::new(
                "cert",
                "Cloud Certification (Foundations)",
                ["cloud", "aws", "gcp"],
                "Entry cloud cert",
            ),
            CandidateActivity::new(
                "competition",
                "Hackathon: 48-hour",
                ["hackathon", "team", "product"],
                "Build prototype",
            ),
            CandidateActivity::new(
                "course",
                "Advanced Security Course",
                ["security", "network", "crypto"],
                "Security fundamentals",
            ),
            CandidateActivity::new(
                "workshop",
                "NLP Hands-on",
                ["nlp", "transformers"],
                "NLP fine-tuning",
            ),
            CandidateActivity::new(
                "volunteer",
                "Teaching Assistant",
                ["teaching", "mentor"],
                "TA for undergrads",
            ),
        ];
        Self {
            entries: entries.into(),
        }
    }

    /// Loads a catalog from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&Path, &str) -> Result<Vec<CandidateActivity>, CatalogError> =
            match extension.as_deref() {
                Some("toml") => parse_toml,
                Some("json") => parse_json,
                _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
            };

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries = parse(path, &content)?;
        if entries.is_empty() {
            return Err(CatalogError::Empty(path.to_path_buf()));
        }
        let catalog = Self::new(entries)?;

        tracing::debug!(
            target: "learnavia::catalog",
            path = %path.display(),
            entries = catalog.len(),
            "Loaded catalog file"
        );

        Ok(catalog)
    }

    /// Loads from `path` when given, otherwise returns the built-in pool.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn entries(&self) -> &[CandidateActivity] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidateActivity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CandidateActivity;
    type IntoIter = std::slice::Iter<'a, CandidateActivity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn parse_toml(path: &Path, content: &str) -> Result<Vec<CandidateActivity>, CatalogError> {
    toml::from_str::<TomlCatalog>(content)
        .map(|c| c.activity)
        .map_err(|source| CatalogError::Toml {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_json(path: &Path, content: &str) -> Result<Vec<CandidateActivity>, CatalogError> {
    serde_json::from_str::<JsonCatalog>(content)
        .map(|c| match c {
            JsonCatalog::List(entries) | JsonCatalog::Wrapped { activities: entries } => entries,
        })
        .map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })
}
