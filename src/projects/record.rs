// Canonical project records.
// The normalized shape every data source resolves to before rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::github::{Owner, Repository};

/// A project as the page renders it, independent of which source produced
/// it. The same shape round-trips through the static project file and the
/// cache, so absent fields deserialize to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// The `owner/name` slug the record was resolved from.
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub html_url: String,
    #[serde(default = "unknown_language")]
    pub language: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub topics: Vec<String>,
}

fn unknown_language() -> String {
    "Unknown".to_string()
}

impl ProjectRecord {
    /// Normalize a raw API repository into a record.
    pub fn from_repo(slug: &str, repo: Repository) -> Self {
        Self {
            slug: slug.to_string(),
            name: repo.name,
            description: repo.description.unwrap_or_default(),
            html_url: repo.html_url,
            language: repo.language.unwrap_or_else(unknown_language),
            stargazers_count: repo.stargazers_count,
            // The API reports a missing homepage as an empty string
            homepage: repo.homepage.filter(|h| !h.is_empty()),
            owner: repo.owner,
            pushed_at: repo.pushed_at,
            topics: repo.topics,
        }
    }
}

/// Normalize a batch of per-slug fetch outcomes, dropping failures while
/// preserving the configured order.
pub fn normalize_batch(results: Vec<(&str, Option<Repository>)>) -> Vec<ProjectRecord> {
    results
        .into_iter()
        .filter_map(|(slug, repo)| repo.map(|r| ProjectRecord::from_repo(slug, r)))
        .collect()
}
