// Data source resolution.
// Tries each project source in priority order and short-circuits on the
// first one that yields records: static file, cache, live API, featured.

use std::fmt;
use std::fs;
use std::path::Path;

use futures::future::join_all;

use crate::cache;
use crate::config;
use crate::error::Result;
use crate::github::{GitHubClient, Repository};

use super::featured::featured_projects;
use super::record::{ProjectRecord, normalize_batch};

/// Which source tier produced the records. A render cycle uses exactly one
/// tier; stale and fresh data are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSource {
    StaticFile,
    Cache,
    LiveApi,
    Featured,
}

impl fmt::Display for ProjectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProjectSource::StaticFile => "static project file",
            ProjectSource::Cache => "local cache",
            ProjectSource::LiveApi => "live API",
            ProjectSource::Featured => "featured fallback",
        };
        f.write_str(name)
    }
}

/// The resolver's explicit return value: the records plus the tier they
/// came from.
#[derive(Debug)]
pub struct Resolved {
    pub records: Vec<ProjectRecord>,
    pub source: ProjectSource,
}

/// Resolve the project list for display.
pub async fn resolve(slugs: &[&str]) -> Result<Resolved> {
    let cache_path = cache::projects_path();
    if let Some(resolved) = resolve_local(
        Path::new(config::STATIC_PROJECTS_FILE),
        cache_path.as_deref(),
    ) {
        return Ok(resolved);
    }

    let client = GitHubClient::from_env()?;
    let records = fetch_batch(&client, slugs).await;
    if !records.is_empty() {
        // Best-effort: a cache that cannot be written just means a refetch
        if let Some(path) = cache_path {
            if let Err(e) = cache::write_cached(&path, &records) {
                log::debug!("cache write failed: {}", e);
            }
        }
        return Ok(Resolved {
            records,
            source: ProjectSource::LiveApi,
        });
    }

    let featured = featured_projects();
    if !featured.is_empty() {
        return Ok(Resolved {
            records: featured,
            source: ProjectSource::Featured,
        });
    }

    Ok(Resolved {
        records: Vec::new(),
        source: ProjectSource::LiveApi,
    })
}

/// Try the two offline tiers. Split out so tier precedence is testable
/// without a network.
fn resolve_local(static_path: &Path, cache_path: Option<&Path>) -> Option<Resolved> {
    if let Some(records) = from_static_file(static_path) {
        return Some(Resolved {
            records,
            source: ProjectSource::StaticFile,
        });
    }

    if let Some(records) = cache_path.and_then(from_cache) {
        return Some(Resolved {
            records,
            source: ProjectSource::Cache,
        });
    }

    None
}

/// Load the prebuilt project list, if present and non-empty.
fn from_static_file(path: &Path) -> Option<Vec<ProjectRecord>> {
    let contents = fs::read_to_string(path).ok()?;
    let records: Vec<ProjectRecord> = match serde_json::from_str(&contents) {
        Ok(records) => records,
        Err(e) => {
            log::debug!("static project list unusable: {}", e);
            return None;
        }
    };

    if records.is_empty() { None } else { Some(records) }
}

/// Read the cached project list, if fresh and non-empty.
fn from_cache(path: &Path) -> Option<Vec<ProjectRecord>> {
    let records: Vec<ProjectRecord> = match cache::read_if_valid(path, cache::CACHE_TTL) {
        Ok(Some(records)) => records,
        Ok(None) => return None,
        Err(e) => {
            log::debug!("cache read failed: {}", e);
            return None;
        }
    };

    if records.is_empty() { None } else { Some(records) }
}

/// Fetch all slugs concurrently. Each request fails independently; a
/// failed slug contributes nothing and the batch is never retried.
async fn fetch_batch(client: &GitHubClient, slugs: &[&str]) -> Vec<ProjectRecord> {
    let fetches = slugs.iter().map(|slug| async move {
        match client.get_repo(slug).await {
            Ok(repo) => Some(repo),
            Err(e) => {
                log::warn!("fetch failed for {}: {}", slug, e);
                None
            }
        }
    });

    let results: Vec<Option<Repository>> = join_all(fetches).await;
    normalize_batch(slugs.iter().copied().zip(results).collect())
}
