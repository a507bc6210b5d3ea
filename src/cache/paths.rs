// Cache path utilities.
// Locates the single cache file under the platform cache directory.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/folio on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the cached project list. The v1 suffix is the only schema
/// versioning the cache carries.
pub fn projects_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("repos_v1.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_path() {
        let path = projects_path().unwrap();
        assert!(path.ends_with("repos_v1.json"));
    }
}
