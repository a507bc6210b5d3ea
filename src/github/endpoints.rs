// GitHub API endpoint functions.
// Provides typed methods for fetching data from the GitHub REST API.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::Repository;

impl GitHubClient {
    /// Get a repository by its `owner/name` slug.
    pub async fn get_repo(&self, slug: &str) -> Result<Repository> {
        let response = self.get(&format!("/repos/{}", slug)).await?;
        let repository: Repository = response.json().await?;
        Ok(repository)
    }
}
