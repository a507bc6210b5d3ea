// GitHub API HTTP client.
// Handles authentication, rate limiting, and request/response processing.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{FolioError, Result};

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client. The token is optional; anonymous requests work
/// against public repositories at a lower rate limit.
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    /// Create a new GitHub client, authenticated when a token is given.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| FolioError::Other(e.to_string()))?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("folio-generator"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FolioError::Api)?;

        Ok(Self { client })
    }

    /// Create a client using the GITHUB_TOKEN environment variable if set.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN").ok();
        Self::new(token.as_deref())
    }

    /// Make a GET request to the GitHub API.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", GITHUB_API_BASE, endpoint);
        let response = self.client.get(&url).send().await.map_err(FolioError::Api)?;
        check_response(response).await
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(response),
        StatusCode::UNAUTHORIZED => Err(FolioError::Unauthorized),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(FolioError::NotFound(url))
        }
        StatusCode::FORBIDDEN => {
            // A 403 with no remaining quota is a rate limit, not a permission error
            if rate_limit_remaining(&response) == Some(0) {
                let reset_at = rate_limit_reset(&response)
                    .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(FolioError::RateLimited { reset_at })
            } else {
                Err(FolioError::Other(format!(
                    "Forbidden: {}",
                    response.text().await.unwrap_or_default()
                )))
            }
        }
        status => Err(FolioError::Other(format!(
            "HTTP {}: {}",
            status,
            response.text().await.unwrap_or_default()
        ))),
    }
}

/// Remaining request quota from response headers.
fn rate_limit_remaining(response: &Response) -> Option<u64> {
    response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// Rate limit reset time (epoch seconds) from response headers.
fn rate_limit_reset(response: &Response) -> Option<i64> {
    response
        .headers()
        .get("x-ratelimit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}
