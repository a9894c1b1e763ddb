use anyhow::{Context, Result, bail};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::models::{Repository, SearchPage, UserAccount};

/// Errors a single search slot can produce. Always slot-local: the
/// caller renders the message and keeps the other slot alive.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Api(String),
}

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
}

impl GithubClient {
    pub fn new(api_url: &str) -> Result<Self> {
        if !api_url.starts_with("https://") {
            bail!("GitHub API URL must use HTTPS: {}", api_url);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .user_agent("ghseek")
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn search<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &str,
        per_page: u32,
    ) -> Result<SearchPage<T>, SearchError> {
        let url = format!("{}/search/{}", self.api_url, endpoint);
        let resp = self
            .client
            .get(&url)
            .query(&[("per_page", per_page.to_string()), ("q", query.to_string())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body: serde_json::Value = resp.json().await.unwrap_or(serde_json::Value::Null);
            return Err(SearchError::Api(error_message_from_body(&body, status.as_u16())));
        }

        Ok(resp.json().await?)
    }

    pub async fn search_repositories(
        &self,
        query: &str,
        per_page: u32,
    ) -> Result<SearchPage<Repository>, SearchError> {
        let page: SearchPage<Repository> = self.search("repositories", query, per_page).await?;
        debug!(query = query, count = page.items.len(), "Repository search complete");
        Ok(page)
    }

    pub async fn search_users(
        &self,
        query: &str,
        per_page: u32,
    ) -> Result<SearchPage<UserAccount>, SearchError> {
        let page: SearchPage<UserAccount> = self.search("users", query, per_page).await?;
        debug!(query = query, count = page.items.len(), "User search complete");
        Ok(page)
    }
}

/// Extract the API's `message` field from an error body, falling back
/// to a generic message naming the status when it cannot be decoded.
pub fn error_message_from_body(body: &serde_json::Value, status: u16) -> String {
    body.get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("GitHub search returned HTTP {}", status))
}
