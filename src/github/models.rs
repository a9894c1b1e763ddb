use serde::{Deserialize, Serialize};

/// A repository as returned by the `/search/repositories` endpoint.
/// Only the fields the widget renders are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub watchers: u64,
}

/// A user account as returned by the `/search/users` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: u64,
    pub login: String,
    pub html_url: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub gravatar_url: Option<String>,
}

impl UserAccount {
    /// Gravatar takes precedence when the API provides one.
    pub fn avatar(&self) -> Option<&str> {
        self.gravatar_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or(self.avatar_url.as_deref())
    }
}

/// First page of a search response: `{total_count, incomplete_results, items}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage<T> {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// One row of the merged result list. The variant is assigned from the
/// endpoint that produced the item, never inferred from field shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SearchEntry {
    Repo(Repository),
    User(UserAccount),
}

impl SearchEntry {
    /// Case-insensitive ordering key: repository name or user login.
    pub fn sort_key(&self) -> String {
        match self {
            SearchEntry::Repo(repo) => repo.name.to_lowercase(),
            SearchEntry::User(user) => user.login.to_lowercase(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SearchEntry::Repo(repo) => &repo.name,
            SearchEntry::User(user) => &user.login,
        }
    }

    pub fn html_url(&self) -> &str {
        match self {
            SearchEntry::Repo(repo) => &repo.html_url,
            SearchEntry::User(user) => &user.html_url,
        }
    }
}
