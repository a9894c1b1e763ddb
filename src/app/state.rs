use crate::app::merge::merge_results;
use crate::github::models::{Repository, SearchEntry, UserAccount};

/// The single thing the dropdown shows at any moment. Classification
/// is a strict priority chain so no two of these can be active at
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownView {
    TooShort,
    Spinner,
    Error,
    NoResults,
    Results,
}

#[derive(Debug)]
pub struct AppState {
    // Input
    pub search_query: String,
    pub debounced_query: String,
    /// Bumped whenever the debounced query changes; fetch completions
    /// carrying an older generation are discarded.
    pub generation: u64,

    // Slot data (None = never fetched)
    pub repositories: Option<Vec<Repository>>,
    pub users: Option<Vec<UserAccount>>,
    pub total_repositories: Option<u64>,
    pub total_users: Option<u64>,
    pub fetching_repos: bool,
    pub fetching_users: bool,
    pub error_repos: Option<String>,
    pub error_users: Option<String>,

    // Derived
    pub merged: Vec<SearchEntry>,

    // Dropdown / navigation
    pub dropdown_open: bool,
    pub focused: Option<usize>,

    pub min_chars: usize,
    pub show_stats: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(min_chars: usize) -> Self {
        Self {
            search_query: String::new(),
            debounced_query: String::new(),
            generation: 0,
            repositories: None,
            users: None,
            total_repositories: None,
            total_users: None,
            fetching_repos: false,
            fetching_users: false,
            error_repos: None,
            error_users: None,
            merged: Vec::new(),
            dropdown_open: false,
            focused: None,
            min_chars,
            show_stats: true,
            should_quit: false,
        }
    }

    /// Recompute the merged list from the current slot data. The list
    /// changes identity, so the focused row is dropped with it.
    pub fn rebuild_merged(&mut self) {
        let repos = self.repositories.as_deref().unwrap_or(&[]);
        let users = self.users.as_deref().unwrap_or(&[]);
        self.merged = merge_results(repos, users);
        self.focused = None;
    }

    /// Classify what the dropdown shows. Evaluated top to bottom; the
    /// first matching arm wins, so the states are mutually exclusive.
    /// A fetch start clears that slot's error, so fetching-with-error
    /// cannot arise.
    pub fn dropdown_view(&self) -> DropdownView {
        if self.debounced_query.chars().count() < self.min_chars {
            DropdownView::TooShort
        } else if self.fetching_repos || self.fetching_users {
            DropdownView::Spinner
        } else if self.error_repos.is_some() || self.error_users.is_some() {
            DropdownView::Error
        } else if self.merged.is_empty() {
            DropdownView::NoResults
        } else {
            DropdownView::Results
        }
    }

    /// First slot error to display, repositories taking precedence.
    pub fn display_error(&self) -> Option<&str> {
        self.error_repos.as_deref().or(self.error_users.as_deref())
    }

    pub fn focused_url(&self) -> Option<&str> {
        self.focused
            .and_then(|i| self.merged.get(i))
            .map(|entry| entry.html_url())
    }
}
