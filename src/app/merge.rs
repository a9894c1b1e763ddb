use crate::github::models::{Repository, SearchEntry, UserAccount};

/// Combine the two slot results into one ordered list: repositories
/// first, then users, stable-sorted case-insensitively by name/login.
/// Ties keep that source order, so the output is a total function of
/// the inputs.
pub fn merge_results(repos: &[Repository], users: &[UserAccount]) -> Vec<SearchEntry> {
    let mut merged: Vec<SearchEntry> = repos
        .iter()
        .cloned()
        .map(SearchEntry::Repo)
        .chain(users.iter().cloned().map(SearchEntry::User))
        .collect();

    merged.sort_by_cached_key(|entry| entry.sort_key());
    merged
}
