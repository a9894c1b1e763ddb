use ghseek::app::merge::merge_results;
use ghseek::github::models::{Repository, SearchEntry, UserAccount};

fn make_repo(id: u64, name: &str) -> Repository {
    Repository {
        id,
        name: name.into(),
        full_name: format!("owner/{}", name),
        html_url: format!("https://github.com/owner/{}", name),
        description: None,
        stargazers_count: 0,
        watchers: 0,
    }
}

fn make_user(id: u64, login: &str) -> UserAccount {
    UserAccount {
        id,
        login: login.into(),
        html_url: format!("https://github.com/{}", login),
        avatar_url: None,
        gravatar_url: None,
    }
}

fn labels(entries: &[SearchEntry]) -> Vec<String> {
    entries.iter().map(|e| e.label().to_string()).collect()
}

#[test]
fn test_merged_length_is_sum_of_inputs() {
    let repos = vec![make_repo(1, "a"), make_repo(2, "b")];
    let users = vec![make_user(3, "c"), make_user(4, "d"), make_user(5, "e")];
    let merged = merge_results(&repos, &users);
    assert_eq!(merged.len(), 5);
}

#[test]
fn test_sorted_case_insensitively_across_kinds() {
    let repos = vec![make_repo(1, "Zebra"), make_repo(2, "apricot")];
    let users = vec![make_user(3, "MANGO"), make_user(4, "banana")];
    let merged = merge_results(&repos, &users);
    assert_eq!(labels(&merged), vec!["apricot", "banana", "MANGO", "Zebra"]);
}

#[test]
fn test_equal_keys_keep_repos_before_users() {
    // Stable sort: equal keys stay in concatenation order.
    let repos = vec![make_repo(1, "alpha")];
    let users = vec![make_user(2, "Alpha")];
    let merged = merge_results(&repos, &users);
    assert!(matches!(merged[0], SearchEntry::Repo(_)));
    assert!(matches!(merged[1], SearchEntry::User(_)));
}

#[test]
fn test_equal_repo_names_keep_input_order() {
    let repos = vec![make_repo(10, "dup"), make_repo(20, "DUP")];
    let merged = merge_results(&repos, &[]);
    let ids: Vec<u64> = merged
        .iter()
        .map(|e| match e {
            SearchEntry::Repo(r) => r.id,
            SearchEntry::User(u) => u.id,
        })
        .collect();
    assert_eq!(ids, vec![10, 20]);
}

#[test]
fn test_either_input_may_be_empty() {
    let repos = vec![make_repo(1, "only")];
    assert_eq!(merge_results(&repos, &[]).len(), 1);
    let users = vec![make_user(2, "solo")];
    assert_eq!(merge_results(&[], &users).len(), 1);
    assert!(merge_results(&[], &[]).is_empty());
}

#[test]
fn test_merge_is_deterministic() {
    let repos = vec![make_repo(1, "beta"), make_repo(2, "Beta"), make_repo(3, "alpha")];
    let users = vec![make_user(4, "beta"), make_user(5, "Alpha")];
    let first = merge_results(&repos, &users);
    let second = merge_results(&repos, &users);
    assert_eq!(labels(&first), labels(&second));
}
