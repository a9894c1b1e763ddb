use ghseek::cache::CacheStore;
use ghseek::github::models::{Repository, SearchPage};
use tempfile::TempDir;

#[test]
fn test_set_and_get() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::new(dir.path().to_path_buf(), 300);

    let data = vec!["hello".to_string(), "world".to_string()];
    store.set("repos rust", &data).unwrap();

    let result: Option<Vec<String>> = store.get("repos rust");
    assert_eq!(result, Some(data));
}

#[test]
fn test_get_missing_key_returns_none() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::new(dir.path().to_path_buf(), 300);

    let result: Option<Vec<String>> = store.get("repos nothing");
    assert_eq!(result, None);
}

#[test]
fn test_search_page_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::new(dir.path().to_path_buf(), 300);

    let page = SearchPage {
        total_count: 1,
        incomplete_results: false,
        items: vec![Repository {
            id: 7,
            name: "ripgrep".into(),
            full_name: "BurntSushi/ripgrep".into(),
            html_url: "https://github.com/BurntSushi/ripgrep".into(),
            description: Some("recursively search".into()),
            stargazers_count: 40000,
            watchers: 40000,
        }],
    };
    store.set("repos ripgrep", &page).unwrap();

    let cached: SearchPage<Repository> = store.get("repos ripgrep").unwrap();
    assert_eq!(cached.total_count, 1);
    assert_eq!(cached.items[0].name, "ripgrep");
    assert_eq!(cached.items[0].id, 7);
}

#[test]
fn test_expired_entry_returns_none() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::new(dir.path().to_path_buf(), 0);

    store.set("key", &42u32).unwrap();

    // age == ttl == 0 still counts as fresh; wait until age > 0.
    std::thread::sleep(std::time::Duration::from_millis(1100));

    let result: Option<u32> = store.get("key");
    assert_eq!(result, None);
}

#[test]
fn test_fresh_entry_with_short_ttl() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::new(dir.path().to_path_buf(), 60);

    store.set("key", &"value".to_string()).unwrap();

    let result: Option<String> = store.get("key");
    assert_eq!(result, Some("value".to_string()));
}

#[test]
fn test_query_keys_are_sanitized_for_the_filesystem() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::new(dir.path().to_path_buf(), 300);

    // Raw queries carry spaces, slashes and unicode.
    let key = "repos makers den / sök";
    store.set(key, &"data".to_string()).unwrap();
    let result: Option<String> = store.get(key);
    assert_eq!(result, Some("data".to_string()));

    for entry in std::fs::read_dir(dir.path()).unwrap() {
        let name = entry.unwrap().file_name().into_string().unwrap();
        assert!(
            name.chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')),
            "unexpected char in cache filename: {name}"
        );
    }
}

#[test]
fn test_distinct_queries_get_distinct_entries() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::new(dir.path().to_path_buf(), 300);

    store.set("repos rust", &1u32).unwrap();
    store.set("users rust", &2u32).unwrap();

    assert_eq!(store.get::<u32>("repos rust"), Some(1));
    assert_eq!(store.get::<u32>("users rust"), Some(2));
}

#[test]
fn test_invalidate_all() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::new(dir.path().to_path_buf(), 300);

    store.set("a", &1u32).unwrap();
    store.set("b", &2u32).unwrap();

    store.invalidate_all().unwrap();

    assert_eq!(store.get::<u32>("a"), None);
    assert_eq!(store.get::<u32>("b"), None);
}

#[test]
fn test_invalidate_all_on_empty_dir() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::new(dir.path().to_path_buf(), 300);

    store.invalidate_all().unwrap();
}

#[test]
fn test_corrupted_cache_file_returns_none() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::new(dir.path().to_path_buf(), 300);

    let path = dir.path().join("bad_key.json");
    std::fs::write(&path, "not valid json!!!").unwrap();

    let result: Option<String> = store.get("bad_key");
    assert_eq!(result, None);
}

#[test]
fn test_creates_cache_dir_on_set() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("sub").join("dir");
    let store = CacheStore::new(nested.clone(), 300);

    assert!(!nested.exists());
    store.set("key", &"val".to_string()).unwrap();
    assert!(nested.exists());
}
