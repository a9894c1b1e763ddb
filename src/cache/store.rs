use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// On-disk result cache. Entries older than the TTL are treated as
/// missing, which is what bounds how long a repeated query is served
/// without a network call.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
    ttl_secs: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    fetched_at: chrono::DateTime<chrono::Utc>,
    data: T,
}

impl CacheStore {
    pub fn new(dir: PathBuf, ttl_secs: u64) -> Self {
        Self { dir, ttl_secs }
    }

    fn path_for_key(&self, key: &str) -> PathBuf {
        // Keys embed raw query strings; keep only filename-safe chars.
        let safe_key: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{safe_key}.json"))
    }

    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let path = self.path_for_key(key);
        let content = std::fs::read_to_string(&path).ok()?;

        let entry: CacheEntry<T> = match serde_json::from_str(&content) {
            Ok(e) => e,
            Err(e) => {
                warn!(key = key, error = %e, "Failed to parse cache entry");
                return None;
            }
        };

        let age = chrono::Utc::now()
            .signed_duration_since(entry.fetched_at)
            .num_seconds();

        if age < 0 || age as u64 > self.ttl_secs {
            debug!(key = key, age = age, "Cache entry expired");
            return None;
        }

        debug!(key = key, age = age, "Cache hit");
        Some(entry.data)
    }

    pub fn set<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create cache directory: {}", self.dir.display()))?;

        let entry = CacheEntry {
            fetched_at: chrono::Utc::now(),
            data,
        };

        let content = serde_json::to_string(&entry).context("Failed to serialize cache entry")?;
        let path = self.path_for_key(key);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write cache file: {}", path.display()))?;

        debug!(key = key, "Cache set");
        Ok(())
    }

    pub fn invalidate_all(&self) -> Result<()> {
        if self.dir.exists() {
            for entry in std::fs::read_dir(&self.dir)? {
                let path = entry?.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    std::fs::remove_file(&path)?;
                }
            }
            debug!("All cache entries invalidated");
        }
        Ok(())
    }
}
