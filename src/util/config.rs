use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Queries shorter than this never reach the network.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_stats: bool,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_min_chars() -> usize {
    3
}
fn default_debounce_ms() -> u64 {
    500
}
fn default_per_page() -> u32 {
    50
}
fn default_cache_ttl() -> u64 {
    300
}
fn default_true() -> bool {
    true
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_chars: default_min_chars(),
            debounce_ms: default_debounce_ms(),
            per_page: default_per_page(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl(),
            dir: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_stats: default_true(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: AppConfig =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            return Ok(config);
        }

        // Search candidate paths in order
        let mut candidates = Vec::new();

        // 1. ~/.config/ghseek/config.toml (standard XDG on all platforms)
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/ghseek/config.toml"));
        }

        // 2. Platform-specific path from `directories` crate
        //    (macOS: ~/Library/Application Support/ghseek/)
        if let Some(proj_dirs) = ProjectDirs::from("", "", "ghseek") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                let content = std::fs::read_to_string(config_path).with_context(|| {
                    format!("Failed to read config file: {}", config_path.display())
                })?;
                let config: AppConfig =
                    toml::from_str(&content).with_context(|| "Failed to parse config file")?;
                return Ok(config);
            }
        }

        // Fallback to default
        Ok(AppConfig::default())
    }

    pub fn cache_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.cache.dir {
            return dir.clone();
        }
        if let Some(proj_dirs) = ProjectDirs::from("", "", "ghseek") {
            return proj_dirs.cache_dir().to_path_buf();
        }
        PathBuf::from(".cache/ghseek")
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "ghseek") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/ghseek/logs")
    }
}
