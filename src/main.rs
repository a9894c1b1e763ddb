use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use ghseek::{app, cache, github, util};

#[derive(Parser, Debug)]
#[command(name = "ghseek", version, about = "Search GitHub repositories and users from the terminal")]
struct Cli {
    /// Prefill the search box and start searching immediately
    query: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable disk cache
    #[arg(long)]
    no_cache: bool,

    /// Drop cached search results on startup
    #[arg(short, long)]
    refresh: bool,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = util::config::AppConfig::load(cli.config.as_deref())?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!("ghseek starting");

    let client = match github::GithubClient::new(&config.github.api_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to set up GitHub client: {e}");
            std::process::exit(1);
        }
    };

    // Build cache store
    let cache_store = if cli.no_cache {
        None
    } else {
        let store = cache::CacheStore::new(config.cache_dir(), config.cache.ttl_secs);
        if cli.refresh {
            store.invalidate_all()?;
        }
        Some(store)
    };

    // Run the TUI event loop
    app::event_loop::run(config, client, cache_store, cli.query).await
}

fn setup_logging(
    config: &util::config::AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "ghseek.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("ghseek=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
