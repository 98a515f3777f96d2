//! CLI command implementations

pub mod config;
pub mod evict;
pub mod fetch;
pub mod list;
pub mod verify;

pub use config::execute as config;
pub use evict::execute as evict;
pub use fetch::execute as fetch;
pub use list::execute as list;
pub use verify::execute as verify;

use crate::cache::BlobCache;
use crate::cli::args::Cli;
use crate::config::{Config, ConfigManager};
use crate::error::{FetchError, FetchResult};
use crate::remote::S3HttpStore;
use std::path::PathBuf;
use std::time::Duration;

/// Build a cache from the merged configuration and CLI overrides
pub(crate) fn open_cache(cli: &Cli, config: &Config) -> FetchResult<BlobCache<S3HttpStore>> {
    let bucket = cli
        .bucket
        .clone()
        .or_else(|| {
            if config.remote.bucket.is_empty() {
                None
            } else {
                Some(config.remote.bucket.clone())
            }
        })
        .ok_or(FetchError::BucketNotConfigured)?;

    let root = cache_root(cli, config);

    let store = S3HttpStore::with_endpoint(
        bucket,
        config.remote.endpoint.clone(),
        Duration::from_secs(config.remote.timeout_secs),
    );

    Ok(BlobCache::with_retry(root, store, config.retry))
}

/// Resolve the cache root: CLI/env override, then config, then platform default
pub(crate) fn cache_root(cli: &Cli, config: &Config) -> PathBuf {
    cli.cache_dir
        .clone()
        .or_else(|| config.cache.root.clone())
        .unwrap_or_else(ConfigManager::default_cache_root)
}
