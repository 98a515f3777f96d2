//! Evict command - remove a cached object

use crate::cache::CacheKey;
use crate::cli::args::{Cli, EvictArgs};
use crate::config::Config;
use crate::error::FetchResult;
use console::style;

/// Execute the evict command. Idempotent: evicting an absent key succeeds.
pub fn execute(args: &EvictArgs, cli: &Cli, config: &Config) -> FetchResult<()> {
    let key = CacheKey::new(&args.key)?;
    let cache = super::open_cache(cli, config)?;

    let existed = cache.contains(&key)?;
    cache.evict(&key)?;

    if existed {
        println!("{} evicted {}", style("✓").green(), key);
    } else {
        println!("{} {} was not cached", style("-").dim(), key);
    }
    Ok(())
}
