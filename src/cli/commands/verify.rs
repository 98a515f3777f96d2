//! Verify command - integrity-check a cached object

use crate::cache::CacheKey;
use crate::cli::args::{Cli, VerifyArgs};
use crate::config::Config;
use crate::error::FetchResult;
use console::style;

/// Execute the verify command. Returns the check result so the caller can
/// reflect it in the exit code.
pub fn execute(args: &VerifyArgs, cli: &Cli, config: &Config) -> FetchResult<bool> {
    let key = CacheKey::new(&args.key)?;
    let cache = super::open_cache(cli, config)?;

    let ok = cache.verify(&key)?;
    if ok {
        println!("{} {} is intact", style("✓").green(), key);
    } else {
        println!(
            "{} {} is missing or corrupt (next fetch will repair it)",
            style("✗").red(),
            key
        );
    }
    Ok(ok)
}
