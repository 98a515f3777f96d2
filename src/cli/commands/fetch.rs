//! Fetch command - resolve an object to a local path

use crate::cache::CacheKey;
use crate::cli::args::{Cli, FetchArgs};
use crate::config::Config;
use crate::error::FetchResult;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Execute the fetch command
pub fn execute(args: &FetchArgs, cli: &Cli, config: &Config) -> FetchResult<()> {
    let key = CacheKey::new(&args.key)?;
    let cache = super::open_cache(cli, config)?;

    if args.force {
        cache.evict(&key)?;
    }

    if cache.contains(&key)? {
        let path = cache.resolve(&key)?;
        eprintln!("{} {} (cached)", style("✓").green(), key);
        println!("{}", path.display());
        return Ok(());
    }

    let spinner = fetch_spinner(&key);
    let result = cache.resolve(&key);
    if let Some(ref spinner) = spinner {
        spinner.finish_and_clear();
    }

    let path = result?;
    eprintln!("{} {} (fetched)", style("✓").green(), key);
    println!("{}", path.display());
    Ok(())
}

/// Spinner while the download runs; suppressed when stderr is not a terminal
fn fetch_spinner(key: &CacheKey) -> Option<ProgressBar> {
    if !console::Term::stderr().is_term() {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
    );
    spinner.set_message(format!("Fetching {}...", key));
    spinner.enable_steady_tick(Duration::from_millis(120));
    Some(spinner)
}
