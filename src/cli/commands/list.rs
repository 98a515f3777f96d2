//! List command - show cached objects

use crate::cache::EntrySummary;
use crate::cli::args::{Cli, ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::FetchResult;

/// Execute the list command
pub fn execute(args: &ListArgs, cli: &Cli, config: &Config) -> FetchResult<()> {
    let cache = super::open_cache(cli, config)?;
    let entries = cache.entries()?;

    if entries.is_empty() {
        println!("No cached objects.");
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&entries),
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Plain => print_plain(&entries),
    }

    Ok(())
}

fn print_table(entries: &[EntrySummary]) {
    println!("{:<50} {:>10} {:<20}", "KEY", "SIZE", "FETCHED");
    println!("{}", "-".repeat(82));

    for entry in entries {
        let fetched = entry.fetched_at.format("%Y-%m-%d %H:%M").to_string();
        println!(
            "{:<50} {:>10} {:<20}",
            entry.key,
            format_bytes(entry.size),
            fetched
        );
    }

    let total: u64 = entries.iter().map(|e| e.size).sum();
    println!();
    println!("Total: {} object(s), {}", entries.len(), format_bytes(total));
}

fn print_json(entries: &[EntrySummary]) -> FetchResult<()> {
    #[derive(serde::Serialize)]
    struct EntryJson<'a> {
        key: &'a str,
        size: u64,
        fetched_at: String,
    }

    let json_entries: Vec<EntryJson> = entries
        .iter()
        .map(|e| EntryJson {
            key: &e.key,
            size: e.size,
            fetched_at: e.fetched_at.to_rfc3339(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&json_entries)?);
    Ok(())
}

fn print_plain(entries: &[EntrySummary]) {
    for entry in entries {
        println!("{}", entry.key);
    }
}

/// Format bytes as human-readable size (e.g., "1.5 GB")
fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
