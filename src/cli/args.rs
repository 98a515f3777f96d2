//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// fitsfetch - Fetch and cache spectra data files
///
/// Downloads immutable data files from S3-compatible object storage into a
/// local cache, fetching each object at most once.
#[derive(Parser, Debug)]
#[command(name = "fitsfetch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FITSFETCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cache root directory (overrides config)
    #[arg(long, global = true, env = "FITSFETCH_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Bucket to fetch from (overrides config)
    #[arg(short, long, global = true)]
    pub bucket: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch an object into the cache and print its local path
    Fetch(FetchArgs),

    /// Remove a cached object
    Evict(EvictArgs),

    /// Check a cached object's integrity
    Verify(VerifyArgs),

    /// List cached objects
    List(ListArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the fetch command
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Object key, e.g. spectra/obj123.fits
    pub key: String,

    /// Re-fetch even if already cached
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the evict command
#[derive(Parser, Debug)]
pub struct EvictArgs {
    /// Object key to evict
    pub key: String,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Object key to verify
    pub key: String,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,

        /// Bucket to record in the new config
        #[arg(long)]
        bucket: Option<String>,
    },
}

/// Output format for list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one key per line)
    Plain,
}
