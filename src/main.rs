//! fitsfetch - CLI entry point

use clap::Parser;
use console::style;
use fitsfetch::cli::{commands, Cli, Commands};
use fitsfetch::config::ConfigManager;
use fitsfetch::error::FetchResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> FetchResult<ExitCode> {
    let cli = Cli::parse();

    let manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = manager.load()?;

    init_logging(&cli, &config);

    match cli.command {
        Commands::Fetch(ref args) => commands::fetch(args, &cli, &config)?,
        Commands::Evict(ref args) => commands::evict(args, &cli, &config)?,
        Commands::Verify(ref args) => {
            if !commands::verify(args, &cli, &config)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::List(ref args) => commands::list(args, &cli, &config)?,
        Commands::Config(ref args) => commands::config(args, &cli, &config, &manager)?,
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug
fn init_logging(cli: &Cli, config: &fitsfetch::config::Config) {
    let level = match cli.verbose {
        0 if config.general.verbose => "info",
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::new(format!("fitsfetch={}", level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
