//! Config command - show or edit configuration

use crate::cli::args::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::FetchResult;
use console::style;

/// Execute the config command
pub fn execute(args: &ConfigArgs, cli: &Cli, config: &Config, manager: &ConfigManager) -> FetchResult<()> {
    match args.action.as_ref().unwrap_or(&ConfigAction::Show) {
        ConfigAction::Show => show(config),
        ConfigAction::Path => {
            println!("{}", manager.path().display());
            Ok(())
        }
        ConfigAction::Init { force, bucket } => init(cli, manager, *force, bucket.as_deref()),
    }
}

fn show(config: &Config) -> FetchResult<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn init(cli: &Cli, manager: &ConfigManager, force: bool, bucket: Option<&str>) -> FetchResult<()> {
    if manager.path().exists() && !force {
        println!(
            "{} config already exists at {} (use --force to overwrite)",
            style("!").yellow(),
            manager.path().display()
        );
        return Ok(());
    }

    let mut config = Config::default();
    if let Some(bucket) = bucket.or(cli.bucket.as_deref()) {
        config.remote.bucket = bucket.to_string();
    }

    manager.save(&config)?;
    println!(
        "{} wrote default config to {}",
        style("✓").green(),
        manager.path().display()
    );
    Ok(())
}
