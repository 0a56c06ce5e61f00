//! Validate configuration command.

use alert_config::load_config;
use alert_monitor::LogFormat;
use anyhow::{anyhow, Result};
use std::path::Path;

pub fn run(config_path: Option<&Path>) -> Result<()> {
    match config_path {
        Some(path) => println!("Validating configuration: {:?}", path),
        None => println!("Validating configuration from environment"),
    }

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    let mut problems: Vec<String> = match config.validate() {
        Ok(()) => Vec::new(),
        Err(joined) => joined.split("; ").map(str::to_string).collect(),
    };
    if let Err(e) = config.logging.format.parse::<LogFormat>() {
        problems.push(format!("logging.format: {}", e));
    }
    if !problems.is_empty() {
        for problem in &problems {
            println!("  - {}", problem);
        }
        return Err(anyhow!("Configuration is invalid"));
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Symbol: {} ({})", config.watch.symbol, config.watch.company_name);
    println!("Threshold: {}%", config.watch.threshold_pct);
    println!("Log level: {}", config.logging.level);
    println!("Dry run: {}", config.notify.dry_run);
    println!();
    println!("{}", config.to_redacted_toml()?);

    Ok(())
}
