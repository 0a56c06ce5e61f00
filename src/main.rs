//! Stock movement alert CLI application.

mod cli;
mod providers;

use alert_config::{load_config, AppConfig};
use alert_monitor::{setup_logging, LogFormat};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    match cli.command.take().unwrap_or_default() {
        Commands::Run(args) => {
            let config = prepare(&cli, |config| args.apply(config), AppConfig::validate)?;
            cli::commands::run::run(&config, args.report).await
        }
        Commands::Check(args) => {
            let config = prepare(
                &cli,
                |config| args.apply(config),
                AppConfig::validate_for_check,
            )?;
            cli::commands::check::run(&config).await
        }
        Commands::ValidateConfig => cli::commands::validate::run(cli.config.as_deref()),
    }
}

/// Load, override and validate the config, then install logging.
fn prepare(
    cli: &Cli,
    overrides: impl FnOnce(&mut AppConfig),
    validate: fn(&AppConfig) -> Result<(), String>,
) -> Result<AppConfig> {
    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    overrides(&mut config);
    validate(&config).map_err(|problems| anyhow!("Invalid configuration: {}", problems))?;

    let level = cli
        .log_level
        .map(|level| level.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let format = log_format(cli.json_logs, &config.logging.format)?;
    setup_logging(&level, format).context("Failed to initialise logging")?;

    Ok(config)
}

/// `--json-logs` wins over `logging.format`.
fn log_format(json_logs: bool, configured: &str) -> Result<LogFormat> {
    if json_logs {
        return Ok(LogFormat::Json);
    }
    configured
        .parse()
        .map_err(|e| anyhow!("Invalid logging.format: {}", e))
}
