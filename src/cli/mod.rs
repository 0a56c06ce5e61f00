//! CLI definitions.

pub mod commands;

use alert_config::AppConfig;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stock-alert")]
#[command(author, version, about = "Text yourself the news when a stock moves sharply")]
pub struct Cli {
    /// Configuration file path (STOCK_ALERT__* environment variables override it)
    #[arg(short, long, env = "STOCK_ALERT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (defaults to logging.level from the config)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the watched symbol and notify if it moved past the threshold (default)
    Run(RunArgs),
    /// Fetch and evaluate the latest move without fetching news or sending anything
    Check(CheckArgs),
    /// Validate configuration
    ValidateConfig,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run(RunArgs::default())
    }
}

#[derive(clap::Args, Default)]
pub struct RunArgs {
    /// Print messages to stdout instead of sending SMS
    #[arg(long)]
    pub dry_run: bool,

    /// Override the threshold percentage
    #[arg(short, long)]
    pub threshold: Option<Decimal>,

    /// Print the run report after the run (text, json)
    #[arg(long)]
    pub report: Option<ReportFormat>,
}

impl RunArgs {
    /// Fold command-line overrides into the loaded config.
    pub fn apply(&self, config: &mut AppConfig) {
        if self.dry_run {
            config.notify.dry_run = true;
        }
        if let Some(threshold) = self.threshold {
            config.watch.threshold_pct = threshold;
        }
    }
}

#[derive(clap::Args, Default)]
pub struct CheckArgs {
    /// Override the threshold percentage
    #[arg(short, long)]
    pub threshold: Option<Decimal>,
}

impl CheckArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(threshold) = self.threshold {
            config.watch.threshold_pct = threshold;
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
