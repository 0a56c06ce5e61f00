//! Configuration management.

mod settings;

pub use settings::{
    AlphaVantageSettings, AppConfig, AppSettings, HttpSettings, LoggingConfig, NewsApiSettings,
    NotifySettings, TwilioSettings, WatchSettings,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Prefix for environment overrides, e.g. `STOCK_ALERT__WATCH__SYMBOL`.
pub const ENV_PREFIX: &str = "STOCK_ALERT";

/// Load configuration from an optional file and the environment.
///
/// Environment variables win over the file.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        // No try_parsing: phone numbers and keys must stay strings
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
fn load_config_str(toml_source: &str) -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml_source, config::FileFormat::Toml))
        .build()?
        .try_deserialize()
}
