//! Build providers from the loaded configuration.

use alert_config::AppConfig;
use alert_core::traits::NotificationSender;
use alert_data::{AlphaVantageConfig, AlphaVantageSource, HttpOptions, NewsApiConfig, NewsApiSource};
use alert_engine::PipelineConfig;
use alert_notify::{ConsoleSender, TwilioConfig, TwilioSender};
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub fn http_client(config: &AppConfig) -> Result<Client> {
    let options = HttpOptions {
        timeout: Duration::from_secs(config.http.timeout_secs),
        connect_timeout: Duration::from_secs(config.http.connect_timeout_secs),
    };
    alert_data::build_http_client(&options).context("Failed to build HTTP client")
}

pub fn quote_source(config: &AppConfig, client: Client) -> AlphaVantageSource {
    let settings = &config.alpha_vantage;
    AlphaVantageSource::new(
        AlphaVantageConfig::new(&settings.api_key).with_base_url(&settings.base_url),
        client,
    )
}

pub fn news_source(config: &AppConfig, client: Client) -> NewsApiSource {
    let settings = &config.news_api;
    let mut news_config = NewsApiConfig::new(&settings.api_key).with_base_url(&settings.base_url);
    news_config.language = settings.language.clone();
    news_config.search_in = settings.search_in.clone();
    NewsApiSource::new(news_config, client)
}

/// Twilio normally, the console when `notify.dry_run` is set.
pub fn sender(config: &AppConfig, client: Client) -> Result<Box<dyn NotificationSender>> {
    if config.notify.dry_run {
        info!("Dry run: messages will be printed, not sent");
        return Ok(Box::new(ConsoleSender::new()));
    }

    let settings = &config.twilio;
    let twilio_config = TwilioConfig::new(
        &settings.account_sid,
        &settings.auth_token,
        &settings.from_number,
        &settings.to_number,
    )
    .with_base_url(&settings.base_url);
    let sender = TwilioSender::new(twilio_config, client).context("Failed to set up Twilio")?;
    Ok(Box::new(sender))
}

pub fn pipeline_config(config: &AppConfig) -> PipelineConfig {
    PipelineConfig::new(&config.watch.symbol, &config.watch.company_name)
        .with_threshold(config.watch.threshold_pct)
}
