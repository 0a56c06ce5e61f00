//! Configuration structures.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

const REDACTED: &str = "<redacted>";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    pub watch: WatchSettings,
    pub alpha_vantage: AlphaVantageSettings,
    #[serde(default)]
    pub news_api: NewsApiSettings,
    #[serde(default)]
    pub twilio: TwilioSettings,
    #[serde(default)]
    pub notify: NotifySettings,
    #[serde(default)]
    pub http: HttpSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stock-alert".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// The ticker being watched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchSettings {
    pub symbol: String,
    /// Used as the news search query
    pub company_name: String,
    #[serde(default = "default_threshold_pct")]
    pub threshold_pct: Decimal,
}

fn default_threshold_pct() -> Decimal {
    dec!(5)
}

/// Alpha Vantage settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct AlphaVantageSettings {
    pub api_key: String,
    #[serde(default = "default_alpha_vantage_url")]
    pub base_url: String,
}

fn default_alpha_vantage_url() -> String {
    "https://www.alphavantage.co/query".to_string()
}

impl fmt::Debug for AlphaVantageSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageSettings")
            .field("api_key", &REDACTED)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// NewsAPI settings. Only `run` needs a key.
#[derive(Clone, Serialize, Deserialize)]
pub struct NewsApiSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_news_api_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_search_in")]
    pub search_in: String,
}

fn default_news_api_url() -> String {
    "https://newsapi.org/v2/everything".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_search_in() -> String {
    "title".to_string()
}

impl Default for NewsApiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_news_api_url(),
            language: default_language(),
            search_in: default_search_in(),
        }
    }
}

impl fmt::Debug for NewsApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiSettings")
            .field("api_key", &REDACTED)
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("search_in", &self.search_in)
            .finish()
    }
}

/// Twilio settings. Empty values are allowed for dry runs.
#[derive(Clone, Serialize, Deserialize)]
pub struct TwilioSettings {
    #[serde(default)]
    pub account_sid: String,
    #[serde(default)]
    pub auth_token: String,
    #[serde(default)]
    pub from_number: String,
    #[serde(default)]
    pub to_number: String,
    #[serde(default = "default_twilio_url")]
    pub base_url: String,
}

fn default_twilio_url() -> String {
    "https://api.twilio.com".to_string()
}

impl Default for TwilioSettings {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            to_number: String::new(),
            base_url: default_twilio_url(),
        }
    }
}

impl fmt::Debug for TwilioSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioSettings")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &REDACTED)
            .field("from_number", &self.from_number)
            .field("to_number", &self.to_number)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Delivery settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifySettings {
    /// Print messages instead of sending them
    #[serde(default)]
    pub dry_run: bool,
}

/// Outbound HTTP settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Check everything a full run needs.
    pub fn validate(&self) -> Result<(), String> {
        let mut problems = self.quote_problems();

        if self.news_api.api_key.trim().is_empty() {
            problems.push("news_api.api_key is empty".to_string());
        }
        if !self.notify.dry_run {
            let twilio = &self.twilio;
            for (name, value) in [
                ("twilio.account_sid", &twilio.account_sid),
                ("twilio.auth_token", &twilio.auth_token),
                ("twilio.from_number", &twilio.from_number),
                ("twilio.to_number", &twilio.to_number),
            ] {
                if value.trim().is_empty() {
                    problems.push(format!("{} is empty (required unless notify.dry_run)", name));
                }
            }
        }

        join_problems(problems)
    }

    /// Check only what fetching and evaluating quotes needs.
    pub fn validate_for_check(&self) -> Result<(), String> {
        join_problems(self.quote_problems())
    }

    fn quote_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.watch.symbol.trim().is_empty() {
            problems.push("watch.symbol is empty".to_string());
        }
        if self.watch.company_name.trim().is_empty() {
            problems.push("watch.company_name is empty".to_string());
        }
        if self.watch.threshold_pct < Decimal::ZERO {
            problems.push(format!(
                "watch.threshold_pct must not be negative (got {})",
                self.watch.threshold_pct
            ));
        }
        if self.alpha_vantage.api_key.trim().is_empty() {
            problems.push("alpha_vantage.api_key is empty".to_string());
        }
        if self.http.timeout_secs == 0 {
            problems.push("http.timeout_secs must be positive".to_string());
        }

        problems
    }

    /// Copy of the config with every secret masked.
    pub fn redacted(&self) -> AppConfig {
        let mut copy = self.clone();
        copy.alpha_vantage.api_key = mask(&copy.alpha_vantage.api_key);
        copy.news_api.api_key = mask(&copy.news_api.api_key);
        copy.twilio.auth_token = mask(&copy.twilio.auth_token);
        copy
    }

    /// Render the redacted config as TOML.
    pub fn to_redacted_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&self.redacted())
    }
}

fn join_problems(problems: Vec<String>) -> Result<(), String> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems.join("; "))
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        REDACTED.to_string()
    }
}
