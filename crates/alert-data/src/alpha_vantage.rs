//! Alpha Vantage daily time-series source.

use alert_core::error::QuoteFetchError;
use alert_core::traits::QuoteSource;
use alert_core::types::{DailyRecord, DailySeries};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Alpha Vantage API configuration.
#[derive(Clone)]
pub struct AlphaVantageConfig {
    pub api_key: String,
    pub base_url: String,
}

impl AlphaVantageConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.alphavantage.co/query";

    /// Create config for the public endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the source at a different endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for AlphaVantageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Alpha Vantage response envelope.
///
/// Throttling and bad-symbol responses come back as 200 with one of the
/// message keys instead of the series.
#[derive(Debug, Deserialize)]
struct DailyEnvelope {
    #[serde(
        rename = "Time Series (Daily)",
        default,
        deserialize_with = "entries_in_document_order"
    )]
    time_series: Option<Vec<(String, RawDailyValues)>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDailyValues {
    #[serde(rename = "1. open")]
    open: Option<String>,
    #[serde(rename = "2. high")]
    high: Option<String>,
    #[serde(rename = "3. low")]
    low: Option<String>,
    #[serde(rename = "4. close")]
    close: Option<String>,
    #[serde(rename = "5. volume")]
    volume: Option<String>,
}

/// Collect a JSON object as key/value pairs without re-sorting the keys.
fn entries_in_document_order<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<(String, RawDailyValues)>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, RawDailyValues)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of trading date to daily values")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((date, values)) = map.next_entry::<String, RawDailyValues>()? {
                entries.push((date, values));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor).map(Some)
}

impl RawDailyValues {
    /// Validate and convert one day's strings into a record.
    fn into_record(self, date: &str) -> Result<DailyRecord, QuoteFetchError> {
        let parsed_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| QuoteFetchError::Parse(format!("date '{}': {}", date, e)))?;

        Ok(DailyRecord::new(
            parsed_date,
            parse_field(date, "1. open", self.open)?,
            parse_field(date, "2. high", self.high)?,
            parse_field(date, "3. low", self.low)?,
            parse_field(date, "4. close", self.close)?,
            parse_field(date, "5. volume", self.volume)?,
        ))
    }
}

fn parse_field(
    date: &str,
    field: &'static str,
    value: Option<String>,
) -> Result<Decimal, QuoteFetchError> {
    let raw = value.ok_or_else(|| QuoteFetchError::MissingField {
        date: date.to_string(),
        field,
    })?;
    Decimal::from_str(raw.trim())
        .map_err(|e| QuoteFetchError::Parse(format!("{} '{}' on {}: {}", field, raw, date, e)))
}

/// Turn a response body into a series, keeping the provider's ordering.
fn parse_daily_body(symbol: &str, body: &str) -> Result<DailySeries, QuoteFetchError> {
    let envelope: DailyEnvelope =
        serde_json::from_str(body).map_err(|e| QuoteFetchError::Parse(e.to_string()))?;

    let entries = match envelope.time_series {
        Some(entries) => entries,
        None => {
            let message = envelope
                .error_message
                .or(envelope.note)
                .or(envelope.information)
                .unwrap_or_else(|| "response has no 'Time Series (Daily)'".to_string());
            return Err(QuoteFetchError::Provider(message));
        }
    };

    let records = entries
        .into_iter()
        .map(|(date, values)| values.into_record(&date))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DailySeries::new(symbol, records))
}

/// Daily quote source backed by Alpha Vantage `TIME_SERIES_DAILY`.
pub struct AlphaVantageSource {
    config: AlphaVantageConfig,
    client: Client,
}

impl AlphaVantageSource {
    /// Create a new source using a shared HTTP client.
    pub fn new(config: AlphaVantageConfig, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageSource {
    async fn daily_series(&self, symbol: &str) -> Result<DailySeries, QuoteFetchError> {
        debug!("Requesting daily series for {} from {}", symbol, self.config.base_url);

        let resp = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", symbol),
                ("apikey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| QuoteFetchError::Network(e.without_url().to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(QuoteFetchError::Status { status, body });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| QuoteFetchError::Network(e.without_url().to_string()))?;
        let series = parse_daily_body(symbol, &body)?;

        info!("Fetched {} daily records for {}", series.len(), symbol);
        Ok(series)
    }

    fn name(&self) -> &str {
        "Alpha Vantage"
    }
}
