//! Market-data and news sources for the alert pipeline.

mod alpha_vantage;
mod http;
mod news_api;

pub use alpha_vantage::{AlphaVantageConfig, AlphaVantageSource};
pub use http::{build_http_client, HttpOptions};
pub use news_api::{NewsApiConfig, NewsApiSource};
