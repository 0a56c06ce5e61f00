//! NewsAPI `everything` search source.

use alert_core::error::NewsFetchError;
use alert_core::traits::NewsSource;
use alert_core::types::Article;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info, warn};

/// NewsAPI configuration.
#[derive(Clone)]
pub struct NewsApiConfig {
    pub api_key: String,
    pub base_url: String,
    /// ISO-639-1 language filter
    pub language: String,
    /// Which article fields the query is matched against
    pub search_in: String,
}

impl NewsApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://newsapi.org/v2/everything";

    /// Create config for English headline search on the public endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            language: "en".to_string(),
            search_in: "title".to_string(),
        }
    }

    /// Point the source at a different endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("search_in", &self.search_in)
            .finish()
    }
}

/// NewsAPI response types
#[derive(Debug, Deserialize)]
struct NewsEnvelope {
    status: String,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    title: Option<String>,
    description: Option<String>,
}

fn provider_error(code: Option<String>, message: Option<String>) -> NewsFetchError {
    NewsFetchError::Provider {
        code: code.unwrap_or_else(|| "unknown".to_string()),
        message: message.unwrap_or_default(),
    }
}

/// Turn a successful response body into articles, keeping provider order.
fn parse_articles(body: &str) -> Result<Vec<Article>, NewsFetchError> {
    let envelope: NewsEnvelope =
        serde_json::from_str(body).map_err(|e| NewsFetchError::Parse(e.to_string()))?;

    if envelope.status != "ok" {
        return Err(provider_error(envelope.code, envelope.message));
    }

    let articles = envelope
        .articles
        .into_iter()
        .filter_map(|raw| match raw.title {
            Some(title) => Some(Article::new(title, raw.description)),
            None => {
                warn!("Skipping article without a title");
                None
            }
        })
        .collect();

    Ok(articles)
}

/// News source backed by NewsAPI.
pub struct NewsApiSource {
    config: NewsApiConfig,
    client: Client,
}

impl NewsApiSource {
    /// Create a new source using a shared HTTP client.
    pub fn new(config: NewsApiConfig, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    async fn search(&self, query: &str) -> Result<Vec<Article>, NewsFetchError> {
        debug!("Searching news for '{}' in {}", query, self.config.search_in);

        let resp = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("apiKey", self.config.api_key.as_str()),
                ("q", query),
                ("searchIn", self.config.search_in.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsFetchError::Network(e.without_url().to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| NewsFetchError::Network(e.without_url().to_string()))?;

        if !status.is_success() {
            // NewsAPI explains 4xx failures in a JSON body; fall back to the raw text
            return Err(match serde_json::from_str::<NewsEnvelope>(&body) {
                Ok(envelope) if envelope.code.is_some() || envelope.message.is_some() => {
                    provider_error(envelope.code, envelope.message)
                }
                _ => NewsFetchError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let articles = parse_articles(&body)?;
        info!("Found {} articles for '{}'", articles.len(), query);
        Ok(articles)
    }

    fn name(&self) -> &str {
        "NewsAPI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order_and_nulls() {
        let body = r#"{
            "status": "ok",
            "totalResults": 3,
            "articles": [
                {"source": {"id": null, "name": "Reuters"}, "title": "Tesla shares jump", "description": "Deliveries beat."},
                {"source": {"id": null, "name": "CNBC"}, "title": "Tesla recalls vehicles", "description": null},
                {"source": {"id": null, "name": "Yahoo"}, "title": "Tesla Inc annual meeting"}
            ]
        }"#;

        let articles = parse_articles(body).unwrap();
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].title, "Tesla shares jump");
        assert_eq!(articles[0].description.as_deref(), Some("Deliveries beat."));
        assert_eq!(articles[1].description, None);
        assert_eq!(articles[2].title, "Tesla Inc annual meeting");
    }

    #[test]
    fn test_untitled_articles_are_skipped() {
        let body = r#"{"status": "ok", "totalResults": 2, "articles": [
            {"title": null, "description": "orphan"},
            {"title": "Kept", "description": "yes"}
        ]}"#;

        let articles = parse_articles(body).unwrap();
        assert_eq!(articles, vec![Article::new("Kept", Some("yes".to_string()))]);
    }

    #[test]
    fn test_error_status_in_body() {
        let body = r#"{"status": "error", "code": "rateLimited", "message": "Too many requests"}"#;

        match parse_articles(body) {
            Err(NewsFetchError::Provider { code, message }) => {
                assert_eq!(code, "rateLimited");
                assert_eq!(message, "Too many requests");
            }
            other => panic!("expected Provider, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_body() {
        assert!(matches!(parse_articles("<html>"), Err(NewsFetchError::Parse(_))));
    }
}
