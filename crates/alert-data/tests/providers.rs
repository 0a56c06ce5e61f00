use alert_core::error::{NewsFetchError, QuoteFetchError};
use alert_core::traits::{NewsSource, QuoteSource};
use alert_data::{
    build_http_client, AlphaVantageConfig, AlphaVantageSource, HttpOptions, NewsApiConfig,
    NewsApiSource,
};
use httpmock::{Method::GET, MockServer};
use rust_decimal_macros::dec;
use serde_json::json;

fn quote_source(server: &MockServer) -> AlphaVantageSource {
    let client = build_http_client(&HttpOptions::default()).unwrap();
    let config = AlphaVantageConfig::new("av-key").with_base_url(server.url("/query"));
    AlphaVantageSource::new(config, client)
}

fn news_source(server: &MockServer) -> NewsApiSource {
    let client = build_http_client(&HttpOptions::default()).unwrap();
    let config = NewsApiConfig::new("news-key").with_base_url(server.url("/v2/everything"));
    NewsApiSource::new(config, client)
}

#[tokio::test]
async fn daily_series_sends_expected_query() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY")
            .query_param("symbol", "TSLA")
            .query_param("apikey", "av-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"Time Series (Daily)": {
                    "2024-06-14": {"1. open": "183.08", "2. high": "183.72", "3. low": "176.13", "4. close": "178.01", "5. volume": "81361676"},
                    "2024-06-13": {"1. open": "188.39", "2. high": "191.36", "3. low": "176.67", "4. close": "182.47", "5. volume": "118984113"}
                }}"#,
            );
    });

    let series = quote_source(&server).daily_series("TSLA").await.unwrap();

    mock.assert();
    let (latest, previous) = series.latest_pair().unwrap();
    assert_eq!(latest.close, dec!(178.01));
    assert_eq!(previous.close, dec!(182.47));
}

#[tokio::test]
async fn daily_series_missing_close_is_quote_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body(
            r#"{"Time Series (Daily)": {
                "2024-06-14": {"1. open": "183.08", "2. high": "183.72", "3. low": "176.13", "5. volume": "81361676"}
            }}"#,
        );
    });

    let err = quote_source(&server).daily_series("TSLA").await.unwrap_err();
    assert!(matches!(err, QuoteFetchError::MissingField { field: "4. close", .. }));
}

#[tokio::test]
async fn daily_series_http_failure() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(503).body("maintenance");
    });

    match quote_source(&server).daily_series("TSLA").await {
        Err(QuoteFetchError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn news_search_sends_expected_query() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("apiKey", "news-key")
            .query_param("q", "Tesla Inc")
            .query_param("searchIn", "title")
            .query_param("language", "en");
        then.status(200).json_body(json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"title": "Tesla Inc beats estimates", "description": "Strong quarter."},
                {"title": "Tesla Inc opens factory", "description": null}
            ]
        }));
    });

    let articles = news_source(&server).search("Tesla Inc").await.unwrap();

    mock.assert();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "Tesla Inc beats estimates");
    assert_eq!(articles[1].description, None);
}

#[tokio::test]
async fn news_search_surfaces_provider_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(401).json_body(json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        }));
    });

    match news_source(&server).search("Tesla Inc").await {
        Err(NewsFetchError::Provider { code, .. }) => assert_eq!(code, "apiKeyInvalid"),
        other => panic!("expected Provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn news_search_plain_http_failure() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(502).body("bad gateway");
    });

    match news_source(&server).search("Tesla Inc").await {
        Err(NewsFetchError::Status { status, .. }) => assert_eq!(status, 502),
        other => panic!("expected Status error, got {:?}", other),
    }
}
