//! Error types for the alert pipeline.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level pipeline error.
///
/// Every variant is fatal for the current run; nothing is retried.
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Quote fetch failed: {0}")]
    QuoteFetch(#[from] QuoteFetchError),

    #[error("News fetch failed: {0}")]
    NewsFetch(#[from] NewsFetchError),

    #[error("Notification send failed: {0}")]
    NotificationSend(#[from] NotificationSendError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Market-data provider errors.
#[derive(Error, Debug)]
pub enum QuoteFetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Missing field '{field}' for {date}")]
    MissingField { date: String, field: &'static str },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// News provider errors.
#[derive(Error, Debug)]
pub enum NewsFetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider error ({code}): {message}")]
    Provider { code: String, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Messaging provider errors.
#[derive(Error, Debug)]
pub enum NotificationSendError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Message rejected (HTTP {status}, code {code:?}): {message}")]
    Rejected {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Inputs the evaluator refuses to compute on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("Latest close on {date} is zero")]
    ZeroClose { date: NaiveDate },

    #[error("Percentage change for {date} is out of range")]
    PercentageOverflow { date: NaiveDate },

    #[error("Insufficient history: need {required} daily records, have {available}")]
    InsufficientHistory { required: usize, available: usize },

    #[error("Series is not most-recent-first: {following} is listed after {preceding}")]
    OrderingAssumptionViolated {
        preceding: NaiveDate,
        following: NaiveDate,
    },
}

/// Result type alias for pipeline operations.
pub type AlertResult<T> = Result<T, AlertError>;
