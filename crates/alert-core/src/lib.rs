//! Core types and traits for the stock alert pipeline.
//!
//! This crate provides the shared building blocks:
//! - Market data types (DailyRecord, DailySeries, MovementResult)
//! - News and notification types
//! - Provider traits for quote sources, news sources and notification senders
//! - The error taxonomy every stage reports through

pub mod types;
pub mod traits;
pub mod error;

pub use error::{
    AlertError, AlertResult, InvalidInputError, NewsFetchError, NotificationSendError,
    QuoteFetchError,
};
pub use types::*;
pub use traits::*;
