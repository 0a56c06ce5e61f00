//! Provider traits for the alert pipeline.

mod news_source;
mod quote_source;
mod sender;

pub use news_source::NewsSource;
pub use quote_source::QuoteSource;
pub use sender::NotificationSender;
