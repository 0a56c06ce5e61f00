//! Outbound notifications.

use serde::{Deserialize, Serialize};

/// A formatted message ready to hand to a sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Ticker the message is about
    pub symbol: String,
    /// Message text
    pub body: String,
}

impl NotificationMessage {
    pub fn new(symbol: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            body: body.into(),
        }
    }
}

impl std::fmt::Display for NotificationMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.body)
    }
}

/// Acknowledgement returned by a sender for one delivered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Provider-assigned message id
    pub id: String,
    /// Provider-reported status (e.g. "queued")
    pub status: String,
}
