//! Console sender for dry runs.

use alert_core::error::NotificationSendError;
use alert_core::traits::NotificationSender;
use alert_core::types::{DeliveryReceipt, NotificationMessage};
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::info;

/// Prints messages to stdout instead of delivering them.
pub struct ConsoleSender {
    sent: Mutex<Vec<NotificationMessage>>,
    quiet: bool,
}

impl ConsoleSender {
    /// Create a sender that prints every message.
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            quiet: false,
        }
    }

    /// Record messages without printing them.
    #[cfg(test)]
    fn quiet() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            quiet: true,
        }
    }

    /// Messages handed to this sender so far.
    #[cfg(test)]
    fn sent(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for ConsoleSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSender for ConsoleSender {
    async fn send(
        &self,
        message: &NotificationMessage,
    ) -> Result<DeliveryReceipt, NotificationSendError> {
        let mut sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
        sent.push(message.clone());
        let id = format!("console-{}", sent.len());
        drop(sent);

        if !self.quiet {
            println!("───────── {} ─────────", id);
            println!("{}", message);
        }
        info!("Dry run: printed message {} for {}", id, message.symbol);

        Ok(DeliveryReceipt {
            id,
            status: "printed".to_string(),
        })
    }

    fn name(&self) -> &str {
        "Console"
    }
}
