//! Notification sender trait definition.

use crate::error::NotificationSendError;
use crate::types::{DeliveryReceipt, NotificationMessage};
use async_trait::async_trait;

/// Trait for messaging integrations.
///
/// One call delivers one message. Senders do no deduplication.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver a single message.
    async fn send(
        &self,
        message: &NotificationMessage,
    ) -> Result<DeliveryReceipt, NotificationSendError>;

    /// Get the sender name.
    fn name(&self) -> &str;
}
