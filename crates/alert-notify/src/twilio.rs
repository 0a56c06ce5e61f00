//! Twilio SMS integration.

use alert_core::error::NotificationSendError;
use alert_core::traits::NotificationSender;
use alert_core::types::{DeliveryReceipt, NotificationMessage};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info};

/// Twilio account and routing configuration.
#[derive(Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sending number in E.164 form
    pub from_number: String,
    /// Receiving number in E.164 form
    pub to_number: String,
    pub base_url: String,
}

impl TwilioConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.twilio.com";

    /// Create config directly with credentials and numbers.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from_number: impl Into<String>,
        to_number: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from_number: from_number.into(),
            to_number: to_number.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the sender at a different API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url.trim_end_matches('/'),
            self.account_sid
        )
    }
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from_number", &self.from_number)
            .field("to_number", &self.to_number)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Twilio API response types
#[derive(Debug, Deserialize)]
struct TwilioMessage {
    sid: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct TwilioError {
    code: Option<i64>,
    message: String,
}

/// SMS sender using the Twilio Messages API.
pub struct TwilioSender {
    config: TwilioConfig,
    client: Client,
}

impl TwilioSender {
    /// Create a new sender using a shared HTTP client.
    pub fn new(config: TwilioConfig, client: Client) -> Result<Self, NotificationSendError> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(NotificationSendError::Configuration(
                "Twilio account SID and auth token are required".into(),
            ));
        }
        if config.from_number.is_empty() || config.to_number.is_empty() {
            return Err(NotificationSendError::Configuration(
                "Twilio from/to numbers are required".into(),
            ));
        }
        Ok(Self { config, client })
    }
}

#[async_trait]
impl NotificationSender for TwilioSender {
    async fn send(
        &self,
        message: &NotificationMessage,
    ) -> Result<DeliveryReceipt, NotificationSendError> {
        debug!(
            "Sending {} byte message to {}",
            message.body.len(),
            self.config.to_number
        );

        let resp = self
            .client
            .post(self.config.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("From", self.config.from_number.as_str()),
                ("To", self.config.to_number.as_str()),
                ("Body", message.body.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NotificationSendError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| NotificationSendError::Network(e.to_string()))?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_str::<TwilioError>(&text) {
                Ok(err) => (err.code, err.message),
                Err(_) => (None, text),
            };
            return Err(NotificationSendError::Rejected {
                status: status.as_u16(),
                code,
                message,
            });
        }

        let sent: TwilioMessage = serde_json::from_str(&text)
            .map_err(|e| NotificationSendError::Parse(e.to_string()))?;

        info!("Message {} {} for {}", sent.sid, sent.status, message.symbol);
        Ok(DeliveryReceipt {
            id: sent.sid,
            status: sent.status,
        })
    }

    fn name(&self) -> &str {
        "Twilio"
    }
}
