//! Shared HTTP client construction.

use reqwest::Client;
use std::time::Duration;

/// Timeouts applied to every outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpOptions {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Build the client shared by every provider in a run.
pub fn build_http_client(options: &HttpOptions) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("stock-alert/", env!("CARGO_PKG_VERSION")))
        .timeout(options.timeout)
        .connect_timeout(options.connect_timeout)
        .build()
}
