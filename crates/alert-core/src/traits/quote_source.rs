//! Quote source trait definition.

use crate::error::QuoteFetchError;
use crate::types::DailySeries;
use async_trait::async_trait;

/// Trait for daily market-data providers.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the daily series for a symbol.
    ///
    /// # Arguments
    /// * `symbol` - The ticker to fetch
    ///
    /// # Returns
    /// Records in provider order, expected most recent first
    async fn daily_series(&self, symbol: &str) -> Result<DailySeries, QuoteFetchError>;

    /// Get the source name.
    fn name(&self) -> &str;
}
