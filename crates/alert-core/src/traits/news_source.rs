//! News source trait definition.

use crate::error::NewsFetchError;
use crate::types::Article;
use async_trait::async_trait;

/// Trait for news search providers.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Search recent articles matching a query.
    ///
    /// Articles come back in the provider's order; callers must not assume
    /// any ranking beyond that.
    async fn search(&self, query: &str) -> Result<Vec<Article>, NewsFetchError>;

    /// Get the source name.
    fn name(&self) -> &str;
}
