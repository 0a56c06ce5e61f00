//! News articles.

use serde::{Deserialize, Serialize};

/// A news article as returned by the news provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline
    pub title: String,
    /// Short summary; providers sometimes omit it
    pub description: Option<String>,
}

impl Article {
    /// Create a new article.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    /// Description, or an empty string when the provider sent none.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
