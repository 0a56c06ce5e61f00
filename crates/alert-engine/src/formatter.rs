//! Notification message formatting.

use alert_core::types::{Article, MovementResult, NotificationMessage};

/// Most articles turned into messages per run.
pub const MAX_ARTICLES: usize = 3;

/// Build one message per article, for at most the first [`MAX_ARTICLES`].
///
/// Articles keep the order the news provider returned them in. An article
/// without a description gets an empty `Brief:` line.
///
/// ```text
/// TSLA: ▲6%
/// Headline: Tesla shares jump after deliveries beat
/// Brief: Deliveries came in ahead of estimates.
/// ```
pub fn format_notifications(
    symbol: &str,
    movement: &MovementResult,
    articles: &[Article],
) -> Vec<NotificationMessage> {
    let header = format!(
        "{}: {}{}%",
        symbol,
        movement.direction.glyph(),
        movement.abs_percentage()
    );

    articles
        .iter()
        .take(MAX_ARTICLES)
        .map(|article| {
            let body = format!(
                "{}\nHeadline: {}\nBrief: {}",
                header,
                article.title,
                article.description_or_empty()
            );
            NotificationMessage::new(symbol, body)
        })
        .collect()
}
