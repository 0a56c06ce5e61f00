//! Single-shot alert pipeline.

use alert_core::error::AlertResult;
use alert_core::traits::{NewsSource, NotificationSender, QuoteSource};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::evaluator::{evaluate, Evaluation, DEFAULT_THRESHOLD_PCT};
use crate::formatter::format_notifications;
use crate::report::RunReport;

/// What a run watches and when it speaks up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Ticker passed to the quote source
    pub symbol: String,
    /// Query passed to the news source
    pub company_name: String,
    /// Whole-percent move that must be exceeded to notify
    pub threshold_pct: Decimal,
}

impl PipelineConfig {
    /// Create a config with the default threshold.
    pub fn new(symbol: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
            threshold_pct: DEFAULT_THRESHOLD_PCT,
        }
    }

    /// Set the notification threshold.
    pub fn with_threshold(mut self, threshold_pct: Decimal) -> Self {
        self.threshold_pct = threshold_pct;
        self
    }
}

/// Where a run got to.
///
/// `Idle → Evaluated → Done | NotificationsSent`. A failed run ends in
/// whichever state it had reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Idle,
    Evaluated,
    /// Threshold not exceeded, nothing fetched or sent
    Done,
    NotificationsSent,
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Idle => write!(f, "idle"),
            RunState::Evaluated => write!(f, "evaluated"),
            RunState::Done => write!(f, "done"),
            RunState::NotificationsSent => write!(f, "notifications-sent"),
        }
    }
}

/// Fetch the daily series and evaluate its two most recent closes.
pub async fn evaluate_latest(
    quotes: &dyn QuoteSource,
    config: &PipelineConfig,
) -> AlertResult<Evaluation> {
    let symbol = &config.symbol;
    info!("Fetching daily series for {} from {}", symbol, quotes.name());

    let series = quotes.daily_series(symbol).await?;
    let (latest, previous) = series.latest_pair()?;
    let evaluation = evaluate(latest, previous, config.threshold_pct)?;

    let movement = &evaluation.result;
    info!(
        "{} closed {} on {} vs {} on {}: {}%, threshold {}%",
        symbol,
        movement.latest_close,
        movement.latest_date,
        movement.previous_close,
        movement.previous_date,
        movement.percentage_change,
        config.threshold_pct
    );

    Ok(evaluation)
}

/// One fetch → evaluate → (fetch → format → send) run.
///
/// Every stage is awaited to completion before the next starts and the
/// first failure ends the run.
pub struct Pipeline<'a> {
    config: &'a PipelineConfig,
    quotes: &'a dyn QuoteSource,
    news: &'a dyn NewsSource,
    sender: &'a dyn NotificationSender,
    state: RunState,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline over borrowed providers.
    pub fn new(
        config: &'a PipelineConfig,
        quotes: &'a dyn QuoteSource,
        news: &'a dyn NewsSource,
        sender: &'a dyn NotificationSender,
    ) -> Self {
        Self {
            config,
            quotes,
            news,
            sender,
            state: RunState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> RunState {
        self.state
    }

    fn transition(&mut self, next: RunState) {
        debug!("Pipeline {} -> {}", self.state, next);
        self.state = next;
    }

    /// Fetch quotes and evaluate the latest move without touching news or senders.
    pub async fn evaluate_only(&mut self) -> AlertResult<Evaluation> {
        let evaluation = evaluate_latest(self.quotes, self.config).await?;
        self.transition(RunState::Evaluated);
        Ok(evaluation)
    }

    /// Run the whole pipeline.
    pub async fn run(mut self) -> AlertResult<RunReport> {
        let config = self.config;
        let evaluation = self.evaluate_only().await?;

        if !evaluation.should_notify {
            info!("Move within threshold, nothing to send");
            self.transition(RunState::Done);
            return Ok(RunReport::new(
                &config.symbol,
                self.state,
                evaluation,
                0,
                Vec::new(),
            ));
        }

        let query = &config.company_name;
        info!("Threshold exceeded, searching {} for '{}'", self.news.name(), query);
        let articles = self.news.search(query).await?;
        if articles.is_empty() {
            warn!("No articles found for '{}'", query);
        }

        let messages = format_notifications(&config.symbol, &evaluation.result, &articles);
        let total = messages.len();
        let mut receipts = Vec::with_capacity(total);

        for (i, message) in messages.iter().enumerate() {
            let receipt = self.sender.send(message).await.map_err(|e| {
                error!(
                    "{} failed on message {}/{}, skipping the rest: {}",
                    self.sender.name(),
                    i + 1,
                    total,
                    e
                );
                e
            })?;
            receipts.push(receipt);
        }

        info!("Sent {} notifications via {}", receipts.len(), self.sender.name());
        self.transition(RunState::NotificationsSent);

        Ok(RunReport::new(
            &config.symbol,
            self.state,
            evaluation,
            articles.len(),
            receipts,
        ))
    }
}
