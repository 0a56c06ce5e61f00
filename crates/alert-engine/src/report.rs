//! Run report generation.

use alert_core::types::{DeliveryReceipt, MovementResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::evaluator::Evaluation;
use crate::pipeline::RunState;

/// Summary of a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Symbol that was checked
    pub symbol: String,
    /// Final pipeline state
    pub state: RunState,
    /// Computed movement
    pub movement: MovementResult,
    /// Whether the threshold was exceeded
    pub should_notify: bool,
    /// Articles the news source returned, before the cap
    pub articles_found: usize,
    /// One receipt per delivered message
    pub receipts: Vec<DeliveryReceipt>,
}

impl RunReport {
    pub(crate) fn new(
        symbol: &str,
        state: RunState,
        evaluation: Evaluation,
        articles_found: usize,
        receipts: Vec<DeliveryReceipt>,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            state,
            movement: evaluation.result,
            should_notify: evaluation.should_notify,
            articles_found,
            receipts,
        }
    }

    /// Number of messages delivered.
    pub fn sent(&self) -> usize {
        self.receipts.len()
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let m = &self.movement;
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str(&format!("  {} RUN REPORT\n", self.symbol));
        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str(&format!("  Latest close:        {} ({})\n", m.latest_close, m.latest_date));
        s.push_str(&format!("  Previous close:      {} ({})\n", m.previous_close, m.previous_date));
        s.push_str(&format!("  Change:              {}\n", signed(m.signed_difference)));
        s.push_str(&format!(
            "  Move:                {}{}%\n",
            m.direction.glyph(),
            m.abs_percentage()
        ));
        s.push_str(&format!("  Threshold exceeded:  {}\n", yes_no(self.should_notify)));
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Articles found:      {}\n", self.articles_found));
        s.push_str(&format!("  Messages sent:       {}\n", self.sent()));
        for receipt in &self.receipts {
            s.push_str(&format!("    {} [{}]\n", receipt.id, receipt.status));
        }
        s.push_str(&format!("  Final state:         {}\n", self.state));

        s
    }

    /// Export as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn signed(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
