//! Day-over-day price movement.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a close-to-close move.
///
/// An unchanged close counts as `Down`; only a strictly positive change is `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Classify a signed close difference.
    pub fn from_change(signed_difference: Decimal) -> Self {
        if signed_difference > Decimal::ZERO {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Glyph used in notification bodies.
    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Movement between the two most recent closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementResult {
    /// Date of the most recent close
    pub latest_date: NaiveDate,
    /// Most recent close
    pub latest_close: Decimal,
    /// Date of the close before it
    pub previous_date: NaiveDate,
    /// Close before the most recent one
    pub previous_close: Decimal,
    /// latest - previous
    pub signed_difference: Decimal,
    /// |latest - previous|
    pub absolute_difference: Decimal,
    /// Signed change relative to the latest close, rounded to a whole percent
    pub percentage_change: Decimal,
    /// Up or down
    pub direction: Direction,
}

impl MovementResult {
    /// Absolute whole-percent change.
    pub fn abs_percentage(&self) -> Decimal {
        self.percentage_change.abs()
    }
}
