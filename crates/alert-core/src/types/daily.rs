//! Daily OHLCV records and the provider-ordered series they arrive in.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// One trading day's snapshot for a ticker.
///
/// Uses Decimal so the provider's string prices survive parsing exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Trading date
    pub date: NaiveDate,
    /// Opening price
    pub open: Decimal,
    /// Highest price
    pub high: Decimal,
    /// Lowest price
    pub low: Decimal,
    /// Closing price
    pub close: Decimal,
    /// Trading volume
    pub volume: Decimal,
}

impl DailyRecord {
    /// Create a new record.
    pub fn new(
        date: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Create a record where only the close matters.
    pub fn from_close(date: NaiveDate, close: Decimal) -> Self {
        Self::new(date, close, close, close, close, Decimal::ZERO)
    }
}

/// Daily records for one symbol, in the order the provider returned them.
///
/// The provider is expected to list the most recent day first. Nothing is
/// re-sorted here; [`DailySeries::latest_pair`] checks the assumption instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeries {
    /// Symbol identifier
    pub symbol: String,
    records: Vec<DailyRecord>,
}

impl DailySeries {
    /// Create a series from records in provider order.
    pub fn new(symbol: impl Into<String>, records: Vec<DailyRecord>) -> Self {
        Self {
            symbol: symbol.into(),
            records,
        }
    }

    /// Get the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by recency rank (0 = most recent).
    pub fn get(&self, rank: usize) -> Option<&DailyRecord> {
        self.records.get(rank)
    }

    /// Get an iterator over the records, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &DailyRecord> {
        self.records.iter()
    }

    /// Check that every date is strictly earlier than the one listed before it.
    pub fn ensure_most_recent_first(&self) -> Result<(), InvalidInputError> {
        for pair in self.records.windows(2) {
            if pair[1].date >= pair[0].date {
                return Err(InvalidInputError::OrderingAssumptionViolated {
                    preceding: pair[0].date,
                    following: pair[1].date,
                });
            }
        }
        Ok(())
    }

    /// Return `(latest, previous)`, the two most recent trading days.
    pub fn latest_pair(&self) -> Result<(&DailyRecord, &DailyRecord), InvalidInputError> {
        match self.records.as_slice() {
            [latest, previous, ..] => {
                self.ensure_most_recent_first()?;
                Ok((latest, previous))
            }
            _ => Err(InvalidInputError::InsufficientHistory {
                required: 2,
                available: self.records.len(),
            }),
        }
    }
}
