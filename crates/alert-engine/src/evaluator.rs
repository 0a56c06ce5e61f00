//! Close-to-close movement evaluation.

use alert_core::error::InvalidInputError;
use alert_core::types::{DailyRecord, Direction, MovementResult};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Default notification threshold in whole percent.
pub const DEFAULT_THRESHOLD_PCT: Decimal = dec!(5);

/// Outcome of comparing the two most recent closes against a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Whether the rounded move strictly exceeds the threshold
    pub should_notify: bool,
    /// The computed movement
    pub result: MovementResult,
}

/// Compare `latest` against `previous` and decide whether to notify.
///
/// The percentage is taken relative to the *latest* close and rounded to a
/// whole percent, ties away from zero. Notification needs
/// `|percentage| > threshold_pct`, so a move equal to the threshold is quiet.
///
/// # Errors
/// [`InvalidInputError::ZeroClose`] when the latest close is zero, and
/// [`InvalidInputError::PercentageOverflow`] when the change does not fit a `Decimal`.
pub fn evaluate(
    latest: &DailyRecord,
    previous: &DailyRecord,
    threshold_pct: Decimal,
) -> Result<Evaluation, InvalidInputError> {
    if latest.close.is_zero() {
        return Err(InvalidInputError::ZeroClose { date: latest.date });
    }

    let overflow = || InvalidInputError::PercentageOverflow { date: latest.date };
    let signed_difference = latest.close.checked_sub(previous.close).ok_or_else(overflow)?;
    let percentage_change = signed_difference
        .checked_div(latest.close)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or_else(overflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let result = MovementResult {
        latest_date: latest.date,
        latest_close: latest.close,
        previous_date: previous.date,
        previous_close: previous.close,
        signed_difference,
        absolute_difference: signed_difference.abs(),
        percentage_change,
        direction: Direction::from_change(signed_difference),
    };

    Ok(Evaluation {
        should_notify: percentage_change.abs() > threshold_pct,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, close: Decimal) -> DailyRecord {
        DailyRecord::from_close(NaiveDate::from_ymd_opt(2024, 6, day).unwrap(), close)
    }

    fn eval(latest: Decimal, previous: Decimal) -> Evaluation {
        evaluate(
            &record(14, latest),
            &record(13, previous),
            DEFAULT_THRESHOLD_PCT,
        )
        .unwrap()
    }

    #[test]
    fn test_exactly_threshold_is_quiet() {
        let evaluation = eval(dec!(105.00), dec!(100.00));

        assert_eq!(evaluation.result.percentage_change, dec!(5));
        assert_eq!(evaluation.result.direction, Direction::Up);
        assert!(!evaluation.should_notify);
    }

    #[test]
    fn test_rise_above_threshold() {
        let evaluation = eval(dec!(106.00), dec!(100.00));

        assert_eq!(evaluation.result.percentage_change, dec!(6));
        assert_eq!(evaluation.result.direction, Direction::Up);
        assert_eq!(evaluation.result.signed_difference, dec!(6));
        assert_eq!(evaluation.result.absolute_difference, dec!(6));
        assert!(evaluation.should_notify);
    }

    #[test]
    fn test_drop_above_threshold() {
        let evaluation = eval(dec!(94.00), dec!(100.00));

        assert_eq!(evaluation.result.percentage_change, dec!(-6));
        assert_eq!(evaluation.result.direction, Direction::Down);
        assert_eq!(evaluation.result.signed_difference, dec!(-6));
        assert_eq!(evaluation.result.absolute_difference, dec!(6));
        assert!(evaluation.should_notify);
    }

    #[test]
    fn test_divides_by_latest_close() {
        // 10 / 90 = 11.1% against the latest close, 10% against the older one
        let evaluation = eval(dec!(90), dec!(100));
        assert_eq!(evaluation.result.percentage_change, dec!(-11));
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 1 / 200 * 100 = 0.5 exactly
        assert_eq!(eval(dec!(200), dec!(199)).result.percentage_change, dec!(1));
        assert_eq!(eval(dec!(200), dec!(201)).result.percentage_change, dec!(-1));
        // 5.5 exactly: 11 / 200 * 100
        assert_eq!(eval(dec!(200), dec!(189)).result.percentage_change, dec!(6));
        // just under the tie
        let under = eval(dec!(200), dec!(199.01)).result.percentage_change;
        assert_eq!(under, dec!(0));
        assert_eq!(under.to_string(), "0");
        assert_eq!(eval(dec!(200), dec!(200.99)).result.percentage_change.to_string(), "0");
    }

    #[test]
    fn test_rounded_tie_can_cross_threshold() {
        // 5.5% rounds to 6, which exceeds 5
        assert!(eval(dec!(200), dec!(189)).should_notify);
        // 5.4% rounds to 5, which does not
        assert!(!eval(dec!(500), dec!(473)).should_notify);
    }

    #[test]
    fn test_unchanged_close_is_down() {
        let evaluation = eval(dec!(100), dec!(100));

        assert_eq!(evaluation.result.direction, Direction::Down);
        assert_eq!(evaluation.result.percentage_change, Decimal::ZERO);
        assert!(!evaluation.should_notify);
    }

    #[test]
    fn test_custom_threshold() {
        let evaluation = evaluate(&record(14, dec!(103)), &record(13, dec!(100)), dec!(2)).unwrap();
        assert_eq!(evaluation.result.percentage_change, dec!(3));
        assert!(evaluation.should_notify);

        let evaluation = evaluate(&record(14, dec!(103)), &record(13, dec!(100)), dec!(3)).unwrap();
        assert!(!evaluation.should_notify);
    }

    #[test]
    fn test_zero_latest_close() {
        let err = evaluate(&record(14, Decimal::ZERO), &record(13, dec!(100)), dec!(5)).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::ZeroClose {
                date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
            }
        );
    }

    #[test]
    fn test_tiny_latest_close_overflows_without_panicking() {
        let err = evaluate(
            &record(14, dec!(0.00000000000000000001)),
            &record(13, dec!(100000000)),
            dec!(5),
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::PercentageOverflow {
                date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
            }
        );
    }

    #[test]
    fn test_zero_previous_close_is_fine() {
        let evaluation = eval(dec!(50), Decimal::ZERO);
        assert_eq!(evaluation.result.percentage_change, dec!(100));
        assert!(evaluation.should_notify);
    }
}
