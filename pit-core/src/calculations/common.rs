//! Shared rounding helpers for the regime calculators.

use rust_decimal::Decimal;

/// Rounds to the nearest whole naira, midpoints away from zero.
///
/// Totals are accumulated unrounded and only pass through here at final
/// result construction, so rounding error never compounds across brackets.
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(180000.4)), dec!(180000));
/// assert_eq!(round_whole(dec!(180000.5)), dec!(180001));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage to two decimal places, midpoints away from zero.
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
