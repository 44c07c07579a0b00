//! Common utility functions for the calculators.
//!
//! This module provides shared functionality used across the formula
//! engines: display rounding, clamping of out-of-range input and share
//! computations.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calk_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to whole som, the precision the salary and pension pages display.
///
/// ```
/// use rust_decimal_macros::dec;
/// use calk_core::calculations::common::round_som;
///
/// assert_eq!(round_som(dec!(40500.49)), dec!(40500));
/// assert_eq!(round_som(dec!(40500.50)), dec!(40501));
/// ```
pub fn round_som(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a negative amount to zero, logging the offending field.
pub fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Decimal {
    if value < Decimal::ZERO {
        warn!(field, value = %value, "negative amount clamped to zero");
        return Decimal::ZERO;
    }
    value
}

/// Percentage that `part` makes up of `whole`, or zero when `whole` is zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use calk_core::calculations::common::share_percent;
///
/// assert_eq!(share_percent(dec!(5000), dec!(50000)), dec!(10));
/// assert_eq!(share_percent(dec!(5000), dec!(0)), dec!(0));
/// ```
pub fn share_percent(
    part: Decimal,
    whole: Decimal,
) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part / whole * Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(170.255));

        assert_eq!(result, dec!(170.26));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(121.50));

        assert_eq!(result, dec!(121.50));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // round_som tests
    // =========================================================================

    #[test]
    fn round_som_rounds_fraction_above_half_up() {
        let result = round_som(dec!(3026.666666));

        assert_eq!(result, dec!(3027));
    }

    #[test]
    fn round_som_keeps_whole_values() {
        let result = round_som(dec!(4500));

        assert_eq!(result, dec!(4500));
    }

    // =========================================================================
    // non_negative tests
    // =========================================================================

    #[test]
    fn non_negative_passes_positive_values_through() {
        let result = non_negative("gross", dec!(100.25));

        assert_eq!(result, dec!(100.25));
    }

    #[test]
    fn non_negative_clamps_negative_values() {
        let result = non_negative("gross", dec!(-1));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn non_negative_keeps_zero() {
        let result = non_negative("gross", Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }

    // =========================================================================
    // share_percent tests
    // =========================================================================

    #[test]
    fn share_percent_computes_fraction_of_whole() {
        let result = share_percent(dec!(121.5), dec!(170.25));

        assert_eq!(round_half_up(result), dec!(71.37));
    }

    #[test]
    fn share_percent_returns_zero_for_empty_whole() {
        let result = share_percent(dec!(10), Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }
}
