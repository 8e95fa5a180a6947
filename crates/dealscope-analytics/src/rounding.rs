//! Rounding shared by the risk score, grading messages and report output.
//!
//! Both functions round the exact binary value of the input. The float is
//! converted to a [`Decimal`] first, so `6.05` (stored as `6.0499999...`)
//! stays below the tie instead of being nudged onto it by scaling.

use rust_decimal::prelude::*;

/// Rounds to the nearest integer with ties toward positive infinity.
///
/// `-2.5` rounds to `-2` and `2.5` to `3`; `f64::round` would give `-3`.
pub fn round_half_up(value: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        // Non-finite, or too large to carry a fraction
        return value;
    };
    let strategy = if exact.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    exact
        .round_dp_with_strategy(0, strategy)
        .to_f64()
        .unwrap_or(value)
}

/// Formats with a fixed number of decimals, ties away from zero.
///
/// `format!("{:.1}", 8.25)` gives `8.2` because the exact binary value is
/// rounded half to even; report text expects `8.3`.
pub fn fixed(value: f64, decimals: usize) -> String {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return format!("{value:.decimals$}");
    };
    let dp = u32::try_from(decimals).unwrap_or(u32::MAX);
    let mut rounded = exact.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    format!("{rounded:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(4.4), 4.0);
        assert_eq!(round_half_up(-617.6), -618.0);
        assert_eq!(round_half_up(13.5), 14.0);
    }

    #[test]
    fn test_just_below_half_rounds_down() {
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(-0.5000000000000001), -1.0);
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(8.25, 1), "8.3");
        assert_eq!(fixed(-8.25, 1), "-8.3");
        assert_eq!(fixed(4.106666666666667, 1), "4.1");
        assert_eq!(fixed(0.7134974615672066, 2), "0.71");
        assert_eq!(fixed(999.0, 2), "999.00");
        assert_eq!(fixed(-0.01, 1), "0.0");
        assert_eq!(fixed(13.392857142857142, 2), "13.39");
    }

    #[test]
    fn test_fixed_uses_exact_binary_value() {
        // Each literal is stored slightly below its decimal tie
        assert_eq!(fixed(6.05, 1), "6.0");
        assert_eq!(fixed(2.675, 2), "2.67");
        assert_eq!(fixed(1.45, 1), "1.4");
        assert_eq!(fixed(1.335, 2), "1.33");
    }

    #[test]
    fn test_fixed_non_finite() {
        assert_eq!(fixed(f64::INFINITY, 1), "inf");
        assert_eq!(fixed(f64::NAN, 2), "NaN");
    }
}
