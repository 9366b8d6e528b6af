use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `decimal_places` fractional digits, with ties rounding
/// away from zero.
///
/// The value is routed through its shortest decimal representation before
/// rounding, so ties are judged on the digits a user would see rather than on
/// the underlying binary expansion: `round_half_up(2.005, 2)` is `2.01`, not
/// the `2.0` a scaled binary round would produce.
///
/// Non-finite inputs are returned unchanged. The result is the same for the
/// same inputs on every call.
#[must_use]
pub fn round_half_up(value: f64, decimal_places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // `Display` for f64 is the shortest decimal string that round-trips.
    match value.to_string().parse::<Decimal>() {
        Ok(decimal) => decimal
            .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(value),
        Err(_) => {
            // Outside Decimal's range. Magnitudes above it have no fractional
            // digits to round; magnitudes below it need a scale past Decimal's
            // precision, so they round to zero unless the requested scale is
            // also past that precision.
            if value.abs() >= 1.0 || decimal_places > 28 {
                value
            } else {
                0.0
            }
        }
    }
}
