//! Conversions from SI units to display units.
//!
//! Display values are rounded to one decimal place. SI values are kept
//! unrounded on the owning types for any downstream computation.

/// Miles per metre.
pub const MILES_PER_METER: f64 = 0.000_621_371;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Convert metres to miles, rounded to one decimal.
///
/// # Examples
/// ```
/// use evacroute_core::units::meters_to_miles;
///
/// assert_eq!(meters_to_miles(1_609.344), 1.0);
/// assert_eq!(meters_to_miles(150.0), 0.1);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "unit conversion is inherently floating point"
)]
pub fn meters_to_miles(meters: f64) -> f64 {
    round_to_tenth(meters * MILES_PER_METER)
}

/// Convert seconds to minutes, rounded to one decimal.
///
/// # Examples
/// ```
/// use evacroute_core::units::seconds_to_minutes;
///
/// assert_eq!(seconds_to_minutes(300.0), 5.0);
/// assert_eq!(seconds_to_minutes(100.0), 1.7);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "unit conversion is inherently floating point"
)]
pub fn seconds_to_minutes(seconds: f64) -> f64 {
    round_to_tenth(seconds / SECONDS_PER_MINUTE)
}

/// Round half away from zero at the first decimal.
#[expect(
    clippy::float_arithmetic,
    reason = "decimal rounding is inherently floating point"
)]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
