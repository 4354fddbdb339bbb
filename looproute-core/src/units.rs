//! Distance unit conversion.
//!
//! All search arithmetic runs in the oracle's native metres; miles appear
//! only at the reporting boundary.

/// Multiply a metre value by this constant to obtain miles.
pub const METERS_TO_MILES: f64 = 0.000_621_371;

/// Convert metres to miles, rounded to two decimal places.
///
/// # Examples
/// ```
/// use looproute_core::units::meters_to_miles;
///
/// assert_eq!(meters_to_miles(1609.34), 1.00);
/// ```
#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    round_to_hundredths(meters * METERS_TO_MILES)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
