//! Shared helpers for tax calculations.

/// Rounds a value to exactly two decimal places, with ties rounding away
/// from zero.
///
/// This is a presentation-boundary helper: the engine itself returns
/// unrounded values so results stay composable without accumulated rounding
/// error.
///
/// # Examples
///
/// ```
/// use statetax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(123.454), 123.45);
/// assert_eq!(round_half_up(123.456), 123.46);
/// assert_eq!(round_half_up(-123.456), -123.46);
/// ```
pub fn round_half_up(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
