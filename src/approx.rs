//! Approximate numeric equality.
//!
//! Metrics that travel through aggregation, sampling, or a float codec
//! rarely reproduce bit-for-bit, so dashboards and tests compare them by
//! ratio: two numbers are "the same" when dividing one by the other lands
//! close enough to 1.

/// Default tolerance for [`approx_equal`]: one percent.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// [`approx_equal_within`] at the default one percent tolerance.
#[must_use]
pub fn approx_equal(x: f64, y: f64) -> bool {
    approx_equal_within(x, y, DEFAULT_TOLERANCE)
}

/// Returns true if `x / y` lies strictly inside
/// `(1 - tolerance, 1 + tolerance)`.
///
/// Exact equality short-circuits before any division, which settles
/// `0 / 0`; a remaining zero denominator is recovered by taking the
/// reciprocal ratio `y / x` instead. No zero-valued input can make this
/// raise. The window is symmetric around 1 and exclusive at both bounds,
/// so a ratio exactly on the edge does not count as equal.
///
/// # Examples
///
/// ```
/// use lookout_core::{approx_equal, approx_equal_within};
///
/// assert!(approx_equal(100.0, 100.5));
/// assert!(!approx_equal(1.0, 2.0));
/// assert!(approx_equal_within(10.0, 14.0, 0.5));
/// assert!(!approx_equal_within(1.0, 100.0, 0.5));
/// assert!(approx_equal(0.0, 0.0));
/// assert!(!approx_equal(1.0, 0.0));
/// ```
#[must_use]
pub fn approx_equal_within(x: f64, y: f64, tolerance: f64) -> bool {
    if x == y {
        return true;
    }
    let ratio = if y == 0.0 { y / x } else { x / y };
    (1.0 - tolerance) < ratio && ratio < (1.0 + tolerance)
}
