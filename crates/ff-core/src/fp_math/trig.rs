//! Trigonometry helpers.

use crate::real::Real;

/// Computes `(sin x, cos x)` in one call.
///
/// Uses the platform's combined routine through std, which is as accurate
/// as separate `sin` and `cos` calls.
///
/// ```rust
/// use ff_core::fp_math::sin_cos;
///
/// let (s, c) = sin_cos(0.0f64);
/// assert_eq!((s, c), (0.0, 1.0));
/// ```
#[inline]
pub fn sin_cos<T: Real>(x: T) -> (T, T) {
    x.sin_cos()
}
