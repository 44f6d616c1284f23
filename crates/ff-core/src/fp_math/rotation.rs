//! Fixed rotations in the plane.

use crate::fp_math::trig::sin_cos;
use crate::point::Point;
use crate::real::Real;

/// A rotation by a fixed angle, counterclockwise in the standard plane.
///
/// The sine and cosine are computed once at construction, so applying the
/// rotation to many points costs four multiplies and two adds each.
///
/// ```rust
/// use ff_core::fp_math::Rotation2d;
///
/// let rot = Rotation2d::new(std::f64::consts::FRAC_PI_2);
/// let (x, y) = rot.rotate(1.0, 0.0);
/// assert!(x.abs() < 1e-15);
/// assert!((y - 1.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation2d<T: Real> {
    sin_theta: T,
    cos_theta: T,
}

impl<T: Real> Rotation2d<T> {
    /// Creates a rotation by `theta` radians.
    pub fn new(theta: T) -> Self {
        let (sin_theta, cos_theta) = sin_cos(theta);
        Self { sin_theta, cos_theta }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Self {
            sin_theta: T::ZERO,
            cos_theta: T::ONE,
        }
    }

    /// `sin(theta)`.
    #[inline]
    pub fn sin_theta(&self) -> T {
        self.sin_theta
    }

    /// `cos(theta)`.
    #[inline]
    pub fn cos_theta(&self) -> T {
        self.cos_theta
    }

    /// Rotates `(x, y)` in place.
    #[inline]
    pub fn apply(&self, x: &mut T, y: &mut T) {
        (*x, *y) = self.rotate(*x, *y);
    }

    /// Returns `(x, y)` rotated.
    #[inline]
    pub fn rotate(&self, x: T, y: T) -> (T, T) {
        (
            x * self.cos_theta - y * self.sin_theta,
            x * self.sin_theta + y * self.cos_theta,
        )
    }

    /// Rotates a 2D point in place.
    #[inline]
    pub fn apply_point(&self, p: &mut Point<2, T>) {
        let [x, y] = p.data_mut();
        self.apply(x, y);
    }

    /// The inverse rotation, by `-theta`.
    pub fn inverse(&self) -> Self {
        Self {
            sin_theta: -self.sin_theta,
            cos_theta: self.cos_theta,
        }
    }
}

impl<T: Real> Default for Rotation2d<T> {
    fn default() -> Self {
        Self::identity()
    }
}
