//! Basic point arithmetic.

use super::norm_tags::{FloatExponent, NormTag, PowerSumTag, RtExponent};
use crate::fp_math::trig::sin_cos;
use crate::point::Point;
use crate::real::Real;

/// Arithmetic over [`Point`]s.
///
/// Every function is pure apart from the explicitly mutable operand of the
/// `_eq` and in-place functions. Special values follow IEEE-754: dividing by
/// zero or normalizing the zero vector yields Inf/NaN, never an error.
///
/// # Numerics
///
/// - [`div_eq`](Self::div_eq) multiplies by the reciprocal for `N >= 2`,
///   so the last bit can differ from dividing each component
/// - [`dot_product`](Self::dot_product) accumulates with fused multiply-add
/// - [`angle_between`](Self::angle_between) uses the half-angle form
///   `2 * atan2(|a - b|, |a + b|)`, which stays accurate near 0 and pi
///   where `acos` of the normalized dot product does not
///
/// # Example
///
/// ```rust
/// use ff_core::{Point, PointMathBasic};
///
/// let a = Point::<3, f64>::new([1.0, 0.0, 0.0]);
/// let b = Point::<3, f64>::new([0.0, 2.0, 0.0]);
/// let angle = PointMathBasic::angle_between(&a, &b);
/// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
/// assert_eq!(PointMathBasic::cross_3d(&a, &b), Point::new([0.0, 0.0, 2.0]));
/// ```
#[derive(Debug)]
pub enum PointMathBasic {}

impl PointMathBasic {
    /// `left += right`
    #[inline]
    pub fn add_eq<const N: usize, T: Real>(left: &mut Point<N, T>, right: &Point<N, T>) {
        for (l, &r) in left.iter_mut().zip(right) {
            *l += r;
        }
    }

    /// `left -= right`
    #[inline]
    pub fn sub_eq<const N: usize, T: Real>(left: &mut Point<N, T>, right: &Point<N, T>) {
        for (l, &r) in left.iter_mut().zip(right) {
            *l -= r;
        }
    }

    /// `left *= right`
    #[inline]
    pub fn mul_eq<const N: usize, T: Real>(left: &mut Point<N, T>, right: T) {
        for l in left.iter_mut() {
            *l *= right;
        }
    }

    /// `left /= right`
    ///
    /// Multiplies by `1 / right` when `N >= 2`, divides directly for `N == 1`.
    #[inline]
    pub fn div_eq<const N: usize, T: Real>(left: &mut Point<N, T>, right: T) {
        if N >= 2 {
            Self::mul_eq(left, T::ONE / right);
        } else {
            for l in left.iter_mut() {
                *l /= right;
            }
        }
    }

    /// Component-wise `left *= right`.
    #[inline]
    pub fn component_mul_eq<const N: usize, T: Real>(left: &mut Point<N, T>, right: &Point<N, T>) {
        for (l, &r) in left.iter_mut().zip(right) {
            *l *= r;
        }
    }

    /// Component-wise `left /= right`.
    #[inline]
    pub fn component_div_eq<const N: usize, T: Real>(left: &mut Point<N, T>, right: &Point<N, T>) {
        for (l, &r) in left.iter_mut().zip(right) {
            *l /= r;
        }
    }

    /// Dot product, accumulated with fused multiply-add.
    #[inline]
    pub fn dot_product<const N: usize, T: Real>(left: &Point<N, T>, right: &Point<N, T>) -> T {
        left.iter()
            .zip(right)
            .fold(T::ZERO, |acc, (&l, &r)| l.mul_add(r, acc))
    }

    /// Unsigned angle between two vectors, in radians.
    ///
    /// In one dimension the result is 0 when the signs agree and pi
    /// otherwise. The sign bit decides, so `-0.0` and `0.0` are opposite.
    #[inline]
    pub fn angle_between<const N: usize, T: Real>(left: &Point<N, T>, right: &Point<N, T>) -> T {
        Self::angle::<false, N, T>(*left, *right)
    }

    /// [`angle_between`](Self::angle_between) for vectors known to have
    /// unit length, skipping the rescaling.
    #[inline]
    pub fn angle_between_unit<const N: usize, T: Real>(left: &Point<N, T>, right: &Point<N, T>) -> T {
        Self::angle::<true, N, T>(*left, *right)
    }

    fn angle<const UNIT: bool, const N: usize, T: Real>(mut left: Point<N, T>, mut right: Point<N, T>) -> T {
        if N == 1 {
            return if left[0].is_sign_negative() == right[0].is_sign_negative() {
                T::ZERO
            } else {
                T::PI
            };
        }
        if !UNIT {
            // Scale each by the other's length so both have length |a||b|
            let left_norm = Self::p_norm_int_ct::<2, N, T>(&left);
            let right_norm = Self::p_norm_int_ct::<2, N, T>(&right);
            Self::mul_eq(&mut left, right_norm);
            Self::mul_eq(&mut right, left_norm);
        }
        let mut diff = left;
        let mut sum = left;
        Self::sub_eq(&mut diff, &right);
        Self::add_eq(&mut sum, &right);
        T::TWO * Self::p_norm_int_ct::<2, N, T>(&diff).atan2(Self::p_norm_int_ct::<2, N, T>(&sum))
    }

    /// Scalar 2D cross product `l.x * r.y - l.y * r.x`.
    #[inline]
    pub fn cross_2d<T: Real>(left: &Point<2, T>, right: &Point<2, T>) -> T {
        left[0] * right[1] - left[1] * right[0]
    }

    /// 3D cross product.
    #[inline]
    pub fn cross_3d<T: Real>(left: &Point<3, T>, right: &Point<3, T>) -> Point<3, T> {
        Point::new([
            left[1] * right[2] - left[2] * right[1],
            left[2] * right[0] - left[0] * right[2],
            left[0] * right[1] - left[1] * right[0],
        ])
    }

    /// Linear interpolation, computed as `left + t * (right - left)`.
    #[inline]
    pub fn interpolate<const N: usize, T: Real>(left: &Point<N, T>, right: &Point<N, T>, t: T) -> Point<N, T> {
        let mut result = *left;
        for (out, (&l, &r)) in result.iter_mut().zip(left.iter().zip(right)) {
            *out = l + t * (r - l);
        }
        result
    }

    /// Midpoint, computed as `(left + right) / 2`.
    ///
    /// Not bit-identical to `interpolate(left, right, 0.5)` in general.
    #[inline]
    pub fn midpoint<const N: usize, T: Real>(left: &Point<N, T>, right: &Point<N, T>) -> Point<N, T> {
        let mut result = *left;
        for (out, &r) in result.iter_mut().zip(right) {
            *out = (*out + r) / T::TWO;
        }
        result
    }

    /// Replaces `point` with its projection onto `onto`.
    #[inline]
    pub fn project_onto<const N: usize, T: Real>(point: &mut Point<N, T>, onto: &Point<N, T>) {
        let scale = Self::dot_product(point, onto) / Self::p_norm_int_power_sum_ct::<2, N, T>(onto);
        Self::scale_into(point, onto, scale);
    }

    /// [`project_onto`](Self::project_onto) for a unit length `onto`.
    #[inline]
    pub fn project_onto_unit<const N: usize, T: Real>(point: &mut Point<N, T>, onto: &Point<N, T>) {
        let scale = Self::dot_product(point, onto);
        Self::scale_into(point, onto, scale);
    }

    fn scale_into<const N: usize, T: Real>(point: &mut Point<N, T>, onto: &Point<N, T>, scale: T) {
        for (p, &o) in point.iter_mut().zip(onto) {
            *p = scale * o;
        }
    }

    /// Replaces `point` with its reflection across the line along `axis`.
    #[inline]
    pub fn reflect_across<const N: usize, T: Real>(point: &mut Point<N, T>, axis: &Point<N, T>) {
        let scale = T::TWO * Self::dot_product(point, axis) / Self::p_norm_int_power_sum_ct::<2, N, T>(axis);
        Self::reflect_scaled(point, axis, scale);
    }

    /// [`reflect_across`](Self::reflect_across) for a unit length `axis`.
    #[inline]
    pub fn reflect_across_unit<const N: usize, T: Real>(point: &mut Point<N, T>, axis: &Point<N, T>) {
        let scale = T::TWO * Self::dot_product(point, axis);
        Self::reflect_scaled(point, axis, scale);
    }

    fn reflect_scaled<const N: usize, T: Real>(point: &mut Point<N, T>, axis: &Point<N, T>, scale: T) {
        for (p, &a) in point.iter_mut().zip(axis) {
            *p = scale * a - *p;
        }
    }

    /// Rotates `(x, y)` counterclockwise by `angle` radians.
    #[inline]
    pub fn rotate_2d<T: Real>(x: &mut T, y: &mut T, angle: T) {
        let (sin_a, cos_a) = sin_cos(angle);
        let (old_x, old_y) = (*x, *y);
        *x = old_x * cos_a - old_y * sin_a;
        *y = old_x * sin_a + old_y * cos_a;
    }

    /// Returns `(sin, cos, radius)` of the polar form of `(x, y)`.
    #[inline]
    pub fn sin_cos_rad_2d<T: Real>(x: T, y: T) -> (T, T, T) {
        let radius = Self::p_norm_int_ct::<2, 2, T>(&Point::new([x, y]));
        (y / radius, x / radius, radius)
    }

    /// Norm of `point` selected by `tag`.
    #[inline]
    pub fn norm<const N: usize, T: Real, Tag: NormTag>(point: &Point<N, T>, tag: Tag) -> T {
        tag.norm(point)
    }

    /// Power sum `sum |x_i|^p` of `point` selected by `tag`.
    #[inline]
    pub fn norm_power_sum<const N: usize, T: Real, Tag: PowerSumTag>(point: &Point<N, T>, tag: Tag) -> T {
        tag.power_sum(point)
    }

    pub(crate) fn p_norm_int_power_sum_ct<const P: u32, const N: usize, T: Real>(point: &Point<N, T>) -> T {
        const { assert!(P >= 1, "norm exponent must be at least 1") };
        match P {
            1 => point.iter().fold(T::ZERO, |acc, &x| acc + x.abs()),
            2 => point.iter().fold(T::ZERO, |acc, &x| x.mul_add(x, acc)),
            _ => {
                let p = T::cast_from(P);
                if P % 2 == 0 {
                    point.iter().fold(T::ZERO, |acc, &x| acc + x.powf(p))
                } else {
                    point.iter().fold(T::ZERO, |acc, &x| acc + x.abs().powf(p))
                }
            }
        }
    }

    pub(crate) fn p_norm_int_ct<const P: u32, const N: usize, T: Real>(point: &Point<N, T>) -> T {
        let sum = Self::p_norm_int_power_sum_ct::<P, N, T>(point);
        match P {
            1 => sum,
            2 => sum.sqrt(),
            3 => sum.cbrt(),
            _ => sum.powf(T::ONE / T::cast_from(P)),
        }
    }

    pub(crate) fn p_norm_int_power_sum_rt<const N: usize, T: Real, P: RtExponent>(point: &Point<N, T>, p: P) -> T {
        let p = T::cast_from(p);
        point.iter().fold(T::ZERO, |acc, &x| acc + x.abs().powf(p))
    }

    pub(crate) fn p_norm_int_rt<const N: usize, T: Real, P: RtExponent>(point: &Point<N, T>, p: P) -> T {
        let inv_p = T::ONE / T::cast_from(p);
        Self::p_norm_int_power_sum_rt(point, p).powf(inv_p)
    }

    pub(crate) fn max_norm<const N: usize, T: Real>(point: &Point<N, T>) -> T {
        point.iter().fold(T::ZERO, |acc, &x| acc.max(x.abs()))
    }

    pub(crate) fn p_norm_float_power_sum_ct<E: FloatExponent, const N: usize, T: Real>(point: &Point<N, T>) -> T {
        const { assert!(E::P >= 1.0, "norm exponent must be at least 1") };
        Self::p_norm_float_power_sum_rt(point, T::from_f64(E::P))
    }

    pub(crate) fn p_norm_float_ct<E: FloatExponent, const N: usize, T: Real>(point: &Point<N, T>) -> T {
        let inv_p = T::ONE / T::from_f64(E::P);
        Self::p_norm_float_power_sum_ct::<E, N, T>(point).powf(inv_p)
    }

    pub(crate) fn p_norm_float_power_sum_rt<const N: usize, T: Real>(point: &Point<N, T>, p: T) -> T {
        point.iter().fold(T::ZERO, |acc, &x| acc + x.abs().powf(p))
    }

    pub(crate) fn p_norm_float_rt<const N: usize, T: Real>(point: &Point<N, T>, p: T) -> T {
        Self::p_norm_float_power_sum_rt(point, p).powf(T::ONE / p)
    }
}
