//! Operators and convenience methods on [`Point`].
//!
//! Everything here forwards to [`PointMathBasic`], so `a / s` has the same
//! reciprocal rule as [`PointMathBasic::div_eq`].

use super::PointMathBasic;
use super::norm_tags::{L2Norm, NormTag, PowerSumTag};
use crate::point::Point;
use crate::real::Real;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Point + Point
impl<const N: usize, T: Real> Add for Point<N, T> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        PointMathBasic::add_eq(&mut self, &rhs);
        self
    }
}

// Point - Point
impl<const N: usize, T: Real> Sub for Point<N, T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        PointMathBasic::sub_eq(&mut self, &rhs);
        self
    }
}

// Point * scalar
impl<const N: usize, T: Real> Mul<T> for Point<N, T> {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: T) -> Self {
        PointMathBasic::mul_eq(&mut self, rhs);
        self
    }
}

// scalar * Point
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Point<N, $t>> for $t {
                type Output = Point<N, $t>;

                #[inline]
                fn mul(self, rhs: Point<N, $t>) -> Point<N, $t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);

// Point / scalar
impl<const N: usize, T: Real> Div<T> for Point<N, T> {
    type Output = Self;

    #[inline]
    fn div(mut self, rhs: T) -> Self {
        PointMathBasic::div_eq(&mut self, rhs);
        self
    }
}

// -Point
impl<const N: usize, T: Real> Neg for Point<N, T> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self {
        for c in self.iter_mut() {
            *c = -*c;
        }
        self
    }
}

impl<const N: usize, T: Real> AddAssign for Point<N, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        PointMathBasic::add_eq(self, &rhs);
    }
}

impl<const N: usize, T: Real> SubAssign for Point<N, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        PointMathBasic::sub_eq(self, &rhs);
    }
}

impl<const N: usize, T: Real> MulAssign<T> for Point<N, T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        PointMathBasic::mul_eq(self, rhs);
    }
}

impl<const N: usize, T: Real> DivAssign<T> for Point<N, T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        PointMathBasic::div_eq(self, rhs);
    }
}

impl<const N: usize, T: Real> Point<N, T> {
    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        PointMathBasic::dot_product(self, other)
    }

    /// Component-wise product.
    #[inline]
    pub fn component_mul(mut self, other: &Self) -> Self {
        PointMathBasic::component_mul_eq(&mut self, other);
        self
    }

    /// Component-wise quotient.
    #[inline]
    pub fn component_div(mut self, other: &Self) -> Self {
        PointMathBasic::component_div_eq(&mut self, other);
        self
    }

    /// Norm selected by `tag`.
    ///
    /// ```rust
    /// use ff_core::{InfNorm, Point};
    ///
    /// let p = Point::<3, f32>::new([1.0, -5.0, 2.0]);
    /// assert_eq!(p.norm(InfNorm), 5.0);
    /// ```
    #[inline]
    pub fn norm<Tag: NormTag>(&self, tag: Tag) -> T {
        PointMathBasic::norm(self, tag)
    }

    /// Power sum selected by `tag`.
    #[inline]
    pub fn norm_power_sum<Tag: PowerSumTag>(&self, tag: Tag) -> T {
        PointMathBasic::norm_power_sum(self, tag)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> T {
        PointMathBasic::norm(self, L2Norm::new())
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn length_squared(&self) -> T {
        PointMathBasic::norm_power_sum(self, L2Norm::new())
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).length()
    }

    /// Scales to unit length. The zero vector becomes NaN.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        self / len
    }

    /// Linear interpolation towards `other`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        PointMathBasic::interpolate(self, other, t)
    }

    /// Midpoint with `other`.
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        PointMathBasic::midpoint(self, other)
    }

    /// Unsigned angle to `other`, in radians.
    #[inline]
    pub fn angle_to(&self, other: &Self) -> T {
        PointMathBasic::angle_between(self, other)
    }

    /// Projection onto `onto`.
    #[inline]
    pub fn project_onto(mut self, onto: &Self) -> Self {
        PointMathBasic::project_onto(&mut self, onto);
        self
    }

    /// Reflection across the line along `axis`.
    #[inline]
    pub fn reflect_across(mut self, axis: &Self) -> Self {
        PointMathBasic::reflect_across(&mut self, axis);
        self
    }
}

impl<T: Real> Point<2, T> {
    /// Scalar cross product.
    #[inline]
    pub fn cross(&self, other: &Self) -> T {
        PointMathBasic::cross_2d(self, other)
    }

    /// Rotated counterclockwise by `angle` radians.
    #[inline]
    pub fn rotated(self, angle: T) -> Self {
        let [mut x, mut y] = self.into_array();
        PointMathBasic::rotate_2d(&mut x, &mut y, angle);
        Self::new([x, y])
    }
}

impl<T: Real> Point<3, T> {
    /// Cross product.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        PointMathBasic::cross_3d(self, other)
    }
}
