//! Floating point element types.
//!
//! [`Real`] is implemented for exactly two types, `f32` and `f64`. The trait
//! is sealed: points of integers, booleans or wider floats are rejected by
//! the type checker.
//!
//! # Constants
//!
//! Every implementation carries the nearest representable value of the
//! constants the point math needs in its inner loops:
//!
//! - [`EPSILON`](Real::EPSILON) - difference between 1.0 and the next float
//! - [`PI`](Real::PI), [`E`](Real::E)
//!
//! The larger tables (multiples of pi, roots of small integers) live in
//! [`crate::fp_math::constants`].
//!
//! # Conversions
//!
//! [`AsReal`] is the numeric cast used by point constructors. It has `as`
//! semantics: narrowing is allowed and rounds to nearest.
//!
//! ```rust
//! use ff_core::AsReal;
//!
//! let x: f32 = 0.1f64.as_real();
//! assert_eq!(x, 0.1f32);
//! let n: f64 = 7u8.as_real();
//! assert_eq!(n, 7.0);
//! ```

use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating point element type for points.
///
/// # Example
///
/// ```rust
/// use ff_core::Real;
///
/// fn hypot<T: Real>(x: T, y: T) -> T {
///     x.mul_add(x, y * y).sqrt()
/// }
///
/// assert_eq!(hypot(3.0f32, 4.0), 5.0);
/// assert_eq!(f64::NAME, "f64");
/// ```
pub trait Real:
    sealed::Sealed
    + Copy
    + Clone
    + Default
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + bytemuck::Pod
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + AsReal<Self>
    + 'static
{
    /// Type name, for diagnostics.
    const NAME: &'static str;

    /// Storage size in bits.
    const BITS: u32;

    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// The value 2.
    const TWO: Self;

    /// The value 0.5.
    const HALF: Self;

    /// Machine epsilon, the difference between 1.0 and the next float.
    ///
    /// The relative error of rounding a real number into this type is at most
    /// half of this, as long as the exponent is in range.
    const EPSILON: Self;

    /// Nearest representable value of pi.
    const PI: Self;

    /// Nearest representable value of e.
    const E: Self;

    /// Selects the literal written for this type.
    ///
    /// Tables of constants store a separately rounded literal per type, since
    /// rounding the `f64` value to `f32` can differ from the nearest `f32`.
    fn pick(single: f32, double: f64) -> Self;

    /// Converts a primitive number with `as` semantics.
    fn cast_from<U: AsReal<f32> + AsReal<f64>>(value: U) -> Self;

    /// Converts from `f64` with `as` semantics.
    fn from_f64(value: f64) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Cube root.
    fn cbrt(self) -> Self;

    /// Raises to a floating point power.
    fn powf(self, p: Self) -> Self;

    /// Fused multiply-add, `self * a + b` with a single rounding.
    fn mul_add(self, a: Self, b: Self) -> Self;

    /// Four quadrant arctangent of `self / x`.
    fn atan2(self, x: Self) -> Self;

    /// Arccosine.
    fn acos(self) -> Self;

    /// Sine.
    fn sin(self) -> Self;

    /// Cosine.
    fn cos(self) -> Self;

    /// Simultaneous sine and cosine.
    fn sin_cos(self) -> (Self, Self);

    /// Maximum, ignoring NaN.
    fn max(self, other: Self) -> Self;

    /// Clamps to `[min, max]`.
    fn clamp(self, min: Self, max: Self) -> Self;

    /// Reciprocal, `1 / self`.
    fn recip(self) -> Self;

    /// Returns `true` if the sign bit is set (including `-0.0`).
    fn is_sign_negative(self) -> bool;

    /// Returns `true` if NaN.
    fn is_nan(self) -> bool;
}

macro_rules! impl_real {
    (
        $t:ident,
        $bits:expr,
        eps = $eps:expr,
        pi = $pi:expr,
        e = $e:expr,
        pick = |$single:ident, $double:ident| $picked:expr
    ) => {
        impl Real for $t {
            const NAME: &'static str = stringify!($t);
            const BITS: u32 = $bits;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const EPSILON: Self = $eps;
            const PI: Self = $pi;
            const E: Self = $e;

            #[inline]
            fn pick($single: f32, $double: f64) -> Self {
                $picked
            }

            #[inline]
            fn cast_from<U: AsReal<f32> + AsReal<f64>>(value: U) -> Self {
                AsReal::<$t>::as_real(value)
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn abs(self) -> Self {
                $t::abs(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline]
            fn cbrt(self) -> Self {
                $t::cbrt(self)
            }

            #[inline]
            fn powf(self, p: Self) -> Self {
                $t::powf(self, p)
            }

            #[inline]
            fn mul_add(self, a: Self, b: Self) -> Self {
                $t::mul_add(self, a, b)
            }

            #[inline]
            fn atan2(self, x: Self) -> Self {
                $t::atan2(self, x)
            }

            #[inline]
            fn acos(self) -> Self {
                $t::acos(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $t::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $t::cos(self)
            }

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                $t::sin_cos(self)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                $t::max(self, other)
            }

            #[inline]
            fn clamp(self, min: Self, max: Self) -> Self {
                $t::clamp(self, min, max)
            }

            #[inline]
            fn recip(self) -> Self {
                $t::recip(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                $t::is_sign_negative(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }
        }
    };
}

impl_real!(
    f32,
    32,
    eps = 1.19209290e-7,
    pi = 3.1415927,
    e = 2.7182818,
    pick = |single, _double| single
);
impl_real!(
    f64,
    64,
    eps = 2.2204460492503131e-16,
    pi = 3.141592653589793,
    e = 2.718281828459045,
    pick = |_single, double| double
);

/// Numeric cast into a [`Real`] element type.
///
/// Implemented for every primitive integer and float type, so point
/// constructors accept `[1, 2, 3]` as readily as `[1.0, 2.0, 3.0]`.
/// `bool` is deliberately not convertible.
pub trait AsReal<T>: Copy {
    /// Converts with `as` semantics.
    fn as_real(self) -> T;
}

macro_rules! impl_as_real {
    ($($src:ty),* $(,)?) => {
        $(
            impl AsReal<f32> for $src {
                #[inline]
                fn as_real(self) -> f32 {
                    self as f32
                }
            }

            impl AsReal<f64> for $src {
                #[inline]
                fn as_real(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_as_real!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
