//! Norm selection tags.
//!
//! A norm tag is a small value that picks one of the norm implementations in
//! [`PointMathBasic`]. Passing a tag instead of calling a named function
//! keeps one entry point while the exponent still selects the fast path at
//! compile time.
//!
//! | tag | exponent | checked |
//! |-----|----------|---------|
//! | [`PNormIntCt<P>`] | `u32` const generic | `P >= 1` at compile time |
//! | [`PNormFloatCt<E>`] | `f64` carried by a [`FloatExponent`] type | `P >= 1.0` at compile time |
//! | [`PNormRt<P>`] | any primitive integer or float value | not checked |
//! | [`InfNorm`] | none (max of absolute values) | - |
//!
//! The run-time tag accepts `p < 1` on purpose. Such a "norm" violates the
//! triangle inequality, which callers must keep in mind.
//!
//! [`NormKind`] is the closed run-time alternative for code that picks the
//! norm from user input.
//!
//! # Usage
//!
//! ```rust
//! use ff_core::{float_exponent, InfNorm, L1Norm, PNormFloatCt, PNormRt, Point, PointMathBasic};
//!
//! float_exponent!(ThreeHalves = 1.5);
//!
//! let p = Point::<2, f64>::new([3.0, -4.0]);
//! assert_eq!(PointMathBasic::norm(&p, L1Norm::new()), 7.0);
//! assert_eq!(PointMathBasic::norm(&p, InfNorm), 4.0);
//! assert_eq!(PointMathBasic::norm(&p, PNormRt::new(2)), 5.0);
//!
//! let sum = PointMathBasic::norm_power_sum(&p, PNormFloatCt::<ThreeHalves>::new());
//! assert!((sum - (27f64.sqrt() + 8.0)).abs() < 1e-12);
//! ```

use super::PointMathBasic;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::real::{AsReal, Real};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Selects a norm for [`PointMathBasic::norm`].
pub trait NormTag: Copy + fmt::Debug {
    /// Computes the norm of `point`.
    fn norm<const N: usize, T: Real>(&self, point: &Point<N, T>) -> T;
}

/// A norm tag whose norm is a root of a power sum.
///
/// Not implemented for [`InfNorm`], so asking for its power sum is a compile
/// error:
///
/// ```compile_fail
/// use ff_core::{InfNorm, Point, PointMathBasic};
///
/// let p = Point::<2, f32>::zero();
/// let _ = PointMathBasic::norm_power_sum(&p, InfNorm);
/// ```
pub trait PowerSumTag: NormTag {
    /// Computes `sum |x_i|^p` of `point`.
    fn power_sum<const N: usize, T: Real>(&self, point: &Point<N, T>) -> T;
}

/// Lp norm with an integer exponent known at compile time.
///
/// Exponents 1, 2 and 3 have dedicated fast paths.
///
/// ```compile_fail
/// use ff_core::{PNormIntCt, Point, PointMathBasic};
///
/// let p = Point::<2, f32>::zero();
/// let _ = PointMathBasic::norm(&p, PNormIntCt::<0>);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PNormIntCt<const P: u32>;

impl<const P: u32> PNormIntCt<P> {
    /// The exponent.
    pub const EXPONENT: u32 = P;

    /// Creates the tag.
    pub const fn new() -> Self {
        const { assert!(P >= 1, "norm exponent must be at least 1") };
        Self
    }
}

impl<const P: u32> NormTag for PNormIntCt<P> {
    #[inline]
    fn norm<const N: usize, T: Real>(&self, point: &Point<N, T>) -> T {
        PointMathBasic::p_norm_int_ct::<P, N, T>(point)
    }
}

impl<const P: u32> PowerSumTag for PNormIntCt<P> {
    #[inline]
    fn power_sum<const N: usize, T: Real>(&self, point: &Point<N, T>) -> T {
        PointMathBasic::p_norm_int_power_sum_ct::<P, N, T>(point)
    }
}

/// A floating point exponent carried at the type level.
///
/// Rust has no `f64` const generics, so the exponent lives in an associated
/// constant of a marker type. Declare one with [`float_exponent!`].
pub trait FloatExponent: Copy + Default + fmt::Debug + PartialEq + 'static {
    /// The exponent value.
    const P: f64;
}

/// Declares a [`FloatExponent`] marker type.
///
/// ```rust
/// use ff_core::float_exponent;
/// use ff_core::point_math::FloatExponent;
///
/// float_exponent!(
///     /// Exponent 2.5
///     pub P2_5 = 2.5
/// );
/// assert_eq!(P2_5::P, 2.5);
/// ```
#[macro_export]
macro_rules! float_exponent {
    ($(#[$meta:meta])* $vis:vis $name:ident = $p:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::point_math::FloatExponent for $name {
            const P: f64 = $p;
        }
    };
}

/// Lp norm with a floating point exponent known at compile time.
///
/// No exponent gets a fast path; use [`PNormIntCt`] for integral `p`.
///
/// ```compile_fail
/// use ff_core::{float_exponent, PNormFloatCt};
///
/// float_exponent!(Half = 0.5);
/// let _ = PNormFloatCt::<Half>::new();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PNormFloatCt<E: FloatExponent>(PhantomData<E>);

impl<E: FloatExponent> PNormFloatCt<E> {
    /// The exponent.
    pub const EXPONENT: f64 = E::P;

    /// Creates the tag.
    pub const fn new() -> Self {
        const { assert!(E::P >= 1.0, "norm exponent must be at least 1") };
        Self(PhantomData)
    }
}

impl<E: FloatExponent> NormTag for PNormFloatCt<E> {
    #[inline]
    fn norm<const N: usize, T: Real>(&self, point: &Point<N, T>) -> T {
        PointMathBasic::p_norm_float_ct::<E, N, T>(point)
    }
}

impl<E: FloatExponent> PowerSumTag for PNormFloatCt<E> {
    #[inline]
    fn power_sum<const N: usize, T: Real>(&self, point: &Point<N, T>) -> T {
        PointMathBasic::p_norm_float_power_sum_ct::<E, N, T>(point)
    }
}

/// Primitive number types accepted as a run-time norm exponent.
///
/// Implemented for all integer and float primitives. `bool` is not a
/// number and does not implement it.
pub trait RtExponent: AsReal<f32> + AsReal<f64> + fmt::Debug + PartialEq {
    /// Selects the integer or the float run-time path.
    const IS_INTEGRAL: bool;
}

macro_rules! impl_rt_exponent {
    ($integral:literal: $($t:ty),*) => {
        $(
            impl RtExponent for $t {
                const IS_INTEGRAL: bool = $integral;
            }
        )*
    };
}

impl_rt_exponent!(true: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_rt_exponent!(false: f32, f64);

/// Lp norm with an exponent chosen at run time.
///
/// ```compile_fail
/// use ff_core::PNormRt;
///
/// let _ = PNormRt::new(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PNormRt<P: RtExponent> {
    p: P,
}

impl<P: RtExponent> PNormRt<P> {
    /// Creates the tag.
    ///
    /// The exponent is not validated. Exponents below 1 still compute a
    /// value, but it is not a norm (the triangle inequality fails).
    #[inline]
    pub const fn new(p: P) -> Self {
        Self { p }
    }

    /// The exponent.
    #[inline]
    pub fn exponent(&self) -> P {
        self.p
    }
}

impl<P: RtExponent> NormTag for PNormRt<P> {
    #[inline]
    fn norm<const N: usize, T: Real>(&self, point: &Point<N, T>) -> T {
        if P::IS_INTEGRAL {
            PointMathBasic::p_norm_int_rt(point, self.p)
        } else {
            PointMathBasic::p_norm_float_rt(point, T::cast_from(self.p))
        }
    }
}

impl<P: RtExponent> PowerSumTag for PNormRt<P> {
    #[inline]
    fn power_sum<const N: usize, T: Real>(&self, point: &Point<N, T>) -> T {
        if P::IS_INTEGRAL {
            PointMathBasic::p_norm_int_power_sum_rt(point, self.p)
        } else {
            PointMathBasic::p_norm_float_power_sum_rt(point, T::cast_from(self.p))
        }
    }
}

/// The infinity (maximum absolute component) norm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InfNorm;

impl InfNorm {
    /// Creates the tag.
    pub const fn new() -> Self {
        Self
    }
}

impl NormTag for InfNorm {
    #[inline]
    fn norm<const N: usize, T: Real>(&self, point: &Point<N, T>) -> T {
        PointMathBasic::max_norm(point)
    }
}

/// Sum of absolute values.
pub type L1Norm = PNormIntCt<1>;
/// Euclidean length.
pub type L2Norm = PNormIntCt<2>;
/// Maximum absolute component.
pub type LInfNorm = InfNorm;
/// Alias of [`L1Norm`].
pub type TaxicabNorm = L1Norm;
/// Alias of [`L2Norm`].
pub type EuclideanNorm = L2Norm;
/// Alias of [`InfNorm`].
pub type MaxNorm = InfNorm;

/// A norm chosen at run time from a closed set.
///
/// Parses from `l1`, `l2`, `inf` and `p=<exponent>`, where an integral
/// exponent selects [`PInt`](NormKind::PInt).
///
/// ```rust
/// use ff_core::{NormKind, Point};
///
/// let kind: NormKind = "p=3".parse().unwrap();
/// assert_eq!(kind, NormKind::PInt(3));
///
/// let p = Point::<2, f64>::new([3.0, 4.0]);
/// assert_eq!("l2".parse::<NormKind>().unwrap().norm(&p), 5.0);
/// assert_eq!(NormKind::LInf.power_sum(&p), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormKind {
    /// Sum of absolute values.
    L1,
    /// Euclidean length.
    L2,
    /// Maximum absolute component.
    LInf,
    /// Integer exponent.
    PInt(u32),
    /// Floating point exponent.
    PFloat(f64),
}

impl NormKind {
    /// Computes the norm of `point`.
    pub fn norm<const N: usize, T: Real>(&self, point: &Point<N, T>) -> T {
        match *self {
            Self::L1 => PointMathBasic::norm(point, L1Norm::new()),
            Self::L2 => PointMathBasic::norm(point, L2Norm::new()),
            Self::LInf => PointMathBasic::norm(point, InfNorm),
            Self::PInt(p) => PointMathBasic::norm(point, PNormRt::new(p)),
            Self::PFloat(p) => PointMathBasic::norm(point, PNormRt::new(p)),
        }
    }

    /// Computes the power sum of `point`, or `None` for [`LInf`](Self::LInf).
    pub fn power_sum<const N: usize, T: Real>(&self, point: &Point<N, T>) -> Option<T> {
        match *self {
            Self::L1 => Some(PointMathBasic::norm_power_sum(point, L1Norm::new())),
            Self::L2 => Some(PointMathBasic::norm_power_sum(point, L2Norm::new())),
            Self::LInf => None,
            Self::PInt(p) => Some(PointMathBasic::norm_power_sum(point, PNormRt::new(p))),
            Self::PFloat(p) => Some(PointMathBasic::norm_power_sum(point, PNormRt::new(p))),
        }
    }
}

impl FromStr for NormKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "l1" | "taxicab" => return Ok(Self::L1),
            "l2" | "euclidean" => return Ok(Self::L2),
            "inf" | "linf" | "max" => return Ok(Self::LInf),
            _ => {}
        }
        let exponent = name
            .strip_prefix("p=")
            .map(str::trim)
            .ok_or_else(|| Error::unknown_norm(s))?;
        if let Ok(p) = exponent.parse::<u32>() {
            return Ok(Self::PInt(p));
        }
        exponent
            .parse::<f64>()
            .ok()
            .filter(|p| !p.is_nan())
            .map(Self::PFloat)
            .ok_or_else(|| Error::unknown_norm(s))
    }
}

impl fmt::Display for NormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::L1 => f.write_str("l1"),
            Self::L2 => f.write_str("l2"),
            Self::LInf => f.write_str("inf"),
            Self::PInt(p) => write!(f, "p={p}"),
            Self::PFloat(p) => write!(f, "p={p}"),
        }
    }
}
