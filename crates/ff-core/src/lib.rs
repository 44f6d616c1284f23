//! # ff-core
//!
//! Numeric foundation for a fractal flame renderer.
//!
//! This crate provides the small, allocation free building blocks the
//! iteration loop of a flame renderer is made of:
//!
//! - [`Point`] - fixed dimension point/vector stored as exactly `N` floats
//! - [`Real`] - the two supported element types (`f32`, `f64`)
//! - [`PointMathBasic`] - arithmetic, products, projections, rotations, norms
//! - Norm tags ([`L1Norm`], [`L2Norm`], [`InfNorm`], [`PNormRt`], ...) that
//!   select a norm implementation at compile time
//! - [`fp_math`] - nearest-representable float constants, simultaneous
//!   sine/cosine, fixed 2D rotations
//! - [`types`] - 32 bit and 64 bit precision modes
//!
//! ## Design
//!
//! Dimension and element type are type parameters, so a `Point<3, f32>` is
//! a plain `[f32; 3]` in memory and every loop over its components has a
//! constant trip count. Norm selection is static dispatch through tag types,
//! which keeps the specialized fast paths (L1, L2, L3) without the caller
//! having to know eight function names.
//!
//! All arithmetic follows IEEE-754: division by zero, zero length vectors
//! and NaN inputs produce Inf/NaN rather than errors. The only runtime
//! failure is a checked component access with an index past the end.
//!
//! ## Usage
//!
//! ```rust
//! use ff_core::{point, L2Norm, Point, PointMathBasic};
//!
//! let mut a: Point<3, f32> = point![1.0, 2.0, 3.0];
//! let b = Point::<3, f32>::new([4.0, 5.0, 6.0]);
//! PointMathBasic::add_eq(&mut a, &b);
//! assert_eq!(a, Point::new([5.0, 7.0, 9.0]));
//!
//! let len = PointMathBasic::norm(&Point::<2, f64>::new([3.0, 4.0]), L2Norm::new());
//! assert_eq!(len, 5.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `bits32` - make [`types::DefaultMode`] the 32 bit precision mode

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod fp_math;
mod interop;
pub mod point;
pub mod point_math;
pub mod real;
pub mod types;

pub use error::*;
pub use point::Point;
pub use point_math::*;
pub use real::{AsReal, Real};
pub use types::{HistogramValue, NumberValue, PrecisionMode};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use ff_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::fp_math::{Rotation2d, sin_cos};
    pub use crate::point::Point;
    pub use crate::point_math::{
        EuclideanNorm, InfNorm, L1Norm, L2Norm, LInfNorm, MaxNorm, NormKind, NormTag,
        PNormFloatCt, PNormIntCt, PNormRt, PointMathBasic, PowerSumTag, TaxicabNorm,
    };
    pub use crate::real::{AsReal, Real};
    pub use crate::types::{Bits32, Bits64, DefaultMode, PrecisionMode};
}
