//! Point arithmetic and norms.
//!
//! - [`PointMathBasic`] - the arithmetic itself, as associated functions
//! - [`norm_tags`] - tags selecting a norm implementation
//! - operator overloads and convenience methods on [`Point`](crate::Point),
//!   which delegate to [`PointMathBasic`]

mod basic;
pub mod norm_tags;
mod ops;

pub use basic::PointMathBasic;
pub use norm_tags::{
    EuclideanNorm, FloatExponent, InfNorm, L1Norm, L2Norm, LInfNorm, MaxNorm, NormKind, NormTag,
    PNormFloatCt, PNormIntCt, PNormRt, PowerSumTag, RtExponent, TaxicabNorm,
};
