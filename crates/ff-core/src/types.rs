//! Number and counter types for the two precision modes.
//!
//! A flame render keeps two kinds of numbers: floats for point iteration
//! and integer counters for the histogram. There are practical reasons to
//! pick either 32 or 64 bits for both:
//!
//! - 64 bit floats give extra precision, rarely needed for flame fractals
//! - 32 bit floats are only slightly faster to compute with, but twice as
//!   much of the render buffer fits in CPU caches, which is what dominates
//! - 64 bit counters give plenty of room; 32 bit counters may run out on
//!   long renders
//!
//! In practice several shorter 32 bit renders can be combined into 64 bit
//! values later. 16 bit floats are not supported.
//!
//! # Modes
//!
//! The modes are zero-sized marker types implementing [`PrecisionMode`], in
//! the same way color spaces are markers elsewhere in the ecosystem:
//!
//! ```rust
//! use ff_core::types::{Bits32, Bits64, PrecisionMode};
//!
//! fn describe<M: PrecisionMode>() -> String {
//!     format!("{} ({} bit floats)", M::NAME, <M::Number as ff_core::Real>::BITS)
//! }
//!
//! assert_eq!(describe::<Bits32>(), "32 bit (32 bit floats)");
//! assert_eq!(describe::<Bits64>(), "64 bit (64 bit floats)");
//! ```
//!
//! The crate feature `bits32` selects [`Bits32`] as [`DefaultMode`];
//! otherwise it is [`Bits64`].

use crate::Real;
use std::fmt;

/// Real number type for 32 bit mode.
pub type NumberValue32 = f32;

/// Histogram counter type for 32 bit mode.
pub type HistogramValue32 = u32;

/// Real number type for 64 bit mode.
pub type NumberValue64 = f64;

/// Histogram counter type for 64 bit mode.
pub type HistogramValue64 = u64;

/// A pairing of float and counter types used together by downstream
/// renderers.
pub trait PrecisionMode: Copy + Clone + Default + Send + Sync + fmt::Debug + 'static {
    /// Float type for point iteration.
    type Number: Real;

    /// Integer type for histogram counters.
    type Counter: Copy + Default + Send + Sync + fmt::Debug + 'static;

    /// Human-readable name of the mode.
    const NAME: &'static str;
}

/// 32 bit floats with 32 bit counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bits32;

impl PrecisionMode for Bits32 {
    type Number = NumberValue32;
    type Counter = HistogramValue32;
    const NAME: &'static str = "32 bit";
}

/// 64 bit floats with 64 bit counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bits64;

impl PrecisionMode for Bits64 {
    type Number = NumberValue64;
    type Counter = HistogramValue64;
    const NAME: &'static str = "64 bit";
}

/// Precision mode selected at build time.
#[cfg(feature = "bits32")]
pub type DefaultMode = Bits32;

/// Precision mode selected at build time.
#[cfg(not(feature = "bits32"))]
pub type DefaultMode = Bits64;

/// Float type of the build-time precision mode.
pub type NumberValue = <DefaultMode as PrecisionMode>::Number;

/// Counter type of the build-time precision mode.
pub type HistogramValue = <DefaultMode as PrecisionMode>::Counter;
