//! Error types for ff-core operations.
//!
//! Almost everything in this crate is infallible: arithmetic follows IEEE-754
//! and misuse of dimensions or norm exponents is rejected at compile time.
//! What remains are the few operations whose inputs are only known at run
//! time:
//!
//! - checked component access ([`Point::at`](crate::Point::at))
//! - construction from a dynamically sized slice or flat buffer
//! - parsing of run-time norm and constant names
//!
//! # Usage
//!
//! ```rust
//! use ff_core::{Error, Point};
//!
//! let p = Point::<3, f64>::new([1.01, 1.03, 1.05]);
//! assert_eq!(*p.at(2).unwrap(), 1.05);
//! assert!(matches!(p.at(3), Err(Error::IndexOutOfRange { index: 3, dims: 3 })));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ff-core operations.
///
/// # Categories
///
/// - **Bounds errors**: [`IndexOutOfRange`](Error::IndexOutOfRange)
/// - **Length errors**: [`LengthMismatch`](Error::LengthMismatch),
///   [`FlatBufferLength`](Error::FlatBufferLength)
/// - **Parse errors**: [`UnknownNorm`](Error::UnknownNorm),
///   [`UnknownConstant`](Error::UnknownConstant)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Component index is not in `[0, dims)`.
    ///
    /// Returned by the checked accessors. This signals a logic error in the
    /// caller and is never retried.
    #[error("index {index} out of range for {dims}-dimensional point")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Point dimension
        dims: usize,
    },

    /// A slice did not have exactly as many elements as the point dimension.
    #[error("length mismatch: expected {expected} components, got {got}")]
    LengthMismatch {
        /// Point dimension
        expected: usize,
        /// Slice length
        got: usize,
    },

    /// A flat buffer cannot be viewed as a whole number of points.
    #[error("flat buffer of {len} elements is not a whole number of {dims}-dimensional points")]
    FlatBufferLength {
        /// Buffer length in elements
        len: usize,
        /// Point dimension
        dims: usize,
    },

    /// A norm name could not be parsed.
    #[error("unknown norm: {0}")]
    UnknownNorm(String),

    /// A constant name could not be parsed or the constant is not tabulated.
    #[error("unknown constant: {0}")]
    UnknownConstant(String),
}

impl Error {
    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(index: usize, dims: usize) -> Self {
        Self::IndexOutOfRange { index, dims }
    }

    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }

    /// Creates an [`Error::FlatBufferLength`] error.
    #[inline]
    pub fn flat_buffer_length(len: usize, dims: usize) -> Self {
        Self::FlatBufferLength { len, dims }
    }

    /// Creates an [`Error::UnknownNorm`] error.
    #[inline]
    pub fn unknown_norm(name: impl Into<String>) -> Self {
        Self::UnknownNorm(name.into())
    }

    /// Creates an [`Error::UnknownConstant`] error.
    #[inline]
    pub fn unknown_constant(name: impl Into<String>) -> Self {
        Self::UnknownConstant(name.into())
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns `true` if this is a length-related error.
    #[inline]
    pub fn is_length_error(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. } | Self::FlatBufferLength { .. })
    }

    /// Returns `true` if this is a parse error.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::UnknownNorm(_) | Self::UnknownConstant(_))
    }
}
