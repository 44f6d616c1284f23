//! CLI command implementations

use anyhow::{Context, Result};
use ff_core::{Point, Real};
use std::num::ParseFloatError;
use std::str::FromStr;

/// Runs `$body` with `$t` bound to the float type of `$precision`.
macro_rules! with_real {
    ($precision:expr, |$t:ident| $body:expr) => {
        match $precision {
            crate::Precision::Single => {
                type $t = <ff_core::types::Bits32 as ff_core::PrecisionMode>::Number;
                $body
            }
            crate::Precision::Double => {
                type $t = <ff_core::types::Bits64 as ff_core::PrecisionMode>::Number;
                $body
            }
        }
    };
}

/// Runs `$body` with `$n` bound to `$dims` as a const and `$t` to the float
/// type of `$precision`. Supports 1 to 8 dimensions.
macro_rules! dispatch {
    ($precision:expr, $dims:expr, |$n:ident, $t:ident| $body:expr) => {
        with_real!($precision, |$t| {
            match $dims {
                1 => { const $n: usize = 1; $body }
                2 => { const $n: usize = 2; $body }
                3 => { const $n: usize = 3; $body }
                4 => { const $n: usize = 4; $body }
                5 => { const $n: usize = 5; $body }
                6 => { const $n: usize = 6; $body }
                7 => { const $n: usize = 7; $body }
                8 => { const $n: usize = 8; $body }
                d => anyhow::bail!("unsupported dimension count {d}, expected 1 to 8"),
            }
        })
    };
}

pub mod constant;
pub mod interp;
pub mod norm;
pub mod plane;
pub mod products;
pub mod project;

/// Float types that can be read from the command line.
pub trait Scalar: Real + FromStr<Err = ParseFloatError> {}

impl<T: Real + FromStr<Err = ParseFloatError>> Scalar for T {}

/// Number of comma separated components in `s`.
pub fn dims(s: &str) -> usize {
    s.split(',').count()
}

/// Parse a single number
pub fn parse_scalar<T: Scalar>(s: &str, what: &str) -> Result<T> {
    s.trim()
        .parse::<T>()
        .with_context(|| format!("Invalid {what}: '{s}'"))
}

/// Parse a comma separated point such as `1,-2.5,3`.
pub fn parse_point<const N: usize, T: Scalar>(s: &str) -> Result<Point<N, T>> {
    let values = s
        .split(',')
        .map(|c| parse_scalar::<T>(c, "component"))
        .collect::<Result<Vec<T>>>()
        .with_context(|| format!("Invalid point: '{s}'"))?;
    Point::try_from_slice(&values).with_context(|| format!("Invalid point: '{s}'"))
}

/// Dimension count shared by two points.
pub fn shared_dims(a: &str, b: &str) -> Result<usize> {
    let (da, db) = (dims(a), dims(b));
    anyhow::ensure!(da == db, "Points have different dimensions: {da} and {db}");
    Ok(da)
}
