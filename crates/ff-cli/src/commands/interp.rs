//! Interpolation commands.

use super::{parse_point, parse_scalar, shared_dims};
use crate::{LerpArgs, PairArgs, Precision};
use anyhow::Result;
use ff_core::PointMathBasic;
use tracing::debug;

/// Runs the lerp command.
pub fn run_lerp(args: LerpArgs, precision: Precision) -> Result<String> {
    let d = shared_dims(&args.a, &args.b)?;
    debug!(a = %args.a, b = %args.b, t = %args.t, dims = d, ?precision, "lerp");

    dispatch!(precision, d, |N, T| {
        let a = parse_point::<N, T>(&args.a)?;
        let b = parse_point::<N, T>(&args.b)?;
        let t = parse_scalar::<T>(&args.t, "interpolation parameter")?;
        Ok(PointMathBasic::interpolate(&a, &b, t).to_string())
    })
}

/// Runs the midpoint command.
pub fn run_midpoint(args: PairArgs, precision: Precision) -> Result<String> {
    let d = shared_dims(&args.a, &args.b)?;
    debug!(a = %args.a, b = %args.b, dims = d, ?precision, "midpoint");

    dispatch!(precision, d, |N, T| {
        let a = parse_point::<N, T>(&args.a)?;
        let b = parse_point::<N, T>(&args.b)?;
        Ok(PointMathBasic::midpoint(&a, &b).to_string())
    })
}
