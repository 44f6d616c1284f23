//! Products of two points: dot, angle and cross.

use super::{parse_point, shared_dims};
use crate::{AngleArgs, PairArgs, Precision};
use anyhow::{Result, bail};
use ff_core::PointMathBasic;
use tracing::debug;

/// Runs the dot command.
pub fn run_dot(args: PairArgs, precision: Precision) -> Result<String> {
    let d = shared_dims(&args.a, &args.b)?;
    debug!(a = %args.a, b = %args.b, dims = d, ?precision, "dot");

    dispatch!(precision, d, |N, T| {
        let a = parse_point::<N, T>(&args.a)?;
        let b = parse_point::<N, T>(&args.b)?;
        Ok(PointMathBasic::dot_product(&a, &b).to_string())
    })
}

/// Runs the angle command.
///
/// With `--unit` both inputs are taken as already normalized, which skips
/// the length scaling.
pub fn run_angle(args: AngleArgs, precision: Precision) -> Result<String> {
    let d = shared_dims(&args.a, &args.b)?;
    debug!(a = %args.a, b = %args.b, dims = d, unit = args.unit, ?precision, "angle");

    dispatch!(precision, d, |N, T| {
        let a = parse_point::<N, T>(&args.a)?;
        let b = parse_point::<N, T>(&args.b)?;
        let angle = if args.unit {
            PointMathBasic::angle_between_unit(&a, &b)
        } else {
            PointMathBasic::angle_between(&a, &b)
        };
        Ok(angle.to_string())
    })
}

/// Runs the cross command. Only 2D and 3D points have a cross product.
pub fn run_cross(args: PairArgs, precision: Precision) -> Result<String> {
    let d = shared_dims(&args.a, &args.b)?;
    debug!(a = %args.a, b = %args.b, dims = d, ?precision, "cross");

    with_real!(precision, |T| match d {
        2 => {
            let a = parse_point::<2, T>(&args.a)?;
            let b = parse_point::<2, T>(&args.b)?;
            Ok(PointMathBasic::cross_2d(&a, &b).to_string())
        }
        3 => {
            let a = parse_point::<3, T>(&args.a)?;
            let b = parse_point::<3, T>(&args.b)?;
            Ok(PointMathBasic::cross_3d(&a, &b).to_string())
        }
        _ => bail!("Cross product needs 2D or 3D points, got {d} dimensions"),
    })
}
