//! Planar commands: rotation and polar form.

use super::parse_scalar;
use crate::{PolarArgs, Precision, RotateArgs};
use anyhow::Result;
use ff_core::{Point, PointMathBasic};
use tracing::debug;

/// Runs the rotate command.
pub fn run_rotate(args: RotateArgs, precision: Precision) -> Result<String> {
    debug!(x = %args.x, y = %args.y, angle = %args.angle, ?precision, "rotate");

    with_real!(precision, |T| {
        let mut x = parse_scalar::<T>(&args.x, "x")?;
        let mut y = parse_scalar::<T>(&args.y, "y")?;
        let angle = parse_scalar::<T>(&args.angle, "angle")?;
        PointMathBasic::rotate_2d(&mut x, &mut y, angle);
        Ok(Point::new([x, y]).to_string())
    })
}

/// Runs the polar command, printing `sin cos radius`.
pub fn run_polar(args: PolarArgs, precision: Precision) -> Result<String> {
    debug!(x = %args.x, y = %args.y, ?precision, "polar");

    with_real!(precision, |T| {
        let x = parse_scalar::<T>(&args.x, "x")?;
        let y = parse_scalar::<T>(&args.y, "y")?;
        let (sin, cos, radius) = PointMathBasic::sin_cos_rad_2d(x, y);
        Ok(format!("{sin} {cos} {radius}"))
    })
}
