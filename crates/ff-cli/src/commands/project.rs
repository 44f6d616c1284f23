//! Projection and reflection commands.

use super::{parse_point, shared_dims};
use crate::{Precision, ProjectArgs};
use anyhow::Result;
use ff_core::PointMathBasic;
use tracing::debug;

/// Runs the project command.
pub fn run_project(args: ProjectArgs, precision: Precision) -> Result<String> {
    let d = shared_dims(&args.point, &args.direction)?;
    debug!(point = %args.point, direction = %args.direction, dims = d, unit = args.unit, ?precision, "project");

    dispatch!(precision, d, |N, T| {
        let mut p = parse_point::<N, T>(&args.point)?;
        let dir = parse_point::<N, T>(&args.direction)?;
        if args.unit {
            PointMathBasic::project_onto_unit(&mut p, &dir);
        } else {
            PointMathBasic::project_onto(&mut p, &dir);
        }
        Ok(p.to_string())
    })
}

/// Runs the reflect command.
pub fn run_reflect(args: ProjectArgs, precision: Precision) -> Result<String> {
    let d = shared_dims(&args.point, &args.direction)?;
    debug!(point = %args.point, direction = %args.direction, dims = d, unit = args.unit, ?precision, "reflect");

    dispatch!(precision, d, |N, T| {
        let mut p = parse_point::<N, T>(&args.point)?;
        let axis = parse_point::<N, T>(&args.direction)?;
        if args.unit {
            PointMathBasic::reflect_across_unit(&mut p, &axis);
        } else {
            PointMathBasic::reflect_across(&mut p, &axis);
        }
        Ok(p.to_string())
    })
}
