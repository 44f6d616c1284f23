//! Norm command.
//!
//! Evaluates any of the run-time selectable norms, or their power sums.

use super::{dims, parse_point};
use crate::{NormArgs, Precision};
use anyhow::{Context, Result};
use tracing::debug;

/// Runs the norm command.
pub fn run(args: NormArgs, precision: Precision) -> Result<String> {
    let d = dims(&args.point);
    debug!(point = %args.point, norm = %args.norm, dims = d, ?precision, "norm");

    dispatch!(precision, d, |N, T| {
        let p = parse_point::<N, T>(&args.point)?;
        let value = if args.power_sum {
            args.norm
                .power_sum(&p)
                .with_context(|| format!("The {} norm has no power sum", args.norm))?
        } else {
            args.norm.norm(&p)
        };
        Ok(value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff_core::NormKind;

    fn norm(point: &str, norm: &str, power_sum: bool, precision: Precision) -> Result<String> {
        let args = NormArgs {
            point: point.into(),
            norm: norm.parse::<NormKind>()?,
            power_sum,
        };
        run(args, precision)
    }

    #[test]
    fn test_norms() {
        assert_eq!(norm("3,4", "l2", false, Precision::Double).unwrap(), "5");
        assert_eq!(norm("1,-5,2", "inf", false, Precision::Single).unwrap(), "5");
        assert_eq!(norm("1,-1,1,-1", "l1", false, Precision::Single).unwrap(), "4");
        assert_eq!(norm("-2", "p=4", false, Precision::Double).unwrap(), "2");
        assert_eq!(norm("1,1,1,1", "p=2.0", false, Precision::Double).unwrap(), "2");
    }

    #[test]
    fn test_power_sums() {
        assert_eq!(norm("3,4", "l2", true, Precision::Double).unwrap(), "25");
        assert_eq!(norm("1,-2", "p=3", true, Precision::Double).unwrap(), "9");
        assert!(norm("3,4", "inf", true, Precision::Double).is_err());
    }

    #[test]
    fn test_bad_input() {
        assert!(norm("1,2,3,4,5,6,7,8,9", "l2", false, Precision::Double).is_err());
        assert!(norm("1,,2", "l2", false, Precision::Double).is_err());
    }
}
