//! Constant lookup command.

use crate::{ConstArgs, Precision};
use anyhow::{Context, Result};
use ff_core::fp_math::{Constant, constant};
use tracing::debug;

/// Runs the const command.
pub fn run(args: ConstArgs, precision: Precision) -> Result<String> {
    let c: Constant = args.name.parse()?;
    debug!(constant = %c, ?precision, "const");

    with_real!(precision, |T| {
        let value = constant::<T>(c).with_context(|| format!("Constant {c} is not tabulated"))?;
        Ok(value.to_string())
    })
}
