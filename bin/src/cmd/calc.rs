//! Forward solve command implementation.

use super::OutputFormat;
use super::output::{Report, render};
use anyhow::Result;
use shihyo_core::BaseValues;
use shihyo_solver::evaluate;

/// Derive all three ratios from the given base values and print the record.
pub(crate) fn run(base: BaseValues, format: OutputFormat) -> Result<()> {
    if base.is_empty() {
        tracing::warn!("no base values given; every field is unset");
    }

    let valuation = evaluate(base);
    println!("{}", render(&Report::new(&valuation), format)?);

    Ok(())
}
