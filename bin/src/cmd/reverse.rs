//! Ratio edit command implementation.

use super::OutputFormat;
use super::output::{Report, render};
use anyhow::Result;
use shihyo_core::{BaseValues, RatioEdit, RatioKind};
use shihyo_solver::{apply_edit, evaluate, resolve};

/// Apply a ratio edit on top of the given base values and print the result.
///
/// `value = None` is the cleared edit: the base values are kept and only the
/// edited ratio is unset.
pub(crate) fn run(
    kind: RatioKind,
    value: Option<f64>,
    base: BaseValues,
    format: OutputFormat,
) -> Result<()> {
    let (anchor, fallback) = kind.reverse_fields();
    if value.is_some() && resolve(kind, value, &base).is_none() {
        tracing::warn!(
            "{} edit changed nothing: set {} or {} to solve from",
            kind,
            anchor,
            fallback
        );
    }

    let current = evaluate(base);
    let edited = apply_edit(&current, RatioEdit::new(kind, value));

    println!("{}", render(&Report::new(&edited), format)?);

    Ok(())
}
