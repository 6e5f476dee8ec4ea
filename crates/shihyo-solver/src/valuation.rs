//! Record-level solving.
//!
//! These functions take and return the full six-field [`Valuation`], so a
//! front end can hold one immutable record and replace it after each user
//! action: a base value entry goes through [`evaluate`], a ratio edit through
//! [`apply_edit`].

use crate::{forward::solve_forward, reverse::reverse};
use shihyo_core::{BaseValues, RatioEdit, Valuation};

/// Builds a consistent record by deriving all ratios from `base`.
#[must_use]
pub fn evaluate(base: BaseValues) -> Valuation {
    Valuation::new(base, solve_forward(&base))
}

/// Recomputes every ratio of an existing record from its base values.
#[must_use]
pub fn recompute(valuation: &Valuation) -> Valuation {
    evaluate(*valuation.base())
}

/// Applies a ratio edit to a record.
///
/// A set value reverse-solves one base value and then recomputes all three
/// ratios, so the edited ratio is replaced by its recomputed figure. When
/// nothing can be solved the ratios are still recomputed, which leaves the
/// edited ratio unset if its inputs are missing.
///
/// An unset value only clears the edited ratio; the base values and the
/// other two ratios are kept as they were.
///
/// # Example
///
/// ```
/// use shihyo_core::{BaseValues, RatioEdit, RatioKind};
/// use shihyo_solver::{apply_edit, evaluate};
///
/// let current = evaluate(BaseValues::new(Some(50.0), Some(800.0), Some(2000.0)));
/// let next = apply_edit(&current, RatioEdit::new(RatioKind::Roe, Some(15.0)));
/// assert_eq!(next.eps(), Some(120.0));
/// ```
#[must_use]
pub fn apply_edit(valuation: &Valuation, edit: RatioEdit) -> Valuation {
    match edit.value() {
        Some(_) => evaluate(reverse(edit.kind(), edit.value(), valuation.base())),
        None => Valuation::new(
            *valuation.base(),
            valuation.ratios().with(edit.kind(), None),
        ),
    }
}
