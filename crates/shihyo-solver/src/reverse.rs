//! Reverse computation: recovering a base value from an edited ratio.
//!
//! Each reverse operation changes at most one base value. The denominator of
//! the ratio's identity is the anchor: while it is set, the numerator is
//! recomputed from it. Only when the anchor is unset is the anchor itself
//! derived from the numerator, which additionally requires a nonzero ratio.
//!
//! | Edited | Anchor set          | Anchor unset, ratio ≠ 0 |
//! |--------|---------------------|-------------------------|
//! | ROE    | `eps := bps·roe/100` | `bps := eps/(roe/100)`  |
//! | PER    | `price := eps·per`   | `eps := price/per`      |
//! | PBR    | `price := bps·pbr`   | `bps := price/pbr`      |

use crate::forward::Identity;
use shihyo_core::{BaseField, BaseValues, RatioKind, finite};
use tracing::debug;

/// The single base value changed by a reverse-solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    /// Which base value was written.
    pub field: BaseField,
    /// The new full-precision value; unset if the product overflowed.
    pub value: Option<f64>,
}

/// Determines which base value an edited ratio resolves, without applying it.
///
/// Returns `None` when the ratio is unset or the base triple lacks the data
/// to solve anything.
#[must_use]
pub fn resolve(kind: RatioKind, ratio: Option<f64>, base: &BaseValues) -> Option<Resolved> {
    let ratio = ratio.and_then(finite)?;
    let identity = Identity::of(kind);
    let fraction = ratio / identity.scale;

    if let Some(anchor) = base.get(identity.denominator) {
        return Some(Resolved {
            field: identity.numerator,
            value: finite(anchor * fraction),
        });
    }

    match base.get(identity.numerator) {
        Some(numerator) if ratio != 0.0 => Some(Resolved {
            field: identity.denominator,
            value: finite(numerator / fraction),
        }),
        _ => None,
    }
}

/// Applies a reverse-solve for `kind` and returns the updated base triple.
///
/// When nothing can be resolved the triple is returned unchanged.
#[must_use]
pub fn reverse(kind: RatioKind, ratio: Option<f64>, base: &BaseValues) -> BaseValues {
    match resolve(kind, ratio, base) {
        Some(Resolved { field, value }) => {
            debug!(ratio = %kind, ?field, ?value, "reverse-solved base value");
            base.with(field, value)
        }
        None => {
            debug!(ratio = %kind, "reverse-solve skipped: insufficient data");
            *base
        }
    }
}

/// Recovers EPS (or BPS when BPS is unset) from an edited ROE.
///
/// # Example
///
/// ```
/// use shihyo_core::BaseValues;
/// use shihyo_solver::reverse_from_roe;
///
/// // BPS is the anchor, so the stale EPS is overwritten.
/// let base = BaseValues::new(Some(999.0), Some(500.0), None);
/// assert_eq!(reverse_from_roe(Some(20.0), &base).eps(), Some(100.0));
/// ```
#[must_use]
pub fn reverse_from_roe(roe: Option<f64>, base: &BaseValues) -> BaseValues {
    reverse(RatioKind::Roe, roe, base)
}

/// Recovers price (or EPS when EPS is unset) from an edited PER.
#[must_use]
pub fn reverse_from_per(per: Option<f64>, base: &BaseValues) -> BaseValues {
    reverse(RatioKind::Per, per, base)
}

/// Recovers price (or BPS when BPS is unset) from an edited PBR.
#[must_use]
pub fn reverse_from_pbr(pbr: Option<f64>, base: &BaseValues) -> BaseValues {
    reverse(RatioKind::Pbr, pbr, base)
}
