//! Forward computation of ratios from base values.
//!
//! Each ratio is one identity `ratio = (numerator / denominator) * scale`:
//!
//! ```text
//! PER = price / eps
//! PBR = price / bps
//! ROE = (eps / bps) * 100
//! ```
//!
//! A missing operand and a zero denominator are both indeterminate. The
//! distinction is kept in [`Indeterminate`] for callers that want it, but the
//! public solving functions collapse both to an unset ratio.

use shihyo_core::{BaseField, BaseValues, RatioKind, Ratios};
use thiserror::Error;

/// Why a ratio could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Indeterminate {
    /// An operand needed for the computation is unset.
    #[error("insufficient data")]
    InsufficientData,
    /// The denominator is exactly zero, or the result is not finite.
    #[error("undefined ratio")]
    UndefinedRatio,
}

/// The algebraic identity behind one ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identity {
    /// Base value in the numerator.
    pub numerator: BaseField,
    /// Base value in the denominator. This is also the reverse-solve anchor.
    pub denominator: BaseField,
    /// Multiplier applied to the quotient (100 for percentages).
    pub scale: f64,
}

impl Identity {
    /// Returns the identity defining `kind`.
    #[must_use]
    pub const fn of(kind: RatioKind) -> Self {
        match kind {
            RatioKind::Per => Self {
                numerator: BaseField::Price,
                denominator: BaseField::Eps,
                scale: 1.0,
            },
            RatioKind::Pbr => Self {
                numerator: BaseField::Price,
                denominator: BaseField::Bps,
                scale: 1.0,
            },
            RatioKind::Roe => Self {
                numerator: BaseField::Eps,
                denominator: BaseField::Bps,
                scale: 100.0,
            },
        }
    }

    /// Evaluates the identity against a base triple.
    ///
    /// # Errors
    ///
    /// Returns [`Indeterminate::InsufficientData`] if an operand is unset and
    /// [`Indeterminate::UndefinedRatio`] if the denominator is zero.
    pub fn evaluate(&self, base: &BaseValues) -> Result<f64, Indeterminate> {
        let quotient = checked_div(base.get(self.numerator), base.get(self.denominator))?;
        let value = quotient * self.scale;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Indeterminate::UndefinedRatio)
        }
    }
}

/// Divides two optional operands.
///
/// # Errors
///
/// Returns [`Indeterminate::InsufficientData`] if either operand is unset,
/// [`Indeterminate::UndefinedRatio`] if the denominator is zero or the
/// quotient is not finite.
pub fn checked_div(numerator: Option<f64>, denominator: Option<f64>) -> Result<f64, Indeterminate> {
    let (Some(n), Some(d)) = (numerator, denominator) else {
        return Err(Indeterminate::InsufficientData);
    };
    if d == 0.0 {
        return Err(Indeterminate::UndefinedRatio);
    }
    let q = n / d;
    if q.is_finite() {
        Ok(q)
    } else {
        Err(Indeterminate::UndefinedRatio)
    }
}

/// Computes a single ratio, or unset if it is indeterminate.
#[must_use]
pub fn solve_ratio(kind: RatioKind, base: &BaseValues) -> Option<f64> {
    Identity::of(kind).evaluate(base).ok()
}

/// Computes PER, PBR and ROE from a base triple.
///
/// # Example
///
/// ```
/// use shihyo_core::BaseValues;
/// use shihyo_solver::solve_forward;
///
/// let ratios = solve_forward(&BaseValues::new(Some(100.0), Some(0.0), Some(2000.0)));
/// assert_eq!(ratios.per(), Some(20.0));
/// assert_eq!(ratios.pbr(), None);
/// assert_eq!(ratios.roe(), None);
/// ```
#[must_use]
pub fn solve_forward(base: &BaseValues) -> Ratios {
    Ratios::new(
        solve_ratio(RatioKind::Per, base),
        solve_ratio(RatioKind::Pbr, base),
        solve_ratio(RatioKind::Roe, base),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base(eps: Option<f64>, bps: Option<f64>, price: Option<f64>) -> BaseValues {
        BaseValues::new(eps, bps, price)
    }

    #[test]
    fn test_all_ratios_from_full_triple() {
        let cases = [
            (100.0, 800.0, 2000.0),
            (-35.2, 410.7, 1234.5),
            (0.01, 3.0, 0.5),
            (365.94, 2_878.35, 3_520.0),
        ];
        for (eps, bps, price) in cases {
            let ratios = solve_forward(&base(Some(eps), Some(bps), Some(price)));
            assert_relative_eq!(ratios.per().unwrap(), price / eps, max_relative = 1e-9);
            assert_relative_eq!(ratios.pbr().unwrap(), price / bps, max_relative = 1e-9);
            assert_relative_eq!(ratios.roe().unwrap(), 100.0 * eps / bps, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_scenario_basic() {
        let ratios = solve_forward(&base(Some(100.0), Some(800.0), Some(2000.0)));
        assert_relative_eq!(ratios.per().unwrap(), 20.0);
        assert_relative_eq!(ratios.pbr().unwrap(), 2.5);
        assert_relative_eq!(ratios.roe().unwrap(), 12.5);
    }

    #[test]
    fn test_missing_eps() {
        let ratios = solve_forward(&base(None, Some(800.0), Some(2000.0)));
        assert_eq!(ratios.per(), None);
        assert_relative_eq!(ratios.pbr().unwrap(), 2.5);
        assert_eq!(ratios.roe(), None);
    }

    #[test]
    fn test_zero_bps() {
        let ratios = solve_forward(&base(Some(100.0), Some(0.0), Some(2000.0)));
        assert_relative_eq!(ratios.per().unwrap(), 20.0);
        assert_eq!(ratios.pbr(), None);
        assert_eq!(ratios.roe(), None);
    }

    #[test]
    fn test_zero_eps() {
        let ratios = solve_forward(&base(Some(0.0), Some(800.0), Some(2000.0)));
        assert_eq!(ratios.per(), None);
        assert_relative_eq!(ratios.pbr().unwrap(), 2.5);
        assert_relative_eq!(ratios.roe().unwrap(), 0.0);
    }

    #[test]
    fn test_missing_price_keeps_roe() {
        let ratios = solve_forward(&base(Some(50.0), Some(400.0), None));
        assert_eq!(ratios.per(), None);
        assert_eq!(ratios.pbr(), None);
        assert_relative_eq!(ratios.roe().unwrap(), 12.5);
    }

    #[test]
    fn test_empty_triple() {
        assert_eq!(solve_forward(&BaseValues::default()), Ratios::default());
    }

    #[test]
    fn test_inputs_not_mutated() {
        let input = base(Some(100.0), Some(800.0), Some(2000.0));
        let copy = input;
        let _ = solve_forward(&input);
        assert_eq!(input, copy);
    }

    #[test]
    fn test_checked_div_distinguishes_causes() {
        assert_eq!(checked_div(None, Some(2.0)), Err(Indeterminate::InsufficientData));
        assert_eq!(checked_div(Some(1.0), None), Err(Indeterminate::InsufficientData));
        assert_eq!(checked_div(Some(1.0), Some(0.0)), Err(Indeterminate::UndefinedRatio));
        assert_eq!(checked_div(Some(1.0), Some(-0.0)), Err(Indeterminate::UndefinedRatio));
        assert_eq!(checked_div(Some(1.0), Some(4.0)), Ok(0.25));
    }

    #[test]
    fn test_overflow_is_undefined() {
        let identity = Identity::of(RatioKind::Roe);
        let result = identity.evaluate(&base(Some(f64::MAX), Some(1.0), None));
        assert_eq!(result, Err(Indeterminate::UndefinedRatio));
    }

    #[test]
    fn test_identity_anchor_is_denominator() {
        for kind in RatioKind::ALL {
            assert_eq!(Identity::of(kind).denominator, kind.reverse_fields().0);
            assert_eq!(Identity::of(kind).numerator, kind.reverse_fields().1);
        }
    }
}
