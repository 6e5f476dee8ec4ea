//! Presentation of solved values.
//!
//! Integral values are shown without decimals, everything else is rounded to
//! two decimals, and unset values are shown as an empty string. The formatted
//! strings live in [`PresentedValuation`], separate from the full-precision
//! [`Valuation`] they were produced from.

use serde::Serialize;
use shihyo_core::{RatioKind, Valuation};

/// Formats a single value for display.
///
/// # Example
///
/// ```
/// use shihyo_solver::format_value;
///
/// assert_eq!(format_value(Some(20.0)), "20");
/// assert_eq!(format_value(Some(2000.0 / 120.0)), "16.67");
/// assert_eq!(format_value(Some(2.5)), "2.50");
/// assert_eq!(format_value(None), "");
/// ```
#[must_use]
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_finite() => String::new(),
        Some(v) if v == 0.0 => "0".to_string(),
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => to_fixed(v, 2),
        None => String::new(),
    }
}

/// Formats `value` with `decimals` places.
///
/// The exact binary value is rounded, so `2.675` (stored as `2.67499…`)
/// becomes `2.67`. Only values that sit exactly halfway round away from zero.
fn to_fixed(value: f64, decimals: u8) -> String {
    let places = usize::from(decimals);
    if is_exact_tie(value, decimals) {
        let factor = 10f64.powi(i32::from(decimals));
        format!("{:.places$}", (value * factor).round() / factor)
    } else {
        format!("{value:.places$}")
    }
}

/// Whether `value` lies exactly halfway between two `decimals`-place numbers.
///
/// Such a value is an odd multiple of `2^-(decimals + 1)`; scaling by a power
/// of two is exact, so the check involves no rounding.
fn is_exact_tie(value: f64, decimals: u8) -> bool {
    let halves = value * 2f64.powi(i32::from(decimals) + 1);
    halves.is_finite() && halves.fract() == 0.0 && halves % 2.0 != 0.0
}

/// Short chart-style label for a ratio, one decimal place.
///
/// Returns `None` for an unset ratio.
#[must_use]
pub fn ratio_label(kind: RatioKind, value: Option<f64>) -> Option<String> {
    let v = value.filter(|v| v.is_finite())?;
    let v = to_fixed(v, 1);
    Some(match kind {
        RatioKind::Roe => format!("ROE {v}%"),
        RatioKind::Per => format!("PER {v}x"),
        RatioKind::Pbr => format!("PBR {v}x"),
    })
}

/// A valuation record formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PresentedValuation {
    /// Formatted EPS.
    pub eps: String,
    /// Formatted BPS.
    pub bps: String,
    /// Formatted price.
    pub price: String,
    /// Formatted PER.
    pub per: String,
    /// Formatted PBR.
    pub pbr: String,
    /// Formatted ROE.
    pub roe: String,
}

impl PresentedValuation {
    /// Fields as `(label, formatted)` pairs in display order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("EPS", self.eps.as_str()),
            ("BPS", self.bps.as_str()),
            ("Price", self.price.as_str()),
            ("PER", self.per.as_str()),
            ("PBR", self.pbr.as_str()),
            ("ROE", self.roe.as_str()),
        ]
    }
}

impl From<&Valuation> for PresentedValuation {
    fn from(v: &Valuation) -> Self {
        Self {
            eps: format_value(v.eps()),
            bps: format_value(v.bps()),
            price: format_value(v.price()),
            per: format_value(v.per()),
            pbr: format_value(v.pbr()),
            roe: format_value(v.roe()),
        }
    }
}

/// Formats a whole record.
#[must_use]
pub fn present(valuation: &Valuation) -> PresentedValuation {
    PresentedValuation::from(valuation)
}

/// One-line summary of the set ratios, e.g. `ROE 12.5% | PER 20.0x | PBR 2.5x`.
///
/// Returns an empty string when no ratio is set.
#[must_use]
pub fn summary_line(valuation: &Valuation) -> String {
    [RatioKind::Roe, RatioKind::Per, RatioKind::Pbr]
        .into_iter()
        .filter_map(|kind| ratio_label(kind, valuation.ratios().get(kind)))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::evaluate;
    use shihyo_core::BaseValues;

    #[test]
    fn test_integral_values() {
        assert_eq!(format_value(Some(20.0)), "20");
        assert_eq!(format_value(Some(-3.0)), "-3");
        assert_eq!(format_value(Some(0.0)), "0");
        assert_eq!(format_value(Some(-0.0)), "0");
        assert_eq!(format_value(Some(1_234_567.0)), "1234567");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(format_value(Some(2.5)), "2.50");
        assert_eq!(format_value(Some(12.5)), "12.50");
        assert_eq!(format_value(Some(100.0 / 3.0)), "33.33");
        assert_eq!(format_value(Some(2.0 / 3.0)), "0.67");
        assert_eq!(format_value(Some(0.125)), "0.13");
        assert_eq!(format_value(Some(-0.125)), "-0.13");
    }

    #[test]
    fn test_rounds_stored_value_not_literal() {
        // 2.675 and 10.235 are stored just below the halfway point
        assert_eq!(format_value(Some(2.675)), "2.67");
        assert_eq!(format_value(Some(10.235)), "10.23");
        assert_eq!(format_value(Some(1.005)), "1.00");
        assert_eq!(format_value(Some(-2.675)), "-2.67");
        // Exact halves round away from zero
        assert_eq!(format_value(Some(0.375)), "0.38");
        assert_eq!(format_value(Some(2.625)), "2.63");
        assert_eq!(format_value(Some(-1.875)), "-1.88");
    }

    #[test]
    fn test_unset_values() {
        assert_eq!(format_value(None), "");
        assert_eq!(format_value(Some(f64::NAN)), "");
    }

    #[test]
    fn test_ratio_labels() {
        assert_eq!(ratio_label(RatioKind::Roe, Some(12.5)).unwrap(), "ROE 12.5%");
        assert_eq!(ratio_label(RatioKind::Per, Some(20.0)).unwrap(), "PER 20.0x");
        assert_eq!(
            ratio_label(RatioKind::Per, Some(2000.0 / 120.0)).unwrap(),
            "PER 16.7x"
        );
        assert_eq!(ratio_label(RatioKind::Pbr, None), None);
    }

    #[test]
    fn test_ratio_label_rounding() {
        assert_eq!(ratio_label(RatioKind::Pbr, Some(0.25)).unwrap(), "PBR 0.3x");
        assert_eq!(ratio_label(RatioKind::Roe, Some(-0.75)).unwrap(), "ROE -0.8%");
        // 0.35 is stored as 0.34999…
        assert_eq!(ratio_label(RatioKind::Per, Some(0.35)).unwrap(), "PER 0.3x");
    }

    #[test]
    fn test_present_scenario() {
        let v = evaluate(BaseValues::new(Some(100.0), Some(800.0), Some(2000.0)));
        let p = present(&v);
        assert_eq!(p.eps, "100");
        assert_eq!(p.bps, "800");
        assert_eq!(p.price, "2000");
        assert_eq!(p.per, "20");
        assert_eq!(p.pbr, "2.50");
        assert_eq!(p.roe, "12.50");
    }

    #[test]
    fn test_present_unset_ratios() {
        let v = evaluate(BaseValues::new(Some(100.0), Some(0.0), Some(2000.0)));
        let p = present(&v);
        assert_eq!(p.bps, "0");
        assert_eq!(p.pbr, "");
        assert_eq!(p.roe, "");
        assert_eq!(p.fields()[3], ("PER", "20"));
    }

    #[test]
    fn test_presented_serializes_strings() {
        let v = evaluate(BaseValues::new(Some(100.0), None, Some(2000.0)));
        let json = serde_json::to_value(present(&v)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "eps": "100",
                "bps": "",
                "price": "2000",
                "per": "20",
                "pbr": "",
                "roe": "",
            })
        );
    }

    #[test]
    fn test_summary_line() {
        let v = evaluate(BaseValues::new(Some(100.0), Some(800.0), Some(2000.0)));
        assert_eq!(summary_line(&v), "ROE 12.5% | PER 20.0x | PBR 2.5x");

        let v = evaluate(BaseValues::new(Some(100.0), None, Some(2000.0)));
        assert_eq!(summary_line(&v), "PER 20.0x");

        assert_eq!(summary_line(&evaluate(BaseValues::default())), "");
    }
}
