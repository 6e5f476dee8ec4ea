//! Threshold highlights for a solved valuation.

use serde::{Deserialize, Serialize};
use shihyo_core::Valuation;
use std::fmt;

/// Thresholds at which a ratio is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentThresholds {
    /// ROE (percent) at or above which profitability is flagged as high (default: 15)
    pub high_roe: f64,

    /// PER at or above which the price is flagged as expensive (default: 25)
    pub high_per: f64,

    /// PBR below which the price is flagged as under book value (default: 1)
    pub below_book_pbr: f64,
}

impl Default for AssessmentThresholds {
    fn default() -> Self {
        Self {
            high_roe: 15.0,
            high_per: 25.0,
            below_book_pbr: 1.0,
        }
    }
}

/// A notable ratio reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// ROE at or above the high-profitability threshold.
    HighRoe,
    /// PER at or above the expensive threshold.
    HighPer,
    /// PBR under the book value threshold.
    BelowBook,
}

impl Highlight {
    /// Human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::HighRoe => "high return on equity",
            Self::HighPer => "expensive relative to earnings",
            Self::BelowBook => "trading below book value",
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Lists the highlights that apply to `valuation` under `thresholds`.
///
/// Unset ratios never produce a highlight.
#[must_use]
pub fn assess_with(valuation: &Valuation, thresholds: &AssessmentThresholds) -> Vec<Highlight> {
    let mut highlights = Vec::new();
    if valuation.roe().is_some_and(|roe| roe >= thresholds.high_roe) {
        highlights.push(Highlight::HighRoe);
    }
    if valuation.per().is_some_and(|per| per >= thresholds.high_per) {
        highlights.push(Highlight::HighPer);
    }
    if valuation
        .pbr()
        .is_some_and(|pbr| pbr < thresholds.below_book_pbr)
    {
        highlights.push(Highlight::BelowBook);
    }
    highlights
}

/// Lists the highlights that apply to `valuation` under default thresholds.
#[must_use]
pub fn assess(valuation: &Valuation) -> Vec<Highlight> {
    assess_with(valuation, &AssessmentThresholds::default())
}
