//! Indicator registry for discovering and describing the solvable ratios.
//!
//! This module provides the metadata shown by front ends when listing
//! indicators, and name lookup that accepts the common aliases.

use serde::Serialize;
use shihyo_core::{BaseField, RatioKind};

/// Indicator category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndicatorCategory {
    /// Price relative to a per-share fundamental
    Valuation,
    /// Profitability relative to equity
    Profitability,
}

impl IndicatorCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Valuation => "Share price compared to a per-share fundamental",
            Self::Profitability => "Earnings compared to the equity that produced them",
        }
    }
}

/// Metadata about an indicator.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorInfo {
    /// Which ratio this describes
    pub kind: RatioKind,

    /// Unique identifier for the indicator
    pub name: &'static str,

    /// Alternative names accepted on lookup
    pub aliases: &'static [&'static str],

    /// Category classification
    pub category: IndicatorCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Defining formula
    pub formula: &'static str,

    /// Unit suffix used in labels
    pub unit: &'static str,

    /// Base value preferred as the anchor when reverse-solving
    pub anchor: BaseField,

    /// Base value derived when the anchor is unset
    pub fallback: BaseField,
}

/// Get information about the indicator for a ratio kind.
#[must_use]
pub const fn indicator_info(kind: RatioKind) -> IndicatorInfo {
    match kind {
        RatioKind::Per => IndicatorInfo {
            kind,
            name: "per",
            aliases: kind.aliases(),
            category: IndicatorCategory::Valuation,
            description: "Price-to-earnings ratio",
            formula: "Price / EPS",
            unit: "x",
            anchor: BaseField::Eps,
            fallback: BaseField::Price,
        },
        RatioKind::Pbr => IndicatorInfo {
            kind,
            name: "pbr",
            aliases: kind.aliases(),
            category: IndicatorCategory::Valuation,
            description: "Price-to-book ratio",
            formula: "Price / BPS",
            unit: "x",
            anchor: BaseField::Bps,
            fallback: BaseField::Price,
        },
        RatioKind::Roe => IndicatorInfo {
            kind,
            name: "roe",
            aliases: kind.aliases(),
            category: IndicatorCategory::Profitability,
            description: "Return on equity",
            formula: "EPS / BPS * 100",
            unit: "%",
            anchor: BaseField::Bps,
            fallback: BaseField::Eps,
        },
    }
}

/// Get information about all indicators.
#[must_use]
pub fn available_indicators() -> Vec<IndicatorInfo> {
    RatioKind::ALL.into_iter().map(indicator_info).collect()
}

/// Get indicators filtered by category.
#[must_use]
pub fn indicators_by_category(category: &IndicatorCategory) -> Vec<IndicatorInfo> {
    available_indicators()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific indicator by name or alias.
///
/// Lookup is case-insensitive.
#[must_use]
pub fn get_indicator_info(name: &str) -> Option<IndicatorInfo> {
    name.parse::<RatioKind>().ok().map(indicator_info)
}
