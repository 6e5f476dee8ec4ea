//! Common types used throughout shihyo.
//!
//! This module defines the six-field valuation record and its two halves:
//! the independently settable base values (EPS, BPS, price) and the ratios
//! derived from them (PER, PBR, ROE). Every field is either a finite real
//! number or unset; constructors coerce NaN and infinities to unset so no
//! non-finite value is ever stored.

use crate::error::ShihyoError;
use serde::Serialize;
use std::{fmt, str::FromStr};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// Keeps a value only if it is a finite real number.
///
/// # Example
///
/// ```
/// use shihyo_core::finite;
///
/// assert_eq!(finite(2.5), Some(2.5));
/// assert_eq!(finite(f64::NAN), None);
/// assert_eq!(finite(f64::INFINITY), None);
/// ```
#[must_use]
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Drops a present value that is NaN or infinite.
#[must_use]
pub fn finite_opt(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// One of the three independently settable base values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseField {
    /// Earnings per share.
    Eps,
    /// Book value per share.
    Bps,
    /// Share price.
    Price,
}

impl BaseField {
    /// All base fields in display order.
    pub const ALL: [Self; 3] = [Self::Eps, Self::Bps, Self::Price];

    /// Machine-readable field name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eps => "eps",
            Self::Bps => "bps",
            Self::Price => "price",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Eps => "EPS",
            Self::Bps => "BPS",
            Self::Price => "Price",
        }
    }
}

impl fmt::Display for BaseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the three derived ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioKind {
    /// Price-to-earnings ratio, `price / eps`.
    Per,
    /// Price-to-book ratio, `price / bps`.
    Pbr,
    /// Return on equity in percent, `100 * eps / bps`.
    Roe,
}

impl RatioKind {
    /// All ratio kinds in display order.
    pub const ALL: [Self; 3] = [Self::Per, Self::Pbr, Self::Roe];

    /// Machine-readable ratio name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Per => "per",
            Self::Pbr => "pbr",
            Self::Roe => "roe",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Per => "PER",
            Self::Pbr => "PBR",
            Self::Roe => "ROE",
        }
    }

    /// Alternative names accepted when parsing, besides [`Self::as_str`].
    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Per => &["pe", "p/e", "price_earnings"],
            Self::Pbr => &["pb", "p/b", "price_book"],
            Self::Roe => &["return_on_equity"],
        }
    }

    /// Base values this ratio is solved against in a reverse edit.
    ///
    /// The first entry is the anchor: it is preferred whenever it is set,
    /// and the second entry is only derived when the anchor is unset.
    #[must_use]
    pub const fn reverse_fields(&self) -> (BaseField, BaseField) {
        match self {
            Self::Per => (BaseField::Eps, BaseField::Price),
            Self::Pbr => (BaseField::Bps, BaseField::Price),
            Self::Roe => (BaseField::Bps, BaseField::Eps),
        }
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RatioKind {
    type Err = ShihyoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name || kind.aliases().contains(&name.as_str()))
            .ok_or(ShihyoError::UnknownIndicator(name))
    }
}

/// The base triple: EPS, BPS and share price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BaseValues {
    eps: Option<f64>,
    bps: Option<f64>,
    price: Option<f64>,
}

impl BaseValues {
    /// Creates a base triple, coercing non-finite values to unset.
    #[must_use]
    pub fn new(eps: Option<f64>, bps: Option<f64>, price: Option<f64>) -> Self {
        Self {
            eps: finite_opt(eps),
            bps: finite_opt(bps),
            price: finite_opt(price),
        }
    }

    /// Earnings per share.
    #[must_use]
    pub const fn eps(&self) -> Option<f64> {
        self.eps
    }

    /// Book value per share.
    #[must_use]
    pub const fn bps(&self) -> Option<f64> {
        self.bps
    }

    /// Share price.
    #[must_use]
    pub const fn price(&self) -> Option<f64> {
        self.price
    }

    /// Returns the value of a single field.
    #[must_use]
    pub const fn get(&self, field: BaseField) -> Option<f64> {
        match field {
            BaseField::Eps => self.eps,
            BaseField::Bps => self.bps,
            BaseField::Price => self.price,
        }
    }

    /// Returns a copy with one field replaced.
    #[must_use]
    pub fn with(mut self, field: BaseField, value: Option<f64>) -> Self {
        let value = finite_opt(value);
        match field {
            BaseField::Eps => self.eps = value,
            BaseField::Bps => self.bps = value,
            BaseField::Price => self.price = value,
        }
        self
    }

    /// Whether every base value is unset.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.eps.is_none() && self.bps.is_none() && self.price.is_none()
    }
}

/// The derived ratios: PER, PBR and ROE.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Ratios {
    per: Option<f64>,
    pbr: Option<f64>,
    roe: Option<f64>,
}

impl Ratios {
    /// Creates a ratio triple, coercing non-finite values to unset.
    #[must_use]
    pub fn new(per: Option<f64>, pbr: Option<f64>, roe: Option<f64>) -> Self {
        Self {
            per: finite_opt(per),
            pbr: finite_opt(pbr),
            roe: finite_opt(roe),
        }
    }

    /// Price-to-earnings ratio.
    #[must_use]
    pub const fn per(&self) -> Option<f64> {
        self.per
    }

    /// Price-to-book ratio.
    #[must_use]
    pub const fn pbr(&self) -> Option<f64> {
        self.pbr
    }

    /// Return on equity, percent.
    #[must_use]
    pub const fn roe(&self) -> Option<f64> {
        self.roe
    }

    /// Returns the value of a single ratio.
    #[must_use]
    pub const fn get(&self, kind: RatioKind) -> Option<f64> {
        match kind {
            RatioKind::Per => self.per,
            RatioKind::Pbr => self.pbr,
            RatioKind::Roe => self.roe,
        }
    }

    /// Returns a copy with one ratio replaced.
    #[must_use]
    pub fn with(mut self, kind: RatioKind, value: Option<f64>) -> Self {
        let value = finite_opt(value);
        match kind {
            RatioKind::Per => self.per = value,
            RatioKind::Pbr => self.pbr = value,
            RatioKind::Roe => self.roe = value,
        }
        self
    }
}

/// The full six-field valuation record.
///
/// Serializes flat as `{eps, bps, price, per, pbr, roe}` with unset fields
/// written as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Valuation {
    #[serde(flatten)]
    base: BaseValues,
    #[serde(flatten)]
    ratios: Ratios,
}

impl Valuation {
    /// Creates a record from its two halves.
    ///
    /// No consistency between the halves is enforced here; use the solver to
    /// derive ratios from base values.
    #[must_use]
    pub const fn new(base: BaseValues, ratios: Ratios) -> Self {
        Self { base, ratios }
    }

    /// The base triple.
    #[must_use]
    pub const fn base(&self) -> &BaseValues {
        &self.base
    }

    /// The derived ratios.
    #[must_use]
    pub const fn ratios(&self) -> &Ratios {
        &self.ratios
    }

    /// Earnings per share.
    #[must_use]
    pub const fn eps(&self) -> Option<f64> {
        self.base.eps
    }

    /// Book value per share.
    #[must_use]
    pub const fn bps(&self) -> Option<f64> {
        self.base.bps
    }

    /// Share price.
    #[must_use]
    pub const fn price(&self) -> Option<f64> {
        self.base.price
    }

    /// Price-to-earnings ratio.
    #[must_use]
    pub const fn per(&self) -> Option<f64> {
        self.ratios.per
    }

    /// Price-to-book ratio.
    #[must_use]
    pub const fn pbr(&self) -> Option<f64> {
        self.ratios.pbr
    }

    /// Return on equity, percent.
    #[must_use]
    pub const fn roe(&self) -> Option<f64> {
        self.ratios.roe
    }
}

/// A user edit of one ratio field.
///
/// An unset value represents the field being cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioEdit {
    kind: RatioKind,
    value: Option<f64>,
}

impl RatioEdit {
    /// Creates an edit, coercing a non-finite value to unset.
    #[must_use]
    pub fn new(kind: RatioKind, value: Option<f64>) -> Self {
        Self {
            kind,
            value: finite_opt(value),
        }
    }

    /// Which ratio was edited.
    #[must_use]
    pub const fn kind(&self) -> RatioKind {
        self.kind
    }

    /// The edited value.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }
}
