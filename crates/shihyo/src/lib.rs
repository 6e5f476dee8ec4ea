#![doc(issue_tracker_base_url = "https://github.com/factordynamics/shihyo/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # shihyo
//!
//! Valuation indicator solver: PER, PBR and ROE from EPS, BPS and price.
//!
//! shihyo is an umbrella crate that re-exports all shihyo sub-crates for
//! convenience.
//!
//! ## Quick Start
//!
//! ```
//! use shihyo::prelude::*;
//!
//! // Enter base values and derive the ratios
//! let current = evaluate(BaseValues::new(Some(100.0), Some(800.0), Some(2000.0)));
//! assert_eq!(present(&current).per, "20");
//!
//! // Edit ROE: BPS is the anchor, so EPS is re-solved
//! let edited = apply_edit(&current, RatioEdit::new(RatioKind::Roe, Some(15.0)));
//! assert_eq!(present(&edited).eps, "120");
//! assert_eq!(present(&edited).per, "16.67");
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Data model, errors, and the [`DataSource`] trait
//! - [`solver`] - Forward and reverse solving, formatting, assessment
//! - [`jquants`] - J-Quants API client producing base values
//!
//! ## Architecture
//!
//! 1. **Base values** (EPS, BPS, price) are entered or fetched from a [`DataSource`]
//! 2. **Forward solving** derives PER, PBR and ROE
//! 3. **Reverse solving** turns a ratio edit into a change of one base value
//! 4. **Presentation** formats the full-precision record for display

/// Version information for the shihyo crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Core data model for shihyo.
///
/// - [`Valuation`] - The six-field record
/// - [`BaseValues`] / [`Ratios`] - Its two halves
/// - [`RatioEdit`] - A user edit of one ratio
/// - [`DataSource`] - Provider of base values
pub mod model {
    pub use shihyo_core::*;
}

pub use shihyo_core::{
    BaseField, BaseValues, DataSource, Date, Fundamentals, RatioEdit, RatioKind, Ratios,
    ShihyoError, SourceError, SourceErrorKind, Valuation,
};

// ============================================================================
// Solver
// ============================================================================

/// The indicator solver.
///
/// ## Identities
///
/// ```text
/// PER = Price / EPS
/// PBR = Price / BPS
/// ROE = EPS / BPS * 100
/// ```
///
/// ## Reverse anchors
///
/// | Edited | Anchor (preferred) | Derived when anchor unset |
/// |--------|--------------------|---------------------------|
/// | PER    | EPS → price        | price → EPS               |
/// | PBR    | BPS → price        | price → BPS               |
/// | ROE    | BPS → EPS          | EPS → BPS                 |
pub mod solver {
    pub use shihyo_solver::*;
}

// ============================================================================
// Data Providers
// ============================================================================

/// J-Quants API client.
///
/// ## Setup
///
/// 1. Get an API key at <https://jpx-jquants.com/>
/// 2. Set the `JQUANTS_API_KEY` environment variable or add to `.env` file
///
/// ## Example
///
/// ```ignore
/// use shihyo::jquants::JQuantsClient;
/// use shihyo::solver::evaluate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = JQuantsClient::from_env()?;
///     let data = client.fundamentals("7203").await?;
///     let valuation = evaluate(data.base_values());
///     println!("{}: PER {:?}", data.company_name, valuation.per());
///     Ok(())
/// }
/// ```
pub mod jquants {
    pub use shihyo_jquants::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use shihyo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BaseField, BaseValues, DataSource, RatioEdit, RatioKind, Ratios, ShihyoError, Valuation,
    };
    pub use shihyo_solver::{
        PresentedValuation, apply_edit, assess, evaluate, format_value, present, solve_forward,
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        // Version should be in semver format (x.y.z)
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_prelude_round_trip() {
        use crate::prelude::*;

        let v = evaluate(BaseValues::new(Some(100.0), Some(800.0), Some(2000.0)));
        let edited = apply_edit(&v, RatioEdit::new(RatioKind::Pbr, Some(2.5)));
        assert_eq!(edited.price(), Some(2000.0));
        assert_eq!(present(&edited).roe, "12.50");
    }

    #[test]
    fn test_error_types() {
        let err = "ev".parse::<RatioKind>().unwrap_err();
        assert!(matches!(err, ShihyoError::UnknownIndicator(_)));
        let source: SourceError = jquants::JQuantsError::MissingApiKey.into();
        assert_eq!(source.kind(), SourceErrorKind::Unauthorized);
    }
}
