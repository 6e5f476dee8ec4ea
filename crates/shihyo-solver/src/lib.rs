//! Indicator solver for shihyo.
//!
//! This crate maps among EPS, BPS, price, PER, PBR and ROE using three
//! identities, in two directions:
//! - Forward: derive all three ratios from the base values
//! - Reverse: recover one base value from an edited ratio, then recompute
//!
//! Every operation is pure and synchronous. Nothing here returns an error;
//! a missing operand or a zero denominator yields an unset value.
//!
//! # Example
//!
//! ```
//! use shihyo_core::{BaseValues, RatioEdit, RatioKind};
//! use shihyo_solver::{apply_edit, evaluate, present};
//!
//! let current = evaluate(BaseValues::new(Some(100.0), Some(800.0), Some(2000.0)));
//! assert_eq!(present(&current).pbr, "2.50");
//!
//! let edited = apply_edit(&current, RatioEdit::new(RatioKind::Per, Some(25.0)));
//! assert_eq!(edited.price(), Some(2500.0));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod assess;
pub mod format;
pub mod forward;
pub mod registry;
pub mod reverse;
pub mod valuation;

// Re-export key types
pub use assess::{AssessmentThresholds, Highlight, assess, assess_with};
pub use format::{PresentedValuation, format_value, present, ratio_label, summary_line};
pub use forward::{Identity, Indeterminate, checked_div, solve_forward, solve_ratio};
pub use registry::{IndicatorCategory, IndicatorInfo};
pub use reverse::{Resolved, resolve, reverse, reverse_from_pbr, reverse_from_per, reverse_from_roe};
pub use valuation::{apply_edit, evaluate, recompute};
