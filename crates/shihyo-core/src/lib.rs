#![doc(issue_tracker_base_url = "https://github.com/factordynamics/shihyo/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and trait definitions for shihyo.
//!
//! This crate provides the foundational data model for the valuation
//! indicator solver: the six-field valuation record, ratio edits, the error
//! types, and the data source abstraction used to obtain base values.

/// The version of the shihyo-core crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod source;
pub mod types;

// Re-exports
pub use error::ShihyoError;
pub use source::{DataSource, Fundamentals, SourceError, SourceErrorKind};
pub use types::{
    BaseField, BaseValues, Date, RatioEdit, RatioKind, Ratios, Valuation, finite, finite_opt,
};
