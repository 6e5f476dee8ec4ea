//! Error types for shihyo.
//!
//! The solver itself never fails: indeterminate results surface as unset
//! values. Data source failures are [`SourceError`](crate::SourceError);
//! this covers the remaining user-facing case of naming a ratio.

use thiserror::Error;

/// The main error type for shihyo operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShihyoError {
    /// Error when an indicator name is not recognized.
    #[error("Unknown indicator: {0}")]
    UnknownIndicator(String),
}
