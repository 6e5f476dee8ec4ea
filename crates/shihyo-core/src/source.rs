//! Data source abstraction for base values.
//!
//! A data source resolves a security code to the company name, the latest
//! share price with its date, and the most recent EPS and BPS. The solver
//! does not care how these are obtained; it only consumes
//! [`Fundamentals::base_values`].

use crate::types::{BaseValues, Date};
use serde::Serialize;
use std::{fmt, future::Future};
use thiserror::Error;

/// Classification of a data source failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceErrorKind {
    /// The code, its quotes, or its company record do not exist.
    NotFound,
    /// The credentials were missing or rejected.
    Unauthorized,
    /// Any other upstream failure (transport, non-success status, bad payload).
    UpstreamError,
}

impl SourceErrorKind {
    /// Machine-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Unauthorized => "unauthorized",
            Self::UpstreamError => "upstream_error",
        }
    }
}

impl fmt::Display for SourceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed data source failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    /// Creates a failure of the given kind.
    pub fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a [`SourceErrorKind::NotFound`] failure.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::NotFound, message)
    }

    /// Shorthand for a [`SourceErrorKind::Unauthorized`] failure.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Unauthorized, message)
    }

    /// Shorthand for a [`SourceErrorKind::UpstreamError`] failure.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::UpstreamError, message)
    }

    /// The failure classification.
    #[must_use]
    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    /// Human-readable detail.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Base values and identification returned by a data source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fundamentals {
    /// Security code the data was fetched for.
    pub code: String,
    /// Company name.
    pub company_name: String,
    /// Trading date of the price.
    pub as_of: Date,
    /// Latest earnings per share.
    pub eps: Option<f64>,
    /// Latest book value per share.
    pub bps: Option<f64>,
    /// Latest closing price.
    pub price: Option<f64>,
}

impl Fundamentals {
    /// The base triple to hand to the solver.
    #[must_use]
    pub fn base_values(&self) -> BaseValues {
        BaseValues::new(self.eps, self.bps, self.price)
    }
}

/// A provider of base values for a security code.
///
/// Implementations perform I/O and may fail with a typed [`SourceError`].
pub trait DataSource: Send + Sync {
    /// Returns the name of this source, used in logs and output.
    fn name(&self) -> &str;

    /// Fetches the company name, latest price, and latest EPS/BPS for `code`.
    fn fetch_fundamentals(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<Fundamentals, SourceError>> + Send;
}
