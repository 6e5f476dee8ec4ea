//! Error types for the J-Quants API client.

use shihyo_core::{SourceError, SourceErrorKind};
use thiserror::Error;

/// Errors that can occur when using the J-Quants API.
#[derive(Debug, Error)]
pub enum JQuantsError {
    /// Missing API key.
    #[error("JQUANTS_API_KEY environment variable not set")]
    MissingApiKey,

    /// The security code was empty.
    #[error("Security code is required")]
    InvalidCode,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-success status.
    #[error("J-Quants {endpoint} returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Endpoint path that failed.
        endpoint: String,
        /// Response body, possibly empty.
        body: String,
    },

    /// API returned a payload that could not be used.
    #[error("J-Quants API error: {0}")]
    Api(String),

    /// No data available.
    #[error("No data available: {0}")]
    NotFound(String),
}

impl JQuantsError {
    /// Classifies this error into the data source failure taxonomy.
    #[must_use]
    pub const fn kind(&self) -> SourceErrorKind {
        match self {
            Self::MissingApiKey => SourceErrorKind::Unauthorized,
            Self::Status { status, .. } => match *status {
                401 | 403 => SourceErrorKind::Unauthorized,
                404 => SourceErrorKind::NotFound,
                _ => SourceErrorKind::UpstreamError,
            },
            Self::InvalidCode | Self::NotFound(_) => SourceErrorKind::NotFound,
            Self::Request(_) | Self::Json(_) | Self::Api(_) => SourceErrorKind::UpstreamError,
        }
    }
}

impl From<JQuantsError> for SourceError {
    fn from(err: JQuantsError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> JQuantsError {
        JQuantsError::Status {
            status: code,
            endpoint: "equities/master".to_string(),
            body: String::new(),
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status(401).kind(), SourceErrorKind::Unauthorized);
        assert_eq!(status(403).kind(), SourceErrorKind::Unauthorized);
        assert_eq!(status(404).kind(), SourceErrorKind::NotFound);
        assert_eq!(status(429).kind(), SourceErrorKind::UpstreamError);
        assert_eq!(status(500).kind(), SourceErrorKind::UpstreamError);
    }

    #[test]
    fn test_other_mapping() {
        assert_eq!(JQuantsError::MissingApiKey.kind(), SourceErrorKind::Unauthorized);
        assert_eq!(JQuantsError::InvalidCode.kind(), SourceErrorKind::NotFound);
        assert_eq!(
            JQuantsError::NotFound("no quotes".to_string()).kind(),
            SourceErrorKind::NotFound
        );
        assert_eq!(
            JQuantsError::Api("bad date".to_string()).kind(),
            SourceErrorKind::UpstreamError
        );
    }

    #[test]
    fn test_into_source_error() {
        let err: SourceError = status(401).into();
        assert_eq!(err.kind(), SourceErrorKind::Unauthorized);
        assert_eq!(
            err.message(),
            "J-Quants equities/master returned HTTP 401: "
        );
    }
}
