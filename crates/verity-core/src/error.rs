//! Error types for the rendering library.
//!
//! The formatter itself never fails. Errors only arise at the edges:
//!
//! - [`ResponseError`] - upstream analysis documents that cannot be rendered
//! - [`UrlValidationError`] - source URLs that are not safe to link
//! - [`ParseModeError`] - unknown formatter mode names

/// Errors raised while accepting an upstream analysis response.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The upstream service could not obtain a transcript for the source.
    #[error("{0}")]
    TranscriptUnavailable(String),

    /// The upstream service reported any other failure.
    #[error("analysis failed: {0}")]
    Upstream(String),

    /// The response document is not valid JSON for the expected shape.
    #[error("invalid analysis response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    /// URL is empty
    #[error("URL is empty")]
    Empty,
    /// URL doesn't start with http:// or https://
    #[error("URL must start with http:// or https://")]
    InvalidProtocol,
    /// URL has no host
    #[error("URL has no host")]
    NoHost,
}

/// Unknown formatter mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}' (expected 'summary' or 'analysis')")]
pub struct ParseModeError(pub String);
