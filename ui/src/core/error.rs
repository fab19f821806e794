//! Error types for report loading and sharing.

use thiserror::Error;

/// Failures while obtaining a report record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReportError {
    /// No record carries the requested identifier.
    #[error("no report found for sample `{sample_id}`")]
    NotFound { sample_id: String },

    /// The data source could not be reached.
    #[error("report data unavailable: {0}")]
    Fetch(String),

    /// The data source answered with something that is not a report collection.
    #[error("report data malformed: {0}")]
    Parse(String),

    /// The data source did not answer within the configured window.
    #[error("report data request timed out after {ms} ms")]
    Timeout { ms: u64 },

    /// A record was found but violates the report invariants.
    #[error("report record invalid: {0}")]
    InvalidRecord(String),

    /// The selected-report slot could not be read or written.
    #[error("report cache unavailable: {0}")]
    Storage(String),
}

impl ReportError {
    /// `true` for the plain "identifier has no record" case; everything else
    /// is a data-source problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReportError::NotFound { .. })
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Parse(err.to_string())
    }
}

/// Failures while turning a report section into a share link.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShareError {
    #[error("section snapshot could not be rendered: {0}")]
    Render(String),

    #[error("section snapshot could not be encoded: {0}")]
    Encode(String),

    #[error("share link could not be built: {0}")]
    Url(String),

    #[error("share link could not be delivered: {0}")]
    Delivery(String),
}

impl From<url::ParseError> for ShareError {
    fn from(err: url::ParseError) -> Self {
        ShareError::Url(err.to_string())
    }
}
