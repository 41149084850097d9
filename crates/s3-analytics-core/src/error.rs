//! Error types for analytics export handling.

use s3_analytics_xml::XmlError;

/// Error type for analytics configuration and export documents.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// Invalid AWS account ID format.
    #[error("invalid AWS account ID: {0} (must be 12-digit numeric string)")]
    InvalidAccountId(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The configuration document could not be written or read.
    #[error(transparent)]
    Xml(#[from] XmlError),
}

/// Convenience result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
