//! Value types for S3 bucket analytics export configuration.
//!
//! The central type is [`AnalyticsS3BucketDestination`], the descriptor of
//! where storage class analysis results are exported. It is embedded in an
//! [`AnalyticsConfiguration`] through [`StorageClassAnalysis`] and
//! [`StorageClassAnalysisDataExport`].
//!
//! None of these types validate their contents; the service rejects bad values
//! when the configuration is submitted.

pub mod configuration;
pub mod destination;
pub mod types;

pub use configuration::{
    AnalyticsConfiguration, AnalyticsExportDestination, AnalyticsFilter,
    ListBucketAnalyticsConfigurationsResult, StorageClassAnalysis,
    StorageClassAnalysisDataExport, Tag,
};
pub use destination::AnalyticsS3BucketDestination;
pub use types::{AnalyticsS3ExportFileFormat, StorageClassAnalysisSchemaVersion};
