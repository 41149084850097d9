//! Analytics configuration documents that embed the export destination.

use crate::destination::AnalyticsS3BucketDestination;
use crate::types::StorageClassAnalysisSchemaVersion;

/// An object tag used in analytics filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

/// Selects the objects an analytics configuration applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsFilter {
    /// Objects whose key starts with the prefix.
    Prefix(String),
    /// Objects carrying the tag.
    Tag(Tag),
    /// Objects matching the optional prefix and every tag.
    And {
        /// Key prefix, if any.
        prefix: Option<String>,
        /// Tags that must all be present.
        tags: Vec<Tag>,
    },
}

/// Container for the export destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsExportDestination {
    /// The S3 bucket receiving the export.
    pub s3_bucket_destination: Option<AnalyticsS3BucketDestination>,
}

/// How and where storage class analysis data is exported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageClassAnalysisDataExport {
    /// Schema version of the exported rows.
    pub output_schema_version: Option<StorageClassAnalysisSchemaVersion>,
    /// Export target.
    pub destination: Option<AnalyticsExportDestination>,
}

/// Storage class analysis settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageClassAnalysis {
    /// Export settings; analysis runs without exporting when absent.
    pub data_export: Option<StorageClassAnalysisDataExport>,
}

/// A bucket analytics configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsConfiguration {
    /// Configuration ID, unique within the bucket.
    pub id: String,
    /// Object filter; the whole bucket is analysed when absent.
    pub filter: Option<AnalyticsFilter>,
    /// Storage class analysis settings.
    pub storage_class_analysis: StorageClassAnalysis,
}

impl AnalyticsConfiguration {
    /// The S3 bucket destination, if the configuration exports to one.
    #[must_use]
    pub fn s3_bucket_destination(&self) -> Option<&AnalyticsS3BucketDestination> {
        self.storage_class_analysis
            .data_export
            .as_ref()?
            .destination
            .as_ref()?
            .s3_bucket_destination
            .as_ref()
    }
}

/// One page of analytics configurations of a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketAnalyticsConfigurationsResult {
    /// Configurations in this page.
    pub analytics_configurations: Vec<AnalyticsConfiguration>,
    /// Whether more pages follow.
    pub is_truncated: Option<bool>,
    /// Token the page was requested with.
    pub continuation_token: Option<String>,
    /// Token for the next page.
    pub next_continuation_token: Option<String>,
}
