//! Whole analytics configuration documents.

use s3_analytics_model::{
    AnalyticsConfiguration, AnalyticsExportDestination, AnalyticsS3BucketDestination,
    ListBucketAnalyticsConfigurationsResult, StorageClassAnalysis, StorageClassAnalysisDataExport,
    StorageClassAnalysisSchemaVersion,
};
use s3_analytics_xml::{from_xml, to_xml};

use crate::error::AnalyticsResult;

/// Root element of a single analytics configuration document.
pub const CONFIGURATION_ROOT: &str = "AnalyticsConfiguration";

/// Root element of a list of analytics configurations.
pub const CONFIGURATION_LIST_ROOT: &str = "ListBucketAnalyticsConfigurationResult";

/// Wrap `destination` in a configuration that exports storage class analysis
/// for the whole bucket using the current schema version.
#[must_use]
pub fn storage_class_analysis(
    id: impl Into<String>,
    destination: AnalyticsS3BucketDestination,
) -> AnalyticsConfiguration {
    AnalyticsConfiguration {
        id: id.into(),
        filter: None,
        storage_class_analysis: StorageClassAnalysis {
            data_export: Some(StorageClassAnalysisDataExport {
                output_schema_version: Some(StorageClassAnalysisSchemaVersion::V1),
                destination: Some(AnalyticsExportDestination {
                    s3_bucket_destination: Some(destination),
                }),
            }),
        },
    }
}

/// Render a configuration as the XML body of a put request.
///
/// # Errors
///
/// Returns an error if XML serialization fails.
pub fn render_configuration(config: &AnalyticsConfiguration) -> AnalyticsResult<Vec<u8>> {
    let body = to_xml(CONFIGURATION_ROOT, config)?;
    tracing::debug!(id = %config.id, bytes = body.len(), "rendered analytics configuration");
    Ok(body)
}

/// Parse the XML body of a get response.
///
/// # Errors
///
/// Returns an error if the document is malformed or has no `Id`.
pub fn parse_configuration(xml: &[u8]) -> AnalyticsResult<AnalyticsConfiguration> {
    let config: AnalyticsConfiguration = from_xml(xml)?;
    tracing::debug!(
        id = %config.id,
        has_destination = config.s3_bucket_destination().is_some(),
        "parsed analytics configuration"
    );
    Ok(config)
}

/// Render a list of configurations as the XML body of a list response.
///
/// # Errors
///
/// Returns an error if XML serialization fails.
pub fn render_configuration_list(
    list: &ListBucketAnalyticsConfigurationsResult,
) -> AnalyticsResult<Vec<u8>> {
    let body = to_xml(CONFIGURATION_LIST_ROOT, list)?;
    tracing::debug!(
        count = list.analytics_configurations.len(),
        bytes = body.len(),
        "rendered analytics configuration list"
    );
    Ok(body)
}

/// Parse the XML body of a list response.
///
/// # Errors
///
/// Returns an error if the document is malformed.
pub fn parse_configuration_list(
    xml: &[u8],
) -> AnalyticsResult<ListBucketAnalyticsConfigurationsResult> {
    let list: ListBucketAnalyticsConfigurationsResult = from_xml(xml)?;
    tracing::debug!(
        count = list.analytics_configurations.len(),
        truncated = ?list.is_truncated,
        "parsed analytics configuration list"
    );
    Ok(list)
}
