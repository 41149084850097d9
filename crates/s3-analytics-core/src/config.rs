//! Export destination configuration.
//!
//! Provides [`ExportConfig`], the defaults applied to every export destination
//! built by this crate. Values are loaded from environment variables.

use s3_analytics_model::{AnalyticsS3BucketDestination, AnalyticsS3ExportFileFormat};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::arn::bucket_arn;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Defaults for analytics export destinations.
///
/// # Examples
///
/// ```
/// use s3_analytics_core::ExportConfig;
///
/// let config = ExportConfig::builder()
///     .bucket_account_id("123456789012")
///     .prefix("exports/")
///     .build();
/// let dest = config.destination("dest-bucket");
///
/// assert_eq!(dest.bucket_arn(), Some("arn:aws:s3:::dest-bucket"));
/// assert_eq!(dest.format(), Some("CSV"));
/// assert_eq!(dest.prefix(), Some("exports/"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// File format of exported data.
    #[builder(default)]
    pub format: AnalyticsS3ExportFileFormat,

    /// Account expected to own destination buckets. Ownership is not checked when unset.
    #[builder(default, setter(into, strip_option))]
    pub bucket_account_id: Option<String>,

    /// Key prefix for exported objects.
    #[builder(default, setter(into, strip_option))]
    pub prefix: Option<String>,

    /// AWS partition used when building bucket ARNs (e.g. `"aws"`, `"aws-cn"`).
    #[builder(default = String::from("aws"), setter(into))]
    pub partition: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: AnalyticsS3ExportFileFormat::default(),
            bucket_account_id: None,
            prefix: None,
            partition: String::from("aws"),
        }
    }
}

impl ExportConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `ANALYTICS_EXPORT_FORMAT` | `format` |
    /// | `ANALYTICS_EXPORT_BUCKET_ACCOUNT_ID` | `bucket_account_id` |
    /// | `ANALYTICS_EXPORT_PREFIX` | `prefix` |
    /// | `AWS_PARTITION` | `partition` |
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown format or a malformed account ID.
    pub fn from_env() -> AnalyticsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown format or a malformed account ID.
    pub fn from_lookup<F>(lookup: F) -> AnalyticsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("ANALYTICS_EXPORT_FORMAT") {
            let format = AnalyticsS3ExportFileFormat::from(v.as_str());
            if format.as_str() != v {
                return Err(AnalyticsError::Config(format!("unsupported export format: {v}")));
            }
            config.format = format;
        }
        if let Some(v) = lookup("ANALYTICS_EXPORT_BUCKET_ACCOUNT_ID") {
            validate_account_id(&v)?;
            config.bucket_account_id = Some(v);
        }
        if let Some(v) = lookup("ANALYTICS_EXPORT_PREFIX") {
            config.prefix = Some(v);
        }
        if let Some(v) = lookup("AWS_PARTITION") {
            if v.is_empty() {
                return Err(AnalyticsError::Config("AWS_PARTITION is empty".to_owned()));
            }
            config.partition = v;
        }

        tracing::debug!(
            format = %config.format,
            bucket_account_id = ?config.bucket_account_id,
            prefix = ?config.prefix,
            partition = %config.partition,
            "loaded analytics export configuration"
        );
        Ok(config)
    }

    /// Build a destination for `bucket` carrying this configuration's defaults.
    #[must_use]
    pub fn destination(&self, bucket: &str) -> AnalyticsS3BucketDestination {
        let mut dest = AnalyticsS3BucketDestination::new();
        dest.with_format(self.format)
            .with_bucket_arn(bucket_arn(&self.partition, bucket));
        dest.set_bucket_account_id(self.bucket_account_id.clone());
        dest.set_prefix(self.prefix.clone());
        dest
    }
}

fn validate_account_id(id: &str) -> AnalyticsResult<()> {
    if id.len() != 12 || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(AnalyticsError::InvalidAccountId(id.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_should_create_default_config() {
        let config = ExportConfig::default();
        assert_eq!(config.format, AnalyticsS3ExportFileFormat::Csv);
        assert!(config.bucket_account_id.is_none());
        assert!(config.prefix.is_none());
        assert_eq!(config.partition, "aws");
        assert_eq!(ExportConfig::builder().build(), config);
    }

    #[test]
    fn test_should_load_defaults_without_variables() {
        let config = ExportConfig::from_lookup(|_| None).expect("config should load");
        assert_eq!(config, ExportConfig::default());
    }

    #[test]
    fn test_should_load_from_variables() {
        let config = ExportConfig::from_lookup(lookup_from(&[
            ("ANALYTICS_EXPORT_FORMAT", "CSV"),
            ("ANALYTICS_EXPORT_BUCKET_ACCOUNT_ID", "123456789012"),
            ("ANALYTICS_EXPORT_PREFIX", "exports/2024/"),
            ("AWS_PARTITION", "aws-cn"),
        ]))
        .expect("config should load");

        assert_eq!(config.bucket_account_id.as_deref(), Some("123456789012"));
        assert_eq!(config.prefix.as_deref(), Some("exports/2024/"));
        assert_eq!(config.partition, "aws-cn");
    }

    #[test]
    fn test_should_reject_invalid_account_id() {
        for id in ["12345", "abcdefghijkl", "1234567890123"] {
            let result = ExportConfig::from_lookup(lookup_from(&[(
                "ANALYTICS_EXPORT_BUCKET_ACCOUNT_ID",
                id,
            )]));
            assert!(matches!(result, Err(AnalyticsError::InvalidAccountId(_))));
        }
    }

    #[test]
    fn test_should_reject_unknown_format() {
        let result =
            ExportConfig::from_lookup(lookup_from(&[("ANALYTICS_EXPORT_FORMAT", "ORC")]));
        assert!(matches!(result, Err(AnalyticsError::Config(_))));
    }

    #[test]
    fn test_should_build_destination_from_config() {
        let config = ExportConfig::builder()
            .bucket_account_id("123456789012")
            .partition("aws-cn")
            .build();

        let dest = config.destination("dest-bucket");

        assert_eq!(dest.format(), Some("CSV"));
        assert_eq!(dest.bucket_account_id(), Some("123456789012"));
        assert_eq!(dest.bucket_arn(), Some("arn:aws-cn:s3:::dest-bucket"));
        assert!(dest.prefix().is_none());
    }

    #[test]
    fn test_should_serialize_config_in_camel_case() {
        let config = ExportConfig::builder().prefix("p/").build();
        let json = serde_json::to_value(&config).expect("serialize");
        assert_eq!(json["format"], "CSV");
        assert_eq!(json["bucketAccountId"], serde_json::Value::Null);
        assert_eq!(json["prefix"], "p/");
        assert_eq!(json["partition"], "aws");
    }
}
