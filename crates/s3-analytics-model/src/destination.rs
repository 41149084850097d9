//! The S3 bucket destination of an analytics export.

use crate::types::AnalyticsS3ExportFileFormat;

/// Where storage class analysis data is exported.
///
/// Every field is optional and stored verbatim. Nothing is checked here: an
/// empty descriptor, an empty prefix or an unknown format string are all
/// accepted and left for the service to reject on submission.
///
/// Mutators come in two flavours. `set_*` takes an `Option` and can clear a
/// field. `with_*` always stores a value and returns `&mut Self`, so a
/// descriptor can be filled in one expression:
///
/// ```
/// use s3_analytics_model::{AnalyticsS3BucketDestination, AnalyticsS3ExportFileFormat};
///
/// let mut dest = AnalyticsS3BucketDestination::default();
/// dest.with_format(AnalyticsS3ExportFileFormat::Csv)
///     .with_bucket_arn("arn:aws:s3:::dest-bucket")
///     .with_prefix("exports/2024/");
///
/// assert_eq!(dest.format(), Some("CSV"));
/// assert_eq!(dest.bucket_account_id(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsS3BucketDestination {
    format: Option<String>,
    bucket_account_id: Option<String>,
    bucket_arn: Option<String>,
    prefix: Option<String>,
}

impl AnalyticsS3BucketDestination {
    /// Creates an empty destination.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// File format used when exporting data.
    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Sets the export file format from its raw string form.
    pub fn set_format(&mut self, format: Option<String>) {
        self.format = format;
    }

    /// Sets the export file format from the known formats.
    ///
    /// `None` clears the field.
    pub fn set_format_type(&mut self, format: Option<AnalyticsS3ExportFileFormat>) {
        self.set_format(format.map(String::from));
    }

    /// Sets the export file format and returns `self` for chaining.
    ///
    /// Accepts a raw string or an [`AnalyticsS3ExportFileFormat`].
    pub fn with_format(&mut self, format: impl Into<String>) -> &mut Self {
        self.set_format(Some(format.into()));
        self
    }

    /// Chaining form of [`set_format_type`](Self::set_format_type).
    pub fn with_format_type(&mut self, format: Option<AnalyticsS3ExportFileFormat>) -> &mut Self {
        self.set_format_type(format);
        self
    }

    /// Account ID expected to own the destination bucket.
    ///
    /// When absent, ownership is not checked before exporting.
    #[must_use]
    pub fn bucket_account_id(&self) -> Option<&str> {
        self.bucket_account_id.as_deref()
    }

    /// Sets the account ID expected to own the destination bucket.
    pub fn set_bucket_account_id(&mut self, bucket_account_id: Option<String>) {
        self.bucket_account_id = bucket_account_id;
    }

    /// Sets the bucket owner account ID and returns `self` for chaining.
    pub fn with_bucket_account_id(&mut self, bucket_account_id: impl Into<String>) -> &mut Self {
        self.set_bucket_account_id(Some(bucket_account_id.into()));
        self
    }

    /// ARN of the bucket data is exported to.
    #[must_use]
    pub fn bucket_arn(&self) -> Option<&str> {
        self.bucket_arn.as_deref()
    }

    /// Sets the ARN of the destination bucket.
    pub fn set_bucket_arn(&mut self, bucket_arn: Option<String>) {
        self.bucket_arn = bucket_arn;
    }

    /// Sets the destination bucket ARN and returns `self` for chaining.
    pub fn with_bucket_arn(&mut self, bucket_arn: impl Into<String>) -> &mut Self {
        self.set_bucket_arn(Some(bucket_arn.into()));
        self
    }

    /// Prefix prepended to every exported object key.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Sets the key prefix of exported objects.
    pub fn set_prefix(&mut self, prefix: Option<String>) {
        self.prefix = prefix;
    }

    /// Sets the key prefix and returns `self` for chaining.
    pub fn with_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.set_prefix(Some(prefix.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_start_empty() {
        let dest = AnalyticsS3BucketDestination::new();
        assert!(dest.format().is_none());
        assert!(dest.bucket_account_id().is_none());
        assert!(dest.bucket_arn().is_none());
        assert!(dest.prefix().is_none());
        assert_eq!(dest, AnalyticsS3BucketDestination::default());
    }

    #[test]
    fn test_should_read_back_every_field_verbatim() {
        for value in ["", "CSV", "  spaced  ", "exports/2024/", "ünïcødé"] {
            let mut dest = AnalyticsS3BucketDestination::new();
            dest.set_format(Some(value.to_owned()));
            assert_eq!(dest.format(), Some(value));

            let mut dest = AnalyticsS3BucketDestination::new();
            dest.set_bucket_account_id(Some(value.to_owned()));
            assert_eq!(dest.bucket_account_id(), Some(value));

            let mut dest = AnalyticsS3BucketDestination::new();
            dest.set_bucket_arn(Some(value.to_owned()));
            assert_eq!(dest.bucket_arn(), Some(value));

            let mut dest = AnalyticsS3BucketDestination::new();
            dest.set_prefix(Some(value.to_owned()));
            assert_eq!(dest.prefix(), Some(value));
        }
    }

    #[test]
    fn test_should_clear_fields_with_none() {
        let mut dest = AnalyticsS3BucketDestination::new();
        dest.with_format("CSV")
            .with_bucket_account_id("123456789012")
            .with_bucket_arn("arn:aws:s3:::dest-bucket")
            .with_prefix("p/");

        dest.set_format(None);
        dest.set_bucket_account_id(None);
        dest.set_bucket_arn(None);
        dest.set_prefix(None);

        assert_eq!(dest, AnalyticsS3BucketDestination::default());
    }

    #[test]
    fn test_should_store_same_value_for_enum_and_string_format() {
        let mut from_enum = AnalyticsS3BucketDestination::new();
        from_enum.set_format_type(Some(AnalyticsS3ExportFileFormat::Csv));

        let mut from_string = AnalyticsS3BucketDestination::new();
        from_string.set_format(Some(AnalyticsS3ExportFileFormat::Csv.to_string()));

        assert_eq!(from_enum.format(), from_string.format());
        assert_eq!(from_enum, from_string);

        let mut chained = AnalyticsS3BucketDestination::new();
        chained.with_format(AnalyticsS3ExportFileFormat::Csv);
        assert_eq!(chained.format(), Some("CSV"));
    }

    #[test]
    fn test_should_map_missing_format_type_to_absence() {
        let mut dest = AnalyticsS3BucketDestination::new();
        dest.with_format("CSV");

        dest.with_format_type(None);

        assert!(dest.format().is_none());
        assert_ne!(dest.format(), Some("null"));
    }

    #[test]
    fn test_should_return_same_instance_from_chaining_mutators() {
        let mut dest = AnalyticsS3BucketDestination::new();
        let origin: *const AnalyticsS3BucketDestination = &dest;

        let returned: *const AnalyticsS3BucketDestination = dest.with_format("CSV");
        assert!(std::ptr::eq(origin, returned));
        let returned: *const AnalyticsS3BucketDestination =
            dest.with_format_type(Some(AnalyticsS3ExportFileFormat::Csv));
        assert!(std::ptr::eq(origin, returned));
        let returned: *const AnalyticsS3BucketDestination =
            dest.with_bucket_account_id("123456789012");
        assert!(std::ptr::eq(origin, returned));
        let returned: *const AnalyticsS3BucketDestination =
            dest.with_bucket_arn("arn:aws:s3:::dest-bucket");
        assert!(std::ptr::eq(origin, returned));
        let returned: *const AnalyticsS3BucketDestination = dest.with_prefix("p/");
        assert!(std::ptr::eq(origin, returned));
    }

    #[test]
    fn test_should_make_chained_mutation_visible_immediately() {
        let mut dest = AnalyticsS3BucketDestination::new();
        assert_eq!(dest.with_prefix("a/").prefix(), Some("a/"));
        assert_eq!(dest.with_bucket_arn("arn").bucket_arn(), Some("arn"));
        assert_eq!(dest.with_bucket_account_id("1").bucket_account_id(), Some("1"));
        assert_eq!(dest.with_format("CSV").format(), Some("CSV"));
    }

    #[test]
    fn test_should_keep_fields_independent() {
        let mut dest = AnalyticsS3BucketDestination::new();
        dest.with_format("CSV")
            .with_bucket_account_id("123456789012")
            .with_bucket_arn("arn:aws:s3:::dest-bucket")
            .with_prefix("p/");

        dest.set_prefix(Some("q/".to_owned()));
        assert_eq!(dest.format(), Some("CSV"));
        assert_eq!(dest.bucket_account_id(), Some("123456789012"));
        assert_eq!(dest.bucket_arn(), Some("arn:aws:s3:::dest-bucket"));

        dest.set_format(None);
        assert_eq!(dest.bucket_account_id(), Some("123456789012"));
        assert_eq!(dest.bucket_arn(), Some("arn:aws:s3:::dest-bucket"));
        assert_eq!(dest.prefix(), Some("q/"));
    }

    #[test]
    fn test_should_build_prefix_and_arn_only() {
        let mut dest = AnalyticsS3BucketDestination::new();
        dest.with_prefix("exports/2024/")
            .with_bucket_arn("arn:aws:s3:::dest-bucket");

        assert_eq!(dest.prefix(), Some("exports/2024/"));
        assert_eq!(dest.bucket_arn(), Some("arn:aws:s3:::dest-bucket"));
        assert!(dest.format().is_none());
        assert!(dest.bucket_account_id().is_none());
    }
}
