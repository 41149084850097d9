//! Writing analytics model types as RestXml.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use s3_analytics_model::{
    AnalyticsConfiguration, AnalyticsExportDestination, AnalyticsFilter,
    AnalyticsS3BucketDestination, ListBucketAnalyticsConfigurationsResult, StorageClassAnalysis,
    StorageClassAnalysisDataExport, StorageClassAnalysisSchemaVersion, Tag,
};

use crate::error::XmlError;

/// The S3 XML namespace.
pub const S3_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

/// Trait for writing a type as XML.
///
/// Implementors write their content into the current element. Nested types
/// open their own wrapper element; the document root is opened by [`to_xml`].
pub trait S3Serialize {
    /// Serialize this value into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Serialize a value as a complete XML document under `root_element`.
///
/// The root carries the S3 namespace and is preceded by an XML declaration.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml<T: S3Serialize>(root_element: &str, value: &T) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer
        .create_element(root_element)
        .with_attribute(("xmlns", S3_NAMESPACE))
        .write_inner_content(|w| value.serialize_xml(w))?;

    Ok(buf)
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is `Some`.
fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

fn write_optional_bool<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<bool>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, if v { "true" } else { "false" })?;
    }
    Ok(())
}

impl S3Serialize for Tag {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Tag").write_inner_content(|w| {
            write_text_element(w, "Key", &self.key)?;
            write_text_element(w, "Value", &self.value)?;
            Ok(())
        })?;
        Ok(())
    }
}

impl S3Serialize for AnalyticsFilter {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("Filter")
            .write_inner_content(|w| match self {
                Self::Prefix(prefix) => write_text_element(w, "Prefix", prefix),
                Self::Tag(tag) => tag.serialize_xml(w),
                Self::And { prefix, tags } => {
                    w.create_element("And").write_inner_content(|w| {
                        write_optional_text(w, "Prefix", prefix.as_deref())?;
                        for tag in tags {
                            tag.serialize_xml(w)?;
                        }
                        Ok(())
                    })?;
                    Ok(())
                }
            })?;
        Ok(())
    }
}

impl S3Serialize for AnalyticsS3BucketDestination {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("S3BucketDestination")
            .write_inner_content(|w| {
                write_optional_text(w, "Format", self.format())?;
                write_optional_text(w, "BucketAccountId", self.bucket_account_id())?;
                write_optional_text(w, "Bucket", self.bucket_arn())?;
                write_optional_text(w, "Prefix", self.prefix())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl S3Serialize for AnalyticsExportDestination {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Destination").write_inner_content(|w| {
            if let Some(ref dest) = self.s3_bucket_destination {
                dest.serialize_xml(w)?;
            }
            Ok(())
        })?;
        Ok(())
    }
}

impl S3Serialize for StorageClassAnalysisDataExport {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("DataExport").write_inner_content(|w| {
            write_optional_text(
                w,
                "OutputSchemaVersion",
                self.output_schema_version
                    .as_ref()
                    .map(StorageClassAnalysisSchemaVersion::as_str),
            )?;
            if let Some(ref destination) = self.destination {
                destination.serialize_xml(w)?;
            }
            Ok(())
        })?;
        Ok(())
    }
}

impl S3Serialize for StorageClassAnalysis {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("StorageClassAnalysis")
            .write_inner_content(|w| {
                if let Some(ref export) = self.data_export {
                    export.serialize_xml(w)?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

/// Writes the configuration's children; the caller opens the
/// `AnalyticsConfiguration` element.
impl S3Serialize for AnalyticsConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Id", &self.id)?;
        if let Some(ref filter) = self.filter {
            filter.serialize_xml(writer)?;
        }
        self.storage_class_analysis.serialize_xml(writer)?;
        Ok(())
    }
}

impl S3Serialize for ListBucketAnalyticsConfigurationsResult {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_bool(writer, "IsTruncated", self.is_truncated)?;
        write_optional_text(
            writer,
            "ContinuationToken",
            self.continuation_token.as_deref(),
        )?;
        for config in &self.analytics_configurations {
            writer
                .create_element("AnalyticsConfiguration")
                .write_inner_content(|w| config.serialize_xml(w))?;
        }
        write_optional_text(
            writer,
            "NextContinuationToken",
            self.next_continuation_token.as_deref(),
        )?;
        Ok(())
    }
}
