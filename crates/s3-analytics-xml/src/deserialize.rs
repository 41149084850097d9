//! Reading analytics model types from RestXml.
//!
//! Unknown elements are skipped so documents from newer service versions still
//! parse. Self-closing text elements such as `<Prefix/>` read as empty strings.
//! Text content is returned exactly as written, surrounding whitespace included;
//! whitespace between elements is ignored.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use s3_analytics_model::{
    AnalyticsConfiguration, AnalyticsExportDestination, AnalyticsFilter,
    AnalyticsS3BucketDestination, ListBucketAnalyticsConfigurationsResult, StorageClassAnalysis,
    StorageClassAnalysisDataExport, StorageClassAnalysisSchemaVersion, Tag,
};

use crate::error::XmlError;

/// Trait for reading a type from XML.
///
/// The opening tag of the element has already been consumed by the caller; the
/// implementation reads child content through the matching end tag.
pub trait S3Deserialize: Sized {
    /// Deserialize an instance from the given XML reader.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is malformed or required fields are missing.
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError>;
}

/// Deserialize an XML document into a typed value.
///
/// Finds the root element and delegates to the type's `S3Deserialize` implementation.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed or deserialization fails.
pub fn from_xml<T: S3Deserialize>(xml: &[u8]) -> Result<T, XmlError> {
    let mut reader = Reader::from_reader(xml);

    loop {
        match reader.read_event()? {
            Event::Start(_) => return T::deserialize_xml(&mut reader),
            Event::Eof => return Err(XmlError::MissingElement("root element".to_owned())),
            // Declaration, comments, processing instructions.
            _ => {}
        }
    }
}

fn element_name<'a>(e: &'a BytesStart<'_>) -> Result<&'a str, XmlError> {
    std::str::from_utf8(e.local_name().into_inner())
        .map_err(|err| XmlError::ParseError(err.to_string()))
}

/// Call `visit` for every child element until the parent's end tag.
///
/// `visit` receives the child's local name and whether it was self-closing.
/// For an open child it must consume everything through the child's end tag.
fn for_each_child<F>(
    reader: &mut Reader<&[u8]>,
    context: &str,
    mut visit: F,
) -> Result<(), XmlError>
where
    F: FnMut(&mut Reader<&[u8]>, &str, bool) -> Result<(), XmlError>,
{
    loop {
        match reader.read_event()? {
            Event::Start(e) => visit(reader, element_name(&e)?, false)?,
            Event::Empty(e) => visit(reader, element_name(&e)?, true)?,
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(XmlError::UnexpectedEof(context.to_owned())),
            _ => {}
        }
    }
}

/// Read the text of the current element and consume its end tag.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::CData(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(e) => {
                if let Some(ch) = e
                    .resolve_char_ref()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?
                {
                    text.push(ch);
                } else {
                    let name = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                        .ok_or_else(|| XmlError::ParseError(format!("unknown entity &{name};")))?;
                    text.push_str(resolved);
                }
            }
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(XmlError::UnexpectedEof("text content".to_owned())),
            _ => {}
        }
    }
}

fn read_text(reader: &mut Reader<&[u8]>, empty: bool) -> Result<String, XmlError> {
    if empty {
        Ok(String::new())
    } else {
        read_text_content(reader)
    }
}

fn read_nested<T: S3Deserialize + Default>(
    reader: &mut Reader<&[u8]>,
    empty: bool,
) -> Result<T, XmlError> {
    if empty {
        Ok(T::default())
    } else {
        T::deserialize_xml(reader)
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => return Err(XmlError::UnexpectedEof("skipped element".to_owned())),
            _ => {}
        }
    }
}

fn skip_unknown(reader: &mut Reader<&[u8]>, name: &str, empty: bool) -> Result<(), XmlError> {
    tracing::trace!(element = name, "skipping unrecognized element");
    if empty { Ok(()) } else { skip_element(reader) }
}

fn parse_bool(s: &str) -> Result<bool, XmlError> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(XmlError::ParseError(format!("invalid boolean: {s}"))),
    }
}

impl S3Deserialize for Tag {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut tag = Tag::default();
        for_each_child(reader, "Tag", |reader, name, empty| {
            match name {
                "Key" => tag.key = read_text(reader, empty)?,
                "Value" => tag.value = read_text(reader, empty)?,
                _ => skip_unknown(reader, name, empty)?,
            }
            Ok(())
        })?;
        Ok(tag)
    }
}

fn read_and_operator(
    reader: &mut Reader<&[u8]>,
    empty: bool,
) -> Result<AnalyticsFilter, XmlError> {
    let mut prefix = None;
    let mut tags: Vec<Tag> = Vec::new();
    if !empty {
        for_each_child(reader, "And", |reader, name, empty| {
            match name {
                "Prefix" => prefix = Some(read_text(reader, empty)?),
                "Tag" => tags.push(read_nested(reader, empty)?),
                _ => skip_unknown(reader, name, empty)?,
            }
            Ok(())
        })?;
    }
    Ok(AnalyticsFilter::And { prefix, tags })
}

impl S3Deserialize for AnalyticsFilter {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut filter = None;
        for_each_child(reader, "Filter", |reader, name, empty| {
            match name {
                "Prefix" => filter = Some(AnalyticsFilter::Prefix(read_text(reader, empty)?)),
                "Tag" => filter = Some(AnalyticsFilter::Tag(read_nested(reader, empty)?)),
                "And" => filter = Some(read_and_operator(reader, empty)?),
                _ => skip_unknown(reader, name, empty)?,
            }
            Ok(())
        })?;
        filter.ok_or_else(|| XmlError::MissingElement("Filter predicate".to_owned()))
    }
}

impl S3Deserialize for AnalyticsS3BucketDestination {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut dest = AnalyticsS3BucketDestination::new();
        for_each_child(reader, "S3BucketDestination", |reader, name, empty| {
            match name {
                "Format" => dest.set_format(Some(read_text(reader, empty)?)),
                "BucketAccountId" => dest.set_bucket_account_id(Some(read_text(reader, empty)?)),
                "Bucket" => dest.set_bucket_arn(Some(read_text(reader, empty)?)),
                "Prefix" => dest.set_prefix(Some(read_text(reader, empty)?)),
                _ => skip_unknown(reader, name, empty)?,
            }
            Ok(())
        })?;
        Ok(dest)
    }
}

impl S3Deserialize for AnalyticsExportDestination {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut destination = AnalyticsExportDestination::default();
        for_each_child(reader, "Destination", |reader, name, empty| {
            match name {
                "S3BucketDestination" => {
                    destination.s3_bucket_destination = Some(read_nested(reader, empty)?);
                }
                _ => skip_unknown(reader, name, empty)?,
            }
            Ok(())
        })?;
        Ok(destination)
    }
}

impl S3Deserialize for StorageClassAnalysisDataExport {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut export = StorageClassAnalysisDataExport::default();
        for_each_child(reader, "DataExport", |reader, name, empty| {
            match name {
                "OutputSchemaVersion" => {
                    let raw = read_text(reader, empty)?;
                    let version = StorageClassAnalysisSchemaVersion::from(raw.as_str());
                    if version.as_str() != raw {
                        return Err(XmlError::ParseError(format!(
                            "unknown output schema version: {raw}"
                        )));
                    }
                    export.output_schema_version = Some(version);
                }
                "Destination" => export.destination = Some(read_nested(reader, empty)?),
                _ => skip_unknown(reader, name, empty)?,
            }
            Ok(())
        })?;
        Ok(export)
    }
}

impl S3Deserialize for StorageClassAnalysis {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut analysis = StorageClassAnalysis::default();
        for_each_child(reader, "StorageClassAnalysis", |reader, name, empty| {
            match name {
                "DataExport" => analysis.data_export = Some(read_nested(reader, empty)?),
                _ => skip_unknown(reader, name, empty)?,
            }
            Ok(())
        })?;
        Ok(analysis)
    }
}

impl S3Deserialize for AnalyticsConfiguration {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut id = None;
        let mut filter = None;
        let mut storage_class_analysis = StorageClassAnalysis::default();

        for_each_child(reader, "AnalyticsConfiguration", |reader, name, empty| {
            match name {
                "Id" => id = Some(read_text(reader, empty)?),
                // An empty filter selects the whole bucket, same as no filter.
                "Filter" if empty => filter = None,
                "Filter" => filter = Some(AnalyticsFilter::deserialize_xml(reader)?),
                "StorageClassAnalysis" => storage_class_analysis = read_nested(reader, empty)?,
                _ => skip_unknown(reader, name, empty)?,
            }
            Ok(())
        })?;

        Ok(AnalyticsConfiguration {
            id: id.ok_or_else(|| XmlError::MissingElement("Id".to_owned()))?,
            filter,
            storage_class_analysis,
        })
    }
}

impl S3Deserialize for ListBucketAnalyticsConfigurationsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = ListBucketAnalyticsConfigurationsResult::default();
        for_each_child(
            reader,
            "ListBucketAnalyticsConfigurationResult",
            |reader, name, empty| {
                match name {
                    "IsTruncated" => {
                        result.is_truncated = Some(parse_bool(&read_text(reader, empty)?)?);
                    }
                    "ContinuationToken" => {
                        result.continuation_token = Some(read_text(reader, empty)?);
                    }
                    "NextContinuationToken" => {
                        result.next_continuation_token = Some(read_text(reader, empty)?);
                    }
                    "AnalyticsConfiguration" if empty => {
                        return Err(XmlError::MissingElement("Id".to_owned()));
                    }
                    "AnalyticsConfiguration" => result
                        .analytics_configurations
                        .push(AnalyticsConfiguration::deserialize_xml(reader)?),
                    _ => skip_unknown(reader, name, empty)?,
                }
                Ok(())
            },
        )?;
        Ok(result)
    }
}
