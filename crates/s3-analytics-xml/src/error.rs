//! Errors raised while reading or writing analytics XML.

use std::io;

/// Errors that can occur during XML marshalling or unmarshalling.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// Writing to the output buffer failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document is not well-formed XML.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// A required element was not present.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The document ended inside the named element.
    #[error("unexpected end of document in {0}")]
    UnexpectedEof(String),

    /// Text content could not be decoded or converted.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}
