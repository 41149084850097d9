//! RestXml marshalling for S3 bucket analytics configurations.
//!
//! # Key components
//!
//! - [`S3Serialize`] and [`to_xml`] write model types as XML documents
//! - [`S3Deserialize`] and [`from_xml`] read them back
//!
//! # Conventions
//!
//! - Namespace: `http://s3.amazonaws.com/doc/2006-03-01/`
//! - Booleans: lowercase `true`/`false`
//! - Absent optional fields are omitted, empty strings are written as empty elements
//! - The destination bucket ARN travels in the `Bucket` element

pub mod deserialize;
pub mod error;
pub mod serialize;

pub use deserialize::{S3Deserialize, from_xml};
pub use error::XmlError;
pub use serialize::{S3_NAMESPACE, S3Serialize, to_xml};
