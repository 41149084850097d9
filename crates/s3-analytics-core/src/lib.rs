//! Configuration and export document handling for S3 bucket analytics.
//!
//! This crate ties the value types of `s3-analytics-model` to the XML layer of
//! `s3-analytics-xml`: it builds export destinations from environment
//! configuration and renders or parses whole analytics configuration documents.

pub mod arn;
pub mod config;
mod error;
pub mod export;

pub use config::ExportConfig;
pub use error::{AnalyticsError, AnalyticsResult};
pub use export::{
    parse_configuration, parse_configuration_list, render_configuration,
    render_configuration_list, storage_class_analysis,
};
