//! Closed enumerations used by analytics configurations.

use serde::{Deserialize, Serialize};

/// File format of exported storage class analysis data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnalyticsS3ExportFileFormat {
    /// Comma-separated values.
    #[default]
    #[serde(rename = "CSV")]
    Csv,
}

impl AnalyticsS3ExportFileFormat {
    /// Returns the wire value of this format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
        }
    }
}

impl std::fmt::Display for AnalyticsS3ExportFileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AnalyticsS3ExportFileFormat {
    fn from(s: &str) -> Self {
        match s {
            "CSV" => Self::Csv,
            _ => Self::default(),
        }
    }
}

impl From<AnalyticsS3ExportFileFormat> for String {
    fn from(format: AnalyticsS3ExportFileFormat) -> Self {
        format.as_str().to_owned()
    }
}

/// Version of the schema used for exported analysis rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StorageClassAnalysisSchemaVersion {
    /// The only published schema.
    #[default]
    #[serde(rename = "V_1")]
    V1,
}

impl StorageClassAnalysisSchemaVersion {
    /// Returns the wire value of this schema version.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "V_1",
        }
    }
}

impl std::fmt::Display for StorageClassAnalysisSchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StorageClassAnalysisSchemaVersion {
    fn from(s: &str) -> Self {
        match s {
            "V_1" => Self::V1,
            _ => Self::default(),
        }
    }
}
