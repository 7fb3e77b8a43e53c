//! Serialisation of the in-memory result lists for download.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ClientError;
use crate::host::ExportFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ClientError::Export(format!("unsupported format: {other}"))),
        }
    }
}

/// Builds `{stem}.{ext}` with content in the requested format: indented
/// JSON, or CSV with a header row taken from the record's field names.
pub fn export_records<T: Serialize>(
    records: &[T],
    stem: &str,
    format: ExportFormat,
) -> Result<ExportFile, ClientError> {
    let content = match format {
        ExportFormat::Json => serde_json::to_string_pretty(records)?,
        ExportFormat::Csv => to_csv(records)?,
    };
    Ok(ExportFile {
        filename: format!("{stem}.{}", format.extension()),
        content_type: format.content_type().to_string(),
        content,
    })
}

fn to_csv<T: Serialize>(records: &[T]) -> Result<String, ClientError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| ClientError::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ClientError::Export(e.error().to_string()))?;
    String::from_utf8(bytes).map_err(|e| ClientError::Export(e.to_string()))
}
