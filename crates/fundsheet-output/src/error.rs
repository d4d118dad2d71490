//! Error types for output operations.

use thiserror::Error;

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while rendering or exporting a report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Workbook writer error.
    #[error("Workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error while reading the price frame.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Table does not fit the sheet layout.
    #[error("Layout error: {0}")]
    Layout(String),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl<W> From<csv::IntoInnerError<W>> for ExportError {
    fn from(err: csv::IntoInnerError<W>) -> Self {
        Self::Io(err.into_error())
    }
}

impl From<std::string::FromUtf8Error> for ExportError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}
