//! Error type for the report pipeline.

use fundsheet_data::DataError;
use fundsheet_metrics::MetricsError;
use fundsheet_output::ExportError;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a report.
#[derive(Debug, Error)]
pub enum Error {
    /// Fetching or caching failed
    #[error(transparent)]
    Data(#[from] DataError),

    /// Table construction failed
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    /// Rendering or export failed
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Ticker symbol is empty or malformed
    #[error("Invalid ticker symbol: {0:?}")]
    InvalidSymbol(String),
}
