//! Error types for table construction.

use thiserror::Error;

/// Result type for metric operations.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Errors that can occur while shaping metric tables.
///
/// Data-quality problems (missing line items, short histories, unparsable
/// numbers) are not errors; they surface as absent values or empty tables.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Row width does not match the table's column count
    #[error("Row '{metric}' has {found} values, table has {expected} columns")]
    RowWidth {
        /// Metric name of the offending row
        metric: String,
        /// Number of columns in the table
        expected: usize,
        /// Number of values in the row
        found: usize,
    },
}
