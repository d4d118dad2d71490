//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while fetching or caching documents.
#[derive(Debug, Error)]
pub enum DataError {
    /// The API answered with an `Error Message`
    #[error("Alpha Vantage API error for {function} {symbol}: {message}")]
    Api {
        /// API function that was called
        function: String,
        /// Symbol that was queried
        symbol: String,
        /// Message returned by the API
        message: String,
    },

    /// The API answered with an informational notice, usually a rate limit
    #[error(
        "Alpha Vantage returned a notice for {function} {symbol} (possible rate limit): {message}"
    )]
    Information {
        /// API function that was called
        function: String,
        /// Symbol that was queried
        symbol: String,
        /// Notice text
        message: String,
    },

    /// The API answered with an empty document
    #[error("Alpha Vantage returned an empty response for {function} {symbol}")]
    EmptyResponse {
        /// API function that was called
        function: String,
        /// Symbol that was queried
        symbol: String,
    },

    /// The API answered with something other than a JSON object
    #[error("Unexpected response for {function} {symbol}: {reason}")]
    UnexpectedResponse {
        /// API function that was called
        function: String,
        /// Symbol that was queried
        symbol: String,
        /// What was wrong with it
        reason: String,
    },

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP error: {0}")]
    Http(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid symbol
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(String),
}

impl DataError {
    /// Whether the error came from the API itself rather than transport or cache.
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Api { .. }
                | Self::Information { .. }
                | Self::EmptyResponse { .. }
                | Self::UnexpectedResponse { .. }
        )
    }
}
