//! Alpha Vantage HTTP client.

use super::function::Function;
use super::response::validate_response;
use crate::error::{DataError, Result};
use crate::source::{Document, StatementSource};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Alpha Vantage query endpoint
const ALPHA_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request
const USER_AGENT: &str = concat!("fundsheet/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage API client
pub struct AlphaVantageClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AlphaVantageClient {
    /// Create a client for the public endpoint.
    ///
    /// # Example
    /// ```no_run
    /// use fundsheet_data::alphavantage::{AlphaVantageClient, Function};
    /// use fundsheet_data::StatementSource;
    ///
    /// # async fn example() -> fundsheet_data::Result<()> {
    /// let client = AlphaVantageClient::new("demo")?;
    /// let overview = client.fetch(Function::Overview, "IBM").await?;
    /// println!("{:?}", overview.get("PERatio"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, ALPHA_VANTAGE_BASE_URL)
    }

    /// Create a client against a different endpoint, e.g. a local mirror.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Endpoint this client queries.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl StatementSource for AlphaVantageClient {
    async fn fetch(&self, function: Function, symbol: &str) -> Result<Document> {
        if symbol.trim().is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        debug!(%function, symbol, "requesting Alpha Vantage");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("function", function.as_str()),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(DataError::Network)?;

        if !response.status().is_success() {
            return Err(DataError::Http(format!(
                "Failed to fetch {function} for {symbol}: HTTP {}",
                response.status()
            )));
        }

        let body: Value = response.json().await.map_err(DataError::Network)?;
        validate_response(function, symbol, body)
    }
}

impl std::fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_key() {
        let client = AlphaVantageClient::new("SECRETKEY").unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("SECRETKEY"));
        assert!(debug.contains("alphavantage.co"));
    }

    #[tokio::test]
    async fn test_empty_symbol_rejected_before_request() {
        let client = AlphaVantageClient::with_base_url("key", "http://127.0.0.1:9").unwrap();
        let result = client.fetch(Function::Overview, "  ").await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }
}
