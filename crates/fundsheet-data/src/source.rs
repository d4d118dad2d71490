//! The fetch seam between the report pipeline and the data provider.

use crate::alphavantage::Function;
use crate::error::Result;
use serde_json::{Map, Value};

/// A validated response document: a flat JSON object as returned by the API.
pub type Document = Map<String, Value>;

/// Anything that can produce validated documents for a symbol.
///
/// Implemented by the live client, by the caching wrapper, and by in-memory
/// fixtures in tests. Fetches are awaited one at a time, so no `Send`
/// bound is required.
#[allow(async_fn_in_trait)]
pub trait StatementSource {
    /// Fetch one document.
    async fn fetch(&self, function: Function, symbol: &str) -> Result<Document>;
}

impl<S: StatementSource + ?Sized> StatementSource for &S {
    async fn fetch(&self, function: Function, symbol: &str) -> Result<Document> {
        (**self).fetch(function, symbol).await
    }
}
