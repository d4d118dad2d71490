//! A [`StatementSource`] that reads through the response cache.

use super::sqlite::SqliteCache;
use crate::alphavantage::Function;
use crate::error::Result;
use crate::source::{Document, StatementSource};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default lifetime of a cached response.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Configuration for cached fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether to use the cache at all.
    pub enabled: bool,
    /// Whether to skip cached entries and overwrite them.
    pub refresh: bool,
    /// Maximum age of a usable entry.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            refresh: false,
            ttl: DEFAULT_CACHE_TTL,
        }
    }
}

/// Wraps a source with a SQLite response cache.
///
/// Only documents that passed validation reach the cache, so an error
/// response is retried on the next run. Cache failures are logged and
/// never fail a fetch.
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    cache: SqliteCache,
    config: CacheConfig,
}

impl<S> CachedSource<S> {
    /// Wrap `inner` with `cache`.
    pub const fn new(inner: S, cache: SqliteCache, config: CacheConfig) -> Self {
        Self {
            inner,
            cache,
            config,
        }
    }

    /// The underlying cache.
    pub const fn cache(&self) -> &SqliteCache {
        &self.cache
    }

    /// The wrapped source.
    pub const fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: StatementSource> StatementSource for CachedSource<S> {
    async fn fetch(&self, function: Function, symbol: &str) -> Result<Document> {
        if !self.config.enabled {
            return self.inner.fetch(function, symbol).await;
        }

        if !self.config.refresh {
            match self.cache.get_response(function, symbol, self.config.ttl) {
                Ok(Some(document)) => {
                    debug!(%function, symbol, "cache hit");
                    return Ok(document);
                }
                Ok(None) => debug!(%function, symbol, "cache miss"),
                Err(e) => warn!(%function, symbol, error = %e, "cache read failed"),
            }
        }

        let document = self.inner.fetch(function, symbol).await?;
        if let Err(e) = self.cache.put_response(function, symbol, &document) {
            warn!(%function, symbol, error = %e, "cache write failed");
        }
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use serde_json::json;
    use std::cell::Cell;

    /// Counts fetches and fails for the `BAD` symbol.
    #[derive(Debug, Default)]
    struct CountingSource {
        calls: Cell<usize>,
    }

    impl StatementSource for CountingSource {
        async fn fetch(&self, function: Function, symbol: &str) -> Result<Document> {
            self.calls.set(self.calls.get() + 1);
            if symbol == "BAD" {
                return Err(DataError::EmptyResponse {
                    function: function.to_string(),
                    symbol: symbol.to_string(),
                });
            }
            Ok(json!({ "Symbol": symbol, "call": self.calls.get() })
                .as_object()
                .cloned()
                .unwrap_or_default())
        }
    }

    fn cached(config: CacheConfig) -> CachedSource<CountingSource> {
        CachedSource::new(
            CountingSource::default(),
            SqliteCache::in_memory().unwrap(),
            config,
        )
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let source = cached(CacheConfig::default());

        let first = source.fetch(Function::Overview, "IBM").await.unwrap();
        let second = source.fetch(Function::Overview, "IBM").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.inner().calls.get(), 1);
    }

    #[tokio::test]
    async fn test_refresh_overwrites() {
        let source = cached(CacheConfig {
            refresh: true,
            ..CacheConfig::default()
        });

        source.fetch(Function::Overview, "IBM").await.unwrap();
        let second = source.fetch(Function::Overview, "IBM").await.unwrap();

        assert_eq!(source.inner().calls.get(), 2);
        let stored = source
            .cache()
            .get_response(Function::Overview, "IBM", DEFAULT_CACHE_TTL)
            .unwrap();
        assert_eq!(stored, Some(second));
    }

    #[tokio::test]
    async fn test_disabled_cache_is_bypassed() {
        let source = cached(CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        });

        source.fetch(Function::Overview, "IBM").await.unwrap();
        source.fetch(Function::Overview, "IBM").await.unwrap();

        assert_eq!(source.inner().calls.get(), 2);
        assert_eq!(source.cache().get_stats().unwrap().total_responses, 0);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let source = cached(CacheConfig::default());

        assert!(source.fetch(Function::Overview, "BAD").await.is_err());
        assert!(source.fetch(Function::Overview, "BAD").await.is_err());

        assert_eq!(source.inner().calls.get(), 2);
        assert_eq!(source.cache().get_stats().unwrap().total_responses, 0);
    }
}
