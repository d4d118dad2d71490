//! Caching layer for API responses.

pub mod source;
pub mod sqlite;

pub use source::{CacheConfig, CachedSource, DEFAULT_CACHE_TTL};
pub use sqlite::{CacheStats, SqliteCache};
