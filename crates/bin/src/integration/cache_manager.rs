//! Cache manager for Alpha Vantage responses.
//!
//! Opens the SQLite response cache at a platform-specific default location
//! and builds the cached source used by `report`.

use fundsheet_data::{AlphaVantageClient, CacheConfig, CachedSource, DataError, SqliteCache};
use std::path::PathBuf;

/// Get the default cache directory path.
///
/// Uses platform-specific cache directories:
/// - Linux: `~/.cache/fundsheet/`
/// - macOS: `~/Library/Caches/fundsheet/`
/// - Windows: `%LOCALAPPDATA%\fundsheet\`
pub(crate) fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fundsheet")
}

/// Get the cache database path.
pub(crate) fn cache_path() -> PathBuf {
    default_cache_dir().join("fundsheet.db")
}

/// Open the cache, creating the directory if needed.
pub(crate) fn open_cache() -> Result<SqliteCache, DataError> {
    let cache_path = cache_path();

    // Ensure parent directory exists
    if let Some(parent) = cache_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    SqliteCache::new(&cache_path)
}

/// Wrap the client in the response cache.
///
/// A disabled cache is kept in memory so nothing touches the disk.
pub(crate) fn cached_client(
    client: AlphaVantageClient,
    config: CacheConfig,
) -> Result<CachedSource<AlphaVantageClient>, DataError> {
    let cache = if config.enabled {
        open_cache()?
    } else {
        SqliteCache::in_memory()?
    };
    Ok(CachedSource::new(client, cache, config))
}

/// Print the cache location and what it holds.
pub(crate) fn print_cache_info(cache: &SqliteCache) -> Result<(), DataError> {
    let stats = cache.get_stats()?;
    println!("  Cache location: {}", cache_path().display());
    println!(
        "  Cached data: {} responses for {} symbols",
        stats.total_responses, stats.unique_symbols
    );
    if let (Some(oldest), Some(newest)) = (stats.oldest, stats.newest) {
        println!(
            "  Entries from {} to {}",
            oldest.format("%Y-%m-%d %H:%M:%S UTC"),
            newest.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    Ok(())
}
