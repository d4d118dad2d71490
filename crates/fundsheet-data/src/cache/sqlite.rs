//! SQLite cache for API response documents.

use crate::alphavantage::Function;
use crate::error::{DataError, Result};
use crate::source::Document;
use chrono::{DateTime, TimeDelta, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::time::Duration;

/// SQLite cache for validated response documents.
///
/// One row per (function, symbol), replaced on every store.
#[derive(Debug)]
pub struct SqliteCache {
    conn: Connection,
}

impl SqliteCache {
    /// Create a new SQLite cache.
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let cache = Self { conn };
        cache.initialize_schema()?;
        Ok(cache)
    }

    /// Create an in-memory cache (useful for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let cache = Self { conn };
        cache.initialize_schema()?;
        Ok(cache)
    }

    /// Initialize the database schema.
    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS responses (
                function TEXT NOT NULL,
                symbol TEXT NOT NULL,
                body TEXT NOT NULL,
                cached_at TEXT NOT NULL,
                PRIMARY KEY (function, symbol)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_responses_symbol ON responses(symbol)",
            [],
        )?;

        Ok(())
    }

    /// Get a cached document no older than `max_age`.
    pub fn get_response(
        &self,
        function: Function,
        symbol: &str,
        max_age: Duration,
    ) -> Result<Option<Document>> {
        let row: Option<(String, String)> = self
            .conn
            .query_row(
                "SELECT body, cached_at FROM responses WHERE function = ?1 AND symbol = ?2",
                params![function.as_str(), symbol.to_uppercase()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((body, cached_at)) = row else {
            return Ok(None);
        };

        let cached_at = parse_timestamp(&cached_at)?;
        let max_age = TimeDelta::from_std(max_age).unwrap_or(TimeDelta::MAX);
        if Utc::now() - cached_at > max_age {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&body)?))
    }

    /// Store a document, stamped with the current time.
    pub fn put_response(&self, function: Function, symbol: &str, document: &Document) -> Result<()> {
        self.put_response_at(function, symbol, document, Utc::now())
    }

    /// Store a document with an explicit timestamp.
    pub fn put_response_at(
        &self,
        function: Function,
        symbol: &str,
        document: &Document,
        cached_at: DateTime<Utc>,
    ) -> Result<()> {
        let body = serde_json::to_string(document)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO responses (function, symbol, body, cached_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                function.as_str(),
                symbol.to_uppercase(),
                body,
                cached_at.to_rfc3339()
            ],
        )?;

        Ok(())
    }

    /// Clear all cached data.
    pub fn clear_all(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM responses", [])?)
    }

    /// Clear cached data for a specific symbol.
    pub fn clear_symbol(&self, symbol: &str) -> Result<usize> {
        Ok(self.conn.execute(
            "DELETE FROM responses WHERE symbol = ?1",
            params![symbol.to_uppercase()],
        )?)
    }

    /// Get cache statistics.
    pub fn get_stats(&self) -> Result<CacheStats> {
        let (total, symbols, oldest, newest): (i64, i64, Option<String>, Option<String>) =
            self.conn.query_row(
                "SELECT COUNT(*), COUNT(DISTINCT symbol), MIN(cached_at), MAX(cached_at)
                 FROM responses",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )?;

        Ok(CacheStats {
            total_responses: total as usize,
            unique_symbols: symbols as usize,
            oldest: oldest.as_deref().map(parse_timestamp).transpose()?,
            newest: newest.as_deref().map(parse_timestamp).transpose()?,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DataError::Cache(format!("Invalid cache timestamp {value}: {e}")))
}

/// Cache statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached documents
    pub total_responses: usize,
    /// Number of distinct symbols
    pub unique_symbols: usize,
    /// Timestamp of the oldest entry
    pub oldest: Option<DateTime<Utc>>,
    /// Timestamp of the newest entry
    pub newest: Option<DateTime<Utc>>,
}
