#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundsheet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod alphavantage;
pub mod cache;
pub mod error;
pub mod source;

pub use alphavantage::{AlphaVantageClient, Function};
pub use cache::{CacheConfig, CacheStats, CachedSource, SqliteCache};
pub use error::{DataError, Result};
pub use source::{Document, StatementSource};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
