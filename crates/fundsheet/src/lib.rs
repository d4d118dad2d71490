#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundsheet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod pipeline;

// Re-export main types from sub-crates
pub use fundsheet_data as data;
pub use fundsheet_metrics as metrics;
pub use fundsheet_output as output;

pub use config::ReportConfig;
pub use error::{Error, Result};
pub use fundsheet_output::{FundamentalsReport, WorkbookWriter};
pub use pipeline::{Documents, ReportPipeline, normalize_symbol};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
