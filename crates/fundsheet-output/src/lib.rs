#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundsheet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod export;
pub mod format;
pub mod report;
pub mod workbook;

pub use error::{ExportError, Result};
pub use export::{ExportFormat, Exporter, export_report};
pub use format::{NumberStyle, highlights_negative};
pub use report::{FundamentalsReport, ReportBuilder};
pub use workbook::{DEFAULT_CHART_METRICS, WorkbookWriter};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
