#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundsheet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod align;
pub mod catalog;
pub mod coerce;
pub mod error;
pub mod financials;
pub mod metric;
pub mod overview;
pub mod period;
pub mod prices;
pub mod rows;
pub mod series;
pub mod table;
pub mod units;

pub use align::{AlignedPeriod, align};
pub use catalog::{DefinitionCategory, DefinitionEntry, definition, definitions, definitions_in};
pub use coerce::{coerce, coerce_value};
pub use error::{MetricsError, Result};
pub use financials::build_financials;
pub use overview::{SummaryRow, SummaryTable, SummaryValue, build_summary};
pub use period::{PeriodKind, PeriodReport, period_reports};
pub use prices::{build_price_frame, price_frame};
pub use rows::{PeriodRow, build_row};
pub use series::{pct_change, process, rolling_sum};
pub use table::{MetricRow, MetricTable};
pub use units::UnitScale;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
