//! Report configuration.

use fundsheet_metrics::UnitScale;
use fundsheet_output::{DEFAULT_CHART_METRICS, WorkbookWriter};
use serde::{Deserialize, Serialize};

/// Settings that shape the tables and the workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Rescaling applied to the statement tables
    pub unit_scale: UnitScale,
    /// Annual metrics to chart, by final row name
    pub chart_metrics: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            unit_scale: UnitScale::default(),
            chart_metrics: DEFAULT_CHART_METRICS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl ReportConfig {
    /// A workbook writer honouring this configuration.
    pub fn writer(&self) -> WorkbookWriter {
        WorkbookWriter::new().with_chart_metrics(self.chart_metrics.clone())
    }
}
