//! Metric tables: one row per metric, one column per fiscal period.

use crate::error::{MetricsError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Header of the metric-name column when a table is exported.
pub const METRIC_COLUMN: &str = "Metric";

/// One named metric across all periods of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    /// Metric name, possibly unit-suffixed
    pub name: String,
    /// Value per column; `None` is absent, never zero
    pub values: Vec<Option<f64>>,
}

impl MetricRow {
    /// Create a new metric row.
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Whether every value is absent.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// A metrics-as-rows, periods-as-columns table.
///
/// Column labels are fiscal dates formatted `YYYY-MM-DD`. An empty table
/// (no columns, no rows) stands for "no data for this period kind".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTable {
    columns: Vec<String>,
    rows: Vec<MetricRow>,
}

impl MetricTable {
    /// Create a table, checking every row has one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<MetricRow>) -> Result<Self> {
        if let Some(row) = rows.iter().find(|row| row.values.len() != columns.len()) {
            return Err(MetricsError::RowWidth {
                metric: row.name.clone(),
                expected: columns.len(),
                found: row.values.len(),
            });
        }

        Ok(Self { columns, rows })
    }

    /// An empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the table has no data.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Column labels (fiscal dates) in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[MetricRow] {
        &self.rows
    }

    /// Mutable access to the rows. Row widths must be preserved.
    pub(crate) fn rows_mut(&mut self) -> &mut [MetricRow] {
        &mut self.rows
    }

    /// Find a row by exact name.
    pub fn row(&self, name: &str) -> Option<&MetricRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// Value at (metric, column label).
    pub fn value(&self, name: &str, column: &str) -> Option<f64> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.row(name)?.values.get(idx).copied().flatten()
    }

    /// Convert to a polars `DataFrame` with a leading `Metric` column and
    /// one nullable f64 column per period.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let names: Vec<&str> = self.rows.iter().map(|row| row.name.as_str()).collect();
        let mut columns: Vec<Column> = Vec::with_capacity(self.columns.len() + 1);
        columns.push(Series::new(METRIC_COLUMN.into(), names).into());

        for (idx, label) in self.columns.iter().enumerate() {
            let values: Vec<Option<f64>> = self.rows.iter().map(|row| row.values[idx]).collect();
            columns.push(Series::new(label.as_str().into(), values).into());
        }

        Ok(DataFrame::new(columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetricTable {
        MetricTable::new(
            vec!["2023-12-31".to_string(), "2024-12-31".to_string()],
            vec![
                MetricRow::new("Revenue", vec![Some(1.0), Some(2.0)]),
                MetricRow::new("EPS", vec![None, Some(0.5)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let table = sample();
        assert_eq!(table.value("Revenue", "2024-12-31"), Some(2.0));
        assert_eq!(table.value("EPS", "2023-12-31"), None);
        assert_eq!(table.value("EPS", "1999-12-31"), None);
        assert!(table.row("Missing").is_none());
        assert!(!table.is_empty());
        assert!(MetricTable::empty().is_empty());
    }

    #[test]
    fn test_row_width_checked() {
        let result = MetricTable::new(
            vec!["2024-12-31".to_string()],
            vec![MetricRow::new("Revenue", vec![Some(1.0), Some(2.0)])],
        );
        assert!(matches!(
            result,
            Err(MetricsError::RowWidth {
                expected: 1,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_to_dataframe() {
        let df = sample().to_dataframe().unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(
            df.get_column_names(),
            vec![METRIC_COLUMN, "2023-12-31", "2024-12-31"]
        );
        let first = df.column("2023-12-31").unwrap().f64().unwrap();
        assert_eq!(first.get(0), Some(1.0));
        assert_eq!(first.get(1), None);
    }
}
