//! Flat-file export of report tables.
//!
//! CSV keeps the sheet layout (metric column, one column per period) with
//! absent cells left blank. JSON uses the tables' serde representation.

use crate::error::{ExportError, Result};
use crate::report::FundamentalsReport;
use fundsheet_metrics::table::METRIC_COLUMN;
use fundsheet_metrics::{DefinitionEntry, MetricTable, SummaryTable};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" | "prettyjson" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<()> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::PrettyJson => serde_json::to_string_pretty(value)?,
        _ => serde_json::to_string(value)?,
    })
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl Exporter for MetricTable {
    fn export_to_string(&self, format: ExportFormat) -> Result<String> {
        if format != ExportFormat::Csv {
            return to_json(self, format);
        }

        let mut wtr = csv::Writer::from_writer(vec![]);
        let mut header = Vec::with_capacity(self.columns().len() + 1);
        header.push(METRIC_COLUMN);
        header.extend(self.columns().iter().map(String::as_str));
        wtr.write_record(&header)?;

        for row in self.rows() {
            let mut record = Vec::with_capacity(row.values.len() + 1);
            record.push(row.name.clone());
            record.extend(row.values.iter().copied().map(cell));
            wtr.write_record(&record)?;
        }
        finish(wtr)
    }
}

impl Exporter for SummaryTable {
    fn export_to_string(&self, format: ExportFormat) -> Result<String> {
        if format != ExportFormat::Csv {
            return to_json(self.rows(), format);
        }

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record([METRIC_COLUMN, "Value"])?;
        for row in self.rows() {
            wtr.write_record([row.metric.clone(), row.value.to_string()])?;
        }
        finish(wtr)
    }
}

impl Exporter for [DefinitionEntry] {
    fn export_to_string(&self, format: ExportFormat) -> Result<String> {
        if format != ExportFormat::Csv {
            return to_json(self, format);
        }

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record([METRIC_COLUMN, "Definition"])?;
        for entry in self {
            wtr.write_record([entry.metric, entry.definition])?;
        }
        finish(wtr)
    }
}

/// Write the summary, statement and glossary tables of a report into `dir`
/// as `<ticker>_<table>.<ext>`. Empty statement tables are skipped.
///
/// Returns the written paths.
pub fn export_report(
    report: &FundamentalsReport,
    dir: &Path,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let ext = format.extension();
    let path = |table: &str| dir.join(format!("{}_{table}.{ext}", report.symbol));

    let mut written = Vec::new();

    let summary = path("summary");
    report.summary.export_to_file(&summary, format)?;
    written.push(summary);

    for (name, table) in [("quarterly", &report.quarterly), ("annual", &report.annual)] {
        if table.is_empty() {
            continue;
        }
        let target = path(name);
        table.export_to_file(&target, format)?;
        written.push(target);
    }

    let definitions = path("definitions");
    report
        .definitions
        .as_slice()
        .export_to_file(&definitions, format)?;
    written.push(definitions);

    debug!(files = written.len(), dir = %dir.display(), "exported tables");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundsheet_metrics::{MetricRow, build_summary, definitions};
    use rstest::rstest;
    use serde_json::json;

    fn table() -> MetricTable {
        MetricTable::new(
            vec!["2023-12-31".to_string(), "2024-12-31".to_string()],
            vec![
                MetricRow::new("Revenue (B$)", vec![Some(1.5), Some(2.0)]),
                MetricRow::new("YoY Revenue Growth", vec![None, Some(0.25)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_metric_table_csv_leaves_absent_blank() {
        let csv = table().export_to_string(ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Metric,2023-12-31,2024-12-31");
        assert_eq!(lines[1], "Revenue (B$),1.5,2");
        assert_eq!(lines[2], "YoY Revenue Growth,,0.25");
    }

    #[test]
    fn test_metric_table_json() {
        let json = table().export_to_string(ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["columns"][1], "2024-12-31");
        assert_eq!(value["rows"][1]["values"][0], serde_json::Value::Null);

        let pretty = table().export_to_string(ExportFormat::PrettyJson).unwrap();
        assert!(pretty.contains("  "));
    }

    #[test]
    fn test_summary_csv() {
        let summary = build_summary(
            json!({"PERatio": "15.2"})
                .as_object()
                .unwrap(),
        );
        let csv = summary.export_to_string(ExportFormat::Csv).unwrap();

        assert!(csv.starts_with("Metric,Value\n"));
        assert!(csv.contains("PERatio,15.2\n"));
        assert!(csv.contains("BookValue,N/A\n"));
        assert!(csv.contains("EBITDA,\n"));
    }

    #[test]
    fn test_definitions_csv() {
        let csv = definitions().export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.starts_with("Metric,Definition\n"));
        assert_eq!(csv.lines().count(), definitions().len() + 1);
    }

    #[rstest]
    #[case("csv", ExportFormat::Csv, "csv")]
    #[case("JSON", ExportFormat::Json, "json")]
    #[case("pretty-json", ExportFormat::PrettyJson, "json")]
    fn test_format_parsing(
        #[case] input: &str,
        #[case] expected: ExportFormat,
        #[case] extension: &str,
    ) {
        let format: ExportFormat = input.parse().unwrap();
        assert_eq!(format, expected);
        assert_eq!(format.extension(), extension);
    }

    #[test]
    fn test_unknown_format() {
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(ExportError::InvalidFormat(_))
        ));
    }
}
