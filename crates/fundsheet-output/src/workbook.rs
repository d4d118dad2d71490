//! XLSX rendering of a fundamentals report.
//!
//! Sheet order is Summary, Quarterly Data, Annual Data, Stock Price,
//! Definitions and, when annual data exists, Charts.

use crate::error::{ExportError, Result};
use crate::format::{
    NEGATIVE_FILL_RGB, NumberStyle, PRICE_FORMAT, VOLUME_FORMAT, highlights_negative,
};
use crate::report::FundamentalsReport;
use fundsheet_metrics::prices::{DATE_COLUMN, PRICE_FIELDS};
use fundsheet_metrics::table::METRIC_COLUMN;
use fundsheet_metrics::{DefinitionEntry, MetricTable, SummaryTable, SummaryValue};
use polars::prelude::*;
use rust_xlsxwriter::{
    Chart, ChartType, ColNum, Color, ConditionalFormatCell, ConditionalFormatCellRule, Format,
    RowNum, Workbook, Worksheet,
};
use std::path::Path;
use tracing::{info, warn};

/// Valuation summary sheet.
pub const SUMMARY_SHEET: &str = "Summary";
/// Quarterly statements sheet.
pub const QUARTERLY_SHEET: &str = "Quarterly Data";
/// Annual statements sheet, also the chart data source.
pub const ANNUAL_SHEET: &str = "Annual Data";
/// Daily price sheet.
pub const PRICE_SHEET: &str = "Stock Price";
/// Glossary sheet.
pub const DEFINITIONS_SHEET: &str = "Definitions";
/// Chart sheet.
pub const CHARTS_SHEET: &str = "Charts";

/// Annual metrics charted by default.
pub const DEFAULT_CHART_METRICS: &[&str] = &[
    "Revenue (B$)",
    "Net Income (B$)",
    "EPS",
    "Free Cash Flow (B$)",
    "Net Profit Margin",
    "ROE",
    "Debt-to-Equity",
];

/// Rows between the top edges of consecutive charts.
pub const DEFAULT_CHART_SPACING: RowNum = 15;

/// Padding added to the longest cell of an auto-fitted column.
const WIDTH_PADDING: usize = 3;

/// Renders a [`FundamentalsReport`] to an XLSX workbook.
#[derive(Debug, Clone)]
pub struct WorkbookWriter {
    chart_metrics: Vec<String>,
    chart_spacing: RowNum,
}

impl Default for WorkbookWriter {
    fn default() -> Self {
        Self {
            chart_metrics: DEFAULT_CHART_METRICS.iter().map(|m| m.to_string()).collect(),
            chart_spacing: DEFAULT_CHART_SPACING,
        }
    }
}

impl WorkbookWriter {
    /// Create a writer with the default chart list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chart these annual metrics instead of the defaults.
    pub fn with_chart_metrics(mut self, metrics: Vec<String>) -> Self {
        self.chart_metrics = metrics;
        self
    }

    /// Annual metrics that will be charted.
    pub fn chart_metrics(&self) -> &[String] {
        &self.chart_metrics
    }

    /// Write the workbook to `path`.
    pub fn save(&self, report: &FundamentalsReport, path: &Path) -> Result<()> {
        let mut workbook = self.build(report)?;
        workbook.save(path)?;
        info!(path = %path.display(), "exported workbook");
        Ok(())
    }

    /// Render the workbook into memory.
    pub fn to_buffer(&self, report: &FundamentalsReport) -> Result<Vec<u8>> {
        let mut workbook = self.build(report)?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Assemble every sheet.
    pub fn build(&self, report: &FundamentalsReport) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        workbook.push_worksheet(summary_sheet(&report.summary)?);
        workbook.push_worksheet(metric_sheet(QUARTERLY_SHEET, &report.quarterly)?);
        workbook.push_worksheet(metric_sheet(ANNUAL_SHEET, &report.annual)?);
        workbook.push_worksheet(price_sheet(&report.prices)?);
        workbook.push_worksheet(definitions_sheet(&report.definitions)?);

        if report.annual.is_empty() {
            warn!("skipping chart generation: no annual data to plot");
        } else {
            workbook.push_worksheet(self.charts_sheet(&report.annual)?);
        }

        Ok(workbook)
    }

    fn charts_sheet(&self, annual: &MetricTable) -> Result<Worksheet> {
        let mut sheet = named_sheet(CHARTS_SHEET)?;
        let last_col = col(annual.columns().len())?;
        let mut anchor: RowNum = 0;

        for metric in &self.chart_metrics {
            let Some(idx) = annual.rows().iter().position(|r| &r.name == metric) else {
                warn!(metric = %metric, "could not find metric for charting");
                continue;
            };
            let data_row = row(idx + 1)?;

            let mut chart = Chart::new(ChartType::Line);
            chart
                .add_series()
                .set_categories((ANNUAL_SHEET, 0, 1, 0, last_col))
                .set_values((ANNUAL_SHEET, data_row, 1, data_row, last_col));
            chart.title().set_name(metric);
            chart.legend().set_hidden();
            chart.x_axis().set_name("Fiscal Year End");
            chart.y_axis().set_name("Value");

            sheet.insert_chart(anchor, 0, &chart)?;
            anchor += self.chart_spacing;
        }

        Ok(sheet)
    }
}

/// Longest cell text per column, for auto-fit.
#[derive(Debug, Default)]
struct ColumnWidths(Vec<usize>);

impl ColumnWidths {
    fn observe(&mut self, col: usize, len: usize) {
        if self.0.len() <= col {
            self.0.resize(col + 1, 0);
        }
        self.0[col] = self.0[col].max(len);
    }

    fn apply(&self, sheet: &mut Worksheet) -> Result<()> {
        for (idx, len) in self.0.iter().enumerate() {
            sheet.set_column_width(col(idx)?, (len + WIDTH_PADDING) as f64)?;
        }
        Ok(())
    }
}

fn col(idx: usize) -> Result<ColNum> {
    ColNum::try_from(idx).map_err(|_| ExportError::Layout(format!("column {idx} out of range")))
}

fn row(idx: usize) -> Result<RowNum> {
    RowNum::try_from(idx).map_err(|_| ExportError::Layout(format!("row {idx} out of range")))
}

fn named_sheet(name: &str) -> Result<Worksheet> {
    let mut sheet = Worksheet::new();
    sheet.set_name(name)?;
    Ok(sheet)
}

fn header_format() -> Format {
    Format::new().set_bold()
}

fn style_format(metric: &str) -> Option<Format> {
    NumberStyle::for_metric(metric).map(|style| Format::new().set_num_format(style.num_format()))
}

fn write_number(
    sheet: &mut Worksheet,
    r: RowNum,
    c: ColNum,
    value: f64,
    format: Option<&Format>,
) -> Result<()> {
    match format {
        Some(format) => sheet.write_number_with_format(r, c, value, format)?,
        None => sheet.write_number(r, c, value)?,
    };
    Ok(())
}

/// Metrics as rows, fiscal dates as columns.
fn metric_sheet(name: &str, table: &MetricTable) -> Result<Worksheet> {
    let mut sheet = named_sheet(name)?;
    if table.is_empty() {
        return Ok(sheet);
    }

    let header = header_format();
    let mut widths = ColumnWidths::default();

    sheet.write_string_with_format(0, 0, METRIC_COLUMN, &header)?;
    widths.observe(0, METRIC_COLUMN.len());
    for (idx, label) in table.columns().iter().enumerate() {
        sheet.write_string_with_format(0, col(idx + 1)?, label, &header)?;
        widths.observe(idx + 1, label.len());
    }

    let last_col = col(table.columns().len())?;
    let negative_fill = Format::new().set_background_color(Color::RGB(NEGATIVE_FILL_RGB));

    for (idx, metric) in table.rows().iter().enumerate() {
        let r = row(idx + 1)?;
        sheet.write_string(r, 0, &metric.name)?;
        widths.observe(0, metric.name.len());

        let format = style_format(&metric.name);
        for (c, value) in metric.values.iter().enumerate() {
            let Some(value) = value.filter(|v| v.is_finite()) else {
                continue;
            };
            write_number(&mut sheet, r, col(c + 1)?, value, format.as_ref())?;
            widths.observe(c + 1, value.to_string().len());
        }

        if highlights_negative(&metric.name) {
            let rule = ConditionalFormatCell::new()
                .set_rule(ConditionalFormatCellRule::LessThan(0))
                .set_format(&negative_fill);
            sheet.add_conditional_format(r, 1, r, last_col, &rule)?;
        }
    }

    sheet.set_freeze_panes(1, 1)?;
    widths.apply(&mut sheet)?;
    Ok(sheet)
}

fn summary_sheet(summary: &SummaryTable) -> Result<Worksheet> {
    let mut sheet = named_sheet(SUMMARY_SHEET)?;
    let header = header_format();

    sheet.write_string_with_format(0, 0, METRIC_COLUMN, &header)?;
    sheet.write_string_with_format(0, 1, "Value", &header)?;

    for (idx, entry) in summary.rows().iter().enumerate() {
        let r = row(idx + 1)?;
        sheet.write_string(r, 0, &entry.metric)?;
        match &entry.value {
            SummaryValue::Number(value) if value.is_finite() => {
                let format = style_format(&entry.metric);
                write_number(&mut sheet, r, 1, *value, format.as_ref())?;
            }
            SummaryValue::Text(text) => {
                sheet.write_string(r, 1, text)?;
            }
            SummaryValue::Number(_) | SummaryValue::Missing => {}
        }
    }

    sheet.set_freeze_panes(1, 1)?;
    sheet.set_column_width(0, 25)?;
    sheet.set_column_width(1, 20)?;
    Ok(sheet)
}

fn price_sheet(prices: &DataFrame) -> Result<Worksheet> {
    let mut sheet = named_sheet(PRICE_SHEET)?;
    if prices.height() == 0 || prices.width() == 0 {
        return Ok(sheet);
    }

    let header = header_format();
    let price_format = Format::new().set_num_format(PRICE_FORMAT);
    let volume_format = Format::new().set_num_format(VOLUME_FORMAT);

    for (idx, column) in prices.get_columns().iter().enumerate() {
        let c = col(idx)?;
        let name = column.name().as_str();
        sheet.write_string_with_format(0, c, name, &header)?;

        if column.dtype() == &DataType::Date {
            let dates = column.cast(&DataType::String)?;
            for (r, date) in dates.str()?.into_iter().enumerate() {
                if let Some(date) = date {
                    sheet.write_string(row(r + 1)?, c, date)?;
                }
            }
            sheet.set_column_width(c, 20)?;
            continue;
        }

        let (format, width) = if name == "Volume" {
            (Some(&volume_format), Some(18))
        } else if PRICE_FIELDS.iter().any(|(_, display)| *display == name) {
            (Some(&price_format), Some(15))
        } else {
            (None, None)
        };

        let values = column.cast(&DataType::Float64)?;
        for (r, value) in values.f64()?.into_iter().enumerate() {
            if let Some(value) = value.filter(|v| v.is_finite()) {
                write_number(&mut sheet, row(r + 1)?, c, value, format)?;
            }
        }
        if let Some(width) = width {
            sheet.set_column_width(c, width)?;
        }
    }

    if prices.column(DATE_COLUMN).is_ok() {
        sheet.set_freeze_panes(1, 1)?;
    }
    Ok(sheet)
}

fn definitions_sheet(definitions: &[DefinitionEntry]) -> Result<Worksheet> {
    let mut sheet = named_sheet(DEFINITIONS_SHEET)?;
    let header = header_format();

    sheet.write_string_with_format(0, 0, METRIC_COLUMN, &header)?;
    sheet.write_string_with_format(0, 1, "Definition", &header)?;
    for (idx, entry) in definitions.iter().enumerate() {
        let r = row(idx + 1)?;
        sheet.write_string(r, 0, entry.metric)?;
        sheet.write_string(r, 1, entry.definition)?;
    }

    sheet.set_column_width(0, 25)?;
    sheet.set_column_width(1, 60)?;
    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_track_maximum() {
        let mut widths = ColumnWidths::default();
        widths.observe(2, 5);
        widths.observe(0, 7);
        widths.observe(2, 3);
        assert_eq!(widths.0, vec![7, 0, 5]);
    }

    #[test]
    fn test_default_chart_metrics() {
        let writer = WorkbookWriter::new();
        assert_eq!(writer.chart_metrics().len(), 7);
        assert_eq!(writer.chart_metrics()[0], "Revenue (B$)");

        let writer = writer.with_chart_metrics(vec!["EPS".to_string()]);
        assert_eq!(writer.chart_metrics(), ["EPS"]);
    }

    #[test]
    fn test_empty_metric_sheet_has_no_content() {
        let sheet = metric_sheet(QUARTERLY_SHEET, &MetricTable::empty()).unwrap();
        assert_eq!(sheet.name(), QUARTERLY_SHEET);
    }
}
