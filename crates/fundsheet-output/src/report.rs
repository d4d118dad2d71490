//! The bundle of tables rendered for one ticker.

use chrono::{DateTime, Utc};
use fundsheet_metrics::{DefinitionEntry, MetricTable, SummaryTable, definitions};
use polars::prelude::DataFrame;

/// Every table of a fundamentals report.
#[derive(Debug, Clone)]
pub struct FundamentalsReport {
    /// Upper-cased ticker symbol.
    pub symbol: String,

    /// Report generation timestamp.
    pub generated_at: DateTime<Utc>,

    /// Valuation summary from the company overview.
    pub summary: SummaryTable,

    /// Quarterly statements, newest first.
    pub quarterly: MetricTable,

    /// Annual statements, oldest first.
    pub annual: MetricTable,

    /// Daily prices, oldest first.
    pub prices: DataFrame,

    /// Metric glossary.
    pub definitions: Vec<DefinitionEntry>,
}

impl FundamentalsReport {
    /// Whether either statement table has data.
    pub fn has_statements(&self) -> bool {
        !self.quarterly.is_empty() || !self.annual.is_empty()
    }

    /// Default workbook file name, `<TICKER>_financials.xlsx`.
    pub fn default_file_name(&self) -> String {
        format!("{}_financials.xlsx", self.symbol.to_uppercase())
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    symbol: Option<String>,
    summary: Option<SummaryTable>,
    quarterly: Option<MetricTable>,
    annual: Option<MetricTable>,
    prices: Option<DataFrame>,
    definitions: Option<Vec<DefinitionEntry>>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the valuation summary.
    pub fn summary(mut self, summary: SummaryTable) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Set the quarterly table.
    pub fn quarterly(mut self, table: MetricTable) -> Self {
        self.quarterly = Some(table);
        self
    }

    /// Set the annual table.
    pub fn annual(mut self, table: MetricTable) -> Self {
        self.annual = Some(table);
        self
    }

    /// Set the price frame.
    pub fn prices(mut self, prices: DataFrame) -> Self {
        self.prices = Some(prices);
        self
    }

    /// Override the glossary.
    pub fn definitions(mut self, definitions: Vec<DefinitionEntry>) -> Self {
        self.definitions = Some(definitions);
        self
    }

    /// Build the report. Unset tables are empty; the glossary defaults to
    /// the full metric catalog.
    pub fn build(self) -> FundamentalsReport {
        FundamentalsReport {
            symbol: self.symbol.unwrap_or_default().to_uppercase(),
            generated_at: Utc::now(),
            summary: self.summary.unwrap_or_default(),
            quarterly: self.quarterly.unwrap_or_default(),
            annual: self.annual.unwrap_or_default(),
            prices: self.prices.unwrap_or_else(DataFrame::empty),
            definitions: self
                .definitions
                .unwrap_or_else(|| definitions().to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundsheet_metrics::MetricRow;

    #[test]
    fn test_report_builder_defaults() {
        let report = ReportBuilder::new().symbol("msft").build();

        assert_eq!(report.symbol, "MSFT");
        assert_eq!(report.default_file_name(), "MSFT_financials.xlsx");
        assert!(!report.has_statements());
        assert!(report.summary.is_empty());
        assert_eq!(report.prices.height(), 0);
        assert_eq!(report.definitions.len(), definitions().len());
    }

    #[test]
    fn test_has_statements() {
        let annual = MetricTable::new(
            vec!["2024-12-31".to_string()],
            vec![MetricRow::new("Revenue (B$)", vec![Some(1.0)])],
        )
        .unwrap();

        let report = ReportBuilder::new().symbol("IBM").annual(annual).build();
        assert!(report.has_statements());
    }
}
