//! Fetch-to-report orchestration.

use crate::config::ReportConfig;
use crate::error::{Error, Result};
use fundsheet_data::{Document, Function, StatementSource};
use fundsheet_metrics::{PeriodKind, build_financials, build_price_frame, build_summary, definitions};
use fundsheet_output::{FundamentalsReport, ReportBuilder};
use tracing::info;

/// The five raw documents behind one report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Documents {
    /// Company overview
    pub overview: Document,
    /// Income statements
    pub income: Document,
    /// Balance sheets
    pub balance_sheet: Document,
    /// Cash flow statements
    pub cash_flow: Document,
    /// Daily adjusted prices
    pub prices: Document,
}

impl Documents {
    fn slot(&mut self, function: Function) -> &mut Document {
        match function {
            Function::Overview => &mut self.overview,
            Function::IncomeStatement => &mut self.income,
            Function::BalanceSheet => &mut self.balance_sheet,
            Function::CashFlow => &mut self.cash_flow,
            Function::DailyAdjusted => &mut self.prices,
        }
    }
}

/// Normalize a ticker: trimmed and upper-cased.
pub fn normalize_symbol(symbol: &str) -> Result<String> {
    let symbol = symbol.trim();
    if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
        return Err(Error::InvalidSymbol(symbol.to_string()));
    }
    Ok(symbol.to_uppercase())
}

/// Produces a [`FundamentalsReport`] from a [`StatementSource`].
#[derive(Debug)]
pub struct ReportPipeline<S> {
    source: S,
    config: ReportConfig,
}

impl<S: StatementSource> ReportPipeline<S> {
    /// Create a pipeline over `source`.
    pub const fn new(source: S, config: ReportConfig) -> Self {
        Self { source, config }
    }

    /// The pipeline configuration.
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// The underlying source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and assemble a report.
    pub async fn run(&self, symbol: &str) -> Result<FundamentalsReport> {
        let symbol = normalize_symbol(symbol)?;
        let documents = self.fetch_documents(&symbol, |_| {}).await?;
        self.assemble(&symbol, &documents)
    }

    /// Fetch the five documents one after another.
    ///
    /// `on_fetched` is called after each successful fetch. The first
    /// failure aborts the remaining fetches.
    pub async fn fetch_documents(
        &self,
        symbol: &str,
        mut on_fetched: impl FnMut(Function),
    ) -> Result<Documents> {
        let mut documents = Documents::default();
        for function in Function::ALL {
            info!(%function, symbol, "fetching {}", function.description());
            *documents.slot(function) = self.source.fetch(function, symbol).await?;
            on_fetched(function);
        }
        Ok(documents)
    }

    /// Build every table from fetched documents.
    pub fn assemble(&self, symbol: &str, documents: &Documents) -> Result<FundamentalsReport> {
        let scale = &self.config.unit_scale;
        let statements = |kind| {
            build_financials(
                &documents.income,
                &documents.balance_sheet,
                &documents.cash_flow,
                kind,
                scale,
            )
        };

        let quarterly = statements(PeriodKind::Quarterly);
        let annual = statements(PeriodKind::Annual);
        info!(
            symbol,
            quarters = quarterly.columns().len(),
            years = annual.columns().len(),
            "assembled statement tables"
        );

        Ok(ReportBuilder::new()
            .symbol(symbol)
            .summary(build_summary(&documents.overview))
            .quarterly(quarterly)
            .annual(annual)
            .prices(build_price_frame(&documents.prices)?)
            .definitions(definitions().to_vec())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("aapl", Some("AAPL"))]
    #[case("  brk.b ", Some("BRK.B"))]
    #[case("", None)]
    #[case("   ", None)]
    #[case("A B", None)]
    fn test_normalize_symbol(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize_symbol(input).ok().as_deref(), expected);
    }

    #[test]
    fn test_assemble_empty_documents() {
        struct Never;
        impl StatementSource for Never {
            async fn fetch(
                &self,
                function: Function,
                symbol: &str,
            ) -> fundsheet_data::Result<Document> {
                Err(fundsheet_data::DataError::EmptyResponse {
                    function: function.to_string(),
                    symbol: symbol.to_string(),
                })
            }
        }

        let pipeline = ReportPipeline::new(Never, ReportConfig::default());
        let report = pipeline.assemble("IBM", &Documents::default()).unwrap();

        assert!(!report.has_statements());
        assert_eq!(report.summary.len(), 12);
        assert_eq!(report.prices.height(), 0);
    }
}
