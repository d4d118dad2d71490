//! Metric definitions shown alongside the report.

use serde::Serialize;

/// Grouping of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DefinitionCategory {
    /// Line items read straight from a statement
    Base,
    /// Ratios and values derived from line items
    Calculated,
    /// Period-over-period growth rates
    Growth,
    /// Valuation metrics from the company overview
    Summary,
}

/// A metric name and its plain-language definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DefinitionEntry {
    /// Metric name as it appears in the tables
    pub metric: &'static str,
    /// Definition group
    #[serde(skip)]
    pub category: DefinitionCategory,
    /// Definition text
    pub definition: &'static str,
}

const fn entry(
    metric: &'static str,
    category: DefinitionCategory,
    definition: &'static str,
) -> DefinitionEntry {
    DefinitionEntry {
        metric,
        category,
        definition,
    }
}

use DefinitionCategory::{Base, Calculated, Growth, Summary};

const DEFINITIONS: &[DefinitionEntry] = &[
    entry("Revenue", Base, "Total sales before any costs are deducted."),
    entry(
        "COGS",
        Base,
        "Cost of goods sold, the direct costs of producing goods or services.",
    ),
    entry("Gross Margin", Base, "Profit after COGS, as a percentage of revenue."),
    entry("R&D", Base, "Research and development expenses."),
    entry("G&A", Base, "Selling, general and administrative overhead costs."),
    entry("OpEx", Base, "Operating expenses (R&D plus G&A)."),
    entry("OpInc", Base, "Operating income (gross profit less OpEx)."),
    entry("Interest Expense", Base, "Interest paid on outstanding debt."),
    entry("Pretax Income", Base, "Income before income taxes."),
    entry("Taxes", Base, "Income tax expense."),
    entry("Net Income", Base, "Final profit after taxes."),
    entry("EPS", Base, "Earnings per share (net income / shares)."),
    entry("Shares", Base, "Common shares outstanding."),
    entry("Cash", Base, "Cash and cash equivalents."),
    entry("AR", Base, "Accounts receivable, the balances owed by customers."),
    entry("PP&E", Base, "Property, plant and equipment."),
    entry("Goodwill", Base, "Premium paid on acquisitions."),
    entry("Total Current Assets", Base, "Assets expected to turn into cash within a year."),
    entry(
        "Total Current Liabilities",
        Base,
        "Obligations due within a year.",
    ),
    entry("AP", Base, "Accounts payable."),
    entry("DR", Base, "Deferred revenue."),
    entry("Debt", Base, "Short plus long-term debt."),
    entry("SE", Base, "Shareholders' equity."),
    entry("Assets", Base, "Total company assets."),
    entry("L+SE", Base, "Total liabilities plus shareholders' equity."),
    entry("CFFO", Base, "Cash flow from operations."),
    entry(
        "CapEx",
        Base,
        "Capital expenditures (investments in assets like PP&E).",
    ),
    entry(
        "TTM CFFO",
        Calculated,
        "Operating cash flow summed over the trailing four quarters.",
    ),
    entry(
        "TTM Revenue",
        Calculated,
        "Revenue summed over the trailing four quarters.",
    ),
    entry(
        "TTM Net Income",
        Calculated,
        "Net income summed over the trailing four quarters.",
    ),
    entry(
        "Free Cash Flow",
        Calculated,
        "CFFO - CapEx. Cash available after funding operations and capital projects.",
    ),
    entry(
        "Operating Margin",
        Calculated,
        "Operating Income / Revenue. Core business profitability.",
    ),
    entry(
        "Net Profit Margin",
        Calculated,
        "Net Income / Revenue. Overall profitability after all expenses.",
    ),
    entry(
        "ROE",
        Calculated,
        "Return on Equity (Net Income / Shareholders' Equity). Profit generated with shareholder money.",
    ),
    entry(
        "ROA",
        Calculated,
        "Return on Assets (Net Income / Total Assets). Profit generated from all assets.",
    ),
    entry(
        "Current Ratio",
        Calculated,
        "Total Current Assets / Total Current Liabilities. Short-term liquidity.",
    ),
    entry(
        "Quick Ratio",
        Calculated,
        "(Cash + Accts. Receivable) / Total Current Liabilities. Stricter liquidity test.",
    ),
    entry(
        "Debt-to-Equity",
        Calculated,
        "Total Debt / Shareholders' Equity. Financial leverage and risk.",
    ),
    entry(
        "Interest Coverage",
        Calculated,
        "Operating Income / Interest Expense. Ability to pay interest on debt.",
    ),
    entry("YoY Growth", Growth, "Year-over-year growth percentage."),
    entry("QoQ Growth", Growth, "Quarter-over-quarter growth percentage."),
    entry(
        "MarketCapitalization",
        Summary,
        "Total market value of the company's outstanding shares.",
    ),
    entry(
        "EBITDA",
        Summary,
        "Earnings before interest, taxes, depreciation and amortization.",
    ),
    entry(
        "PERatio",
        Summary,
        "Price-to-earnings ratio. Market price per share / EPS.",
    ),
    entry(
        "PEGRatio",
        Summary,
        "P/E ratio / EPS growth rate. Valuation adjusted for growth.",
    ),
    entry(
        "PriceToBookRatio",
        Summary,
        "Market cap / book value (shareholders' equity).",
    ),
    entry(
        "DividendYield",
        Summary,
        "Annual dividend per share / price per share.",
    ),
    entry(
        "PayoutRatio",
        Summary,
        "Percentage of earnings paid out as dividends.",
    ),
    entry(
        "EVToEBITDA",
        Summary,
        "Enterprise value / EBITDA. A common valuation metric.",
    ),
];

/// Every definition in display order.
pub const fn definitions() -> &'static [DefinitionEntry] {
    DEFINITIONS
}

/// Definitions of one group.
pub fn definitions_in(category: DefinitionCategory) -> impl Iterator<Item = &'static DefinitionEntry> {
    DEFINITIONS.iter().filter(move |d| d.category == category)
}

/// Look up a definition by metric name.
///
/// Unit suffixes such as ` (B$)` are ignored, and growth rows fall back to
/// the generic `QoQ Growth` / `YoY Growth` entries.
pub fn definition(metric: &str) -> Option<&'static str> {
    let base = metric
        .rsplit_once(" (")
        .filter(|(_, unit)| unit.ends_with(')'))
        .map_or(metric, |(base, _)| base);

    let find = |name: &str| DEFINITIONS.iter().find(|d| d.metric == name);

    find(base)
        .or_else(|| {
            let prefix = base.split_whitespace().next()?;
            if base.ends_with("Growth") {
                find(&format!("{prefix} Growth"))
            } else {
                None
            }
        })
        .map(|d| d.definition)
}
