//! Metric row labels.
//!
//! These names are the row index of the quarterly and annual tables and are
//! matched by substring in the workbook renderer, so they are part of the
//! output contract.

/// Total revenue.
pub const REVENUE: &str = "Revenue";
/// Cost of goods sold.
pub const COGS: &str = "COGS";
/// Gross margin ratio.
pub const GROSS_MARGIN: &str = "Gross Margin";
/// Research and development expense.
pub const RND: &str = "R&D";
/// Selling, general and administrative expense.
pub const GNA: &str = "G&A";
/// Operating expenses.
pub const OPEX: &str = "OpEx";
/// Operating income.
pub const OPERATING_INCOME: &str = "OpInc";
/// Interest expense.
pub const INTEREST_EXPENSE: &str = "Interest Expense";
/// Income before tax.
pub const PRETAX_INCOME: &str = "Pretax Income";
/// Income tax expense.
pub const TAXES: &str = "Taxes";
/// Net income.
pub const NET_INCOME: &str = "Net Income";
/// Reported earnings per share.
pub const EPS: &str = "EPS";
/// Common shares outstanding.
pub const SHARES: &str = "Shares";
/// Cash and equivalents.
pub const CASH: &str = "Cash";
/// Accounts receivable.
pub const RECEIVABLES: &str = "AR";
/// Property, plant and equipment.
pub const PPE: &str = "PP&E";
/// Goodwill.
pub const GOODWILL: &str = "Goodwill";
/// Total current assets.
pub const CURRENT_ASSETS: &str = "Total Current Assets";
/// Total current liabilities.
pub const CURRENT_LIABILITIES: &str = "Total Current Liabilities";
/// Accounts payable.
pub const PAYABLES: &str = "AP";
/// Deferred revenue.
pub const DEFERRED_REVENUE: &str = "DR";
/// Short plus long-term debt.
pub const DEBT: &str = "Debt";
/// Shareholders' equity.
pub const EQUITY: &str = "SE";
/// Total assets.
pub const ASSETS: &str = "Assets";
/// Liabilities plus equity reconciliation.
pub const LIABILITIES_PLUS_EQUITY: &str = "L+SE";
/// Cash flow from operations.
pub const CFFO: &str = "CFFO";
/// Capital expenditures.
pub const CAPEX: &str = "CapEx";
/// Trailing-twelve-month operating cash flow.
pub const TTM_CFFO: &str = "TTM CFFO";
/// Trailing-twelve-month revenue.
pub const TTM_REVENUE: &str = "TTM Revenue";
/// Trailing-twelve-month net income.
pub const TTM_NET_INCOME: &str = "TTM Net Income";
/// Operating cash flow less capital expenditures.
pub const FREE_CASH_FLOW: &str = "Free Cash Flow";
/// Operating margin.
pub const OPERATING_MARGIN: &str = "Operating Margin";
/// Net profit margin.
pub const NET_PROFIT_MARGIN: &str = "Net Profit Margin";
/// Return on equity.
pub const ROE: &str = "ROE";
/// Return on assets.
pub const ROA: &str = "ROA";
/// Current ratio.
pub const CURRENT_RATIO: &str = "Current Ratio";
/// Quick ratio.
pub const QUICK_RATIO: &str = "Quick Ratio";
/// Debt to equity.
pub const DEBT_TO_EQUITY: &str = "Debt-to-Equity";
/// Interest coverage.
pub const INTEREST_COVERAGE: &str = "Interest Coverage";

/// Quarter-over-quarter revenue growth.
pub const QOQ_REVENUE_GROWTH: &str = "QoQ Revenue Growth";
/// Quarter-over-quarter net income growth.
pub const QOQ_NET_INCOME_GROWTH: &str = "QoQ Net Income Growth";
/// Quarter-over-quarter EPS growth.
pub const QOQ_EPS_GROWTH: &str = "QoQ EPS Growth";
/// Year-over-year revenue growth.
pub const YOY_REVENUE_GROWTH: &str = "YoY Revenue Growth";
/// Year-over-year net income growth.
pub const YOY_NET_INCOME_GROWTH: &str = "YoY Net Income Growth";
/// Year-over-year EPS growth.
pub const YOY_EPS_GROWTH: &str = "YoY EPS Growth";
/// Year-over-year free cash flow growth.
pub const YOY_FCF_GROWTH: &str = "YoY FCF Growth";

/// Row order produced for every fiscal period, before growth rows.
pub const PERIOD_ROWS: &[&str] = &[
    REVENUE,
    COGS,
    GROSS_MARGIN,
    RND,
    GNA,
    OPEX,
    OPERATING_INCOME,
    INTEREST_EXPENSE,
    PRETAX_INCOME,
    TAXES,
    NET_INCOME,
    EPS,
    SHARES,
    CASH,
    RECEIVABLES,
    PPE,
    GOODWILL,
    CURRENT_ASSETS,
    CURRENT_LIABILITIES,
    PAYABLES,
    DEFERRED_REVENUE,
    DEBT,
    EQUITY,
    ASSETS,
    LIABILITIES_PLUS_EQUITY,
    CFFO,
    CAPEX,
    TTM_CFFO,
    TTM_REVENUE,
    TTM_NET_INCOME,
    FREE_CASH_FLOW,
    OPERATING_MARGIN,
    NET_PROFIT_MARGIN,
    ROE,
    ROA,
    CURRENT_RATIO,
    QUICK_RATIO,
    DEBT_TO_EQUITY,
    INTEREST_COVERAGE,
];

/// Trailing-twelve-month rows and the metric each one sums.
pub const TTM_ROWS: &[(&str, &str)] = &[
    (TTM_CFFO, CFFO),
    (TTM_REVENUE, REVENUE),
    (TTM_NET_INCOME, NET_INCOME),
];

/// Quarterly growth rows and their source metric.
pub const QUARTERLY_GROWTH_ROWS: &[(&str, &str)] = &[
    (QOQ_REVENUE_GROWTH, REVENUE),
    (QOQ_NET_INCOME_GROWTH, NET_INCOME),
    (QOQ_EPS_GROWTH, EPS),
];

/// Annual growth rows and their source metric.
pub const ANNUAL_GROWTH_ROWS: &[(&str, &str)] = &[
    (YOY_REVENUE_GROWTH, REVENUE),
    (YOY_NET_INCOME_GROWTH, NET_INCOME),
    (YOY_EPS_GROWTH, EPS),
    (YOY_FCF_GROWTH, FREE_CASH_FLOW),
];

/// Ratio, percentage and per-share rows that keep their native unit.
pub const UNSCALED_ROWS: &[&str] = &[
    GROSS_MARGIN,
    EPS,
    OPERATING_MARGIN,
    NET_PROFIT_MARGIN,
    ROE,
    ROA,
    CURRENT_RATIO,
    QUICK_RATIO,
    DEBT_TO_EQUITY,
    INTEREST_COVERAGE,
];
