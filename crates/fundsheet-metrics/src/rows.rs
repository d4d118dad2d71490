//! Single-period line items and ratios.
//!
//! Ratio guards follow a "truthy" rule: an operand that is absent *or zero*
//! suppresses the ratio. A zero revenue therefore yields no margins at all
//! rather than a division by zero, and a zero net income yields no ROE even
//! though 0 / equity is well defined. Reports depend on this exact behavior.

use crate::align::AlignedPeriod;
use crate::coerce::coerce;
use crate::metric::*;
use chrono::NaiveDate;

/// Metric values for one fiscal period, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRow {
    /// Fiscal period end
    pub fiscal_date: Option<NaiveDate>,
    values: Vec<(&'static str, Option<f64>)>,
}

impl PeriodRow {
    /// Create an empty row for the given fiscal date.
    pub const fn new(fiscal_date: Option<NaiveDate>) -> Self {
        Self {
            fiscal_date,
            values: Vec::new(),
        }
    }

    /// Value of a metric; `None` when absent or unknown.
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| *name == metric)
            .and_then(|(_, value)| *value)
    }

    /// Set a metric, replacing an existing entry or appending a new one.
    pub fn set(&mut self, metric: &'static str, value: Option<f64>) {
        match self.values.iter_mut().find(|(name, _)| *name == metric) {
            Some(entry) => entry.1 = value,
            None => self.values.push((metric, value)),
        }
    }

    /// Metric names in row order.
    pub fn metrics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|(name, _)| *name)
    }

    /// Number of metrics in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row holds no metrics.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Present and non-zero.
fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// `numerator / denominator` when both are truthy.
fn guarded_ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    Some(truthy(numerator)? / truthy(denominator)?)
}

/// Extract line items and compute single-period metrics for one period.
///
/// Pure: the same period always yields the same row.
pub fn build_row(period: &AlignedPeriod<'_>) -> PeriodRow {
    let income = period.income;
    let balance = period.balance;
    let cash_flow = period.cash_flow;

    let revenue = coerce(income, "totalRevenue");
    let cogs = coerce(income, "costOfRevenue");
    let operating_income = coerce(income, "operatingIncome");
    let interest_expense = coerce(income, "interestExpense");
    let net_income = coerce(income, "netIncome");

    let cash = coerce(balance, "cashAndCashEquivalentsAtCarryingValue");
    let receivables = coerce(balance, "currentNetReceivables");
    let current_assets = coerce(balance, "totalCurrentAssets");
    let current_liabilities = coerce(balance, "totalCurrentLiabilities");
    let debt = coerce(balance, "shortLongTermDebtTotal");
    let equity = coerce(balance, "totalShareholderEquity");
    let assets = coerce(balance, "totalAssets");
    let liabilities = coerce(balance, "totalLiabilities");

    let cffo = coerce(cash_flow, "operatingCashflow");
    let capex = coerce(cash_flow, "capitalExpenditures");

    let gross_margin = match (truthy(revenue), truthy(cogs)) {
        (Some(revenue), Some(cogs)) => Some((revenue - cogs) / revenue),
        _ => None,
    };
    let quick_ratio = truthy(current_liabilities)
        .map(|liabilities| (cash.unwrap_or(0.0) + receivables.unwrap_or(0.0)) / liabilities);
    let interest_coverage = match (truthy(operating_income), interest_expense) {
        (Some(op_inc), Some(interest)) if interest > 0.0 => Some(op_inc / interest),
        _ => None,
    };

    let mut row = PeriodRow::new(period.fiscal_date);
    row.values.reserve(PERIOD_ROWS.len());

    // Income statement
    row.set(REVENUE, revenue);
    row.set(COGS, cogs);
    row.set(GROSS_MARGIN, gross_margin);
    row.set(RND, coerce(income, "researchAndDevelopment"));
    row.set(GNA, coerce(income, "sellingGeneralAndAdministrative"));
    row.set(OPEX, coerce(income, "operatingExpenses"));
    row.set(OPERATING_INCOME, operating_income);
    row.set(INTEREST_EXPENSE, interest_expense);
    row.set(PRETAX_INCOME, coerce(income, "incomeBeforeTax"));
    row.set(TAXES, coerce(income, "incomeTaxExpense"));
    row.set(NET_INCOME, net_income);
    row.set(EPS, coerce(income, "reportedEPS"));
    row.set(SHARES, coerce(income, "commonStockSharesOutstanding"));

    // Balance sheet
    row.set(CASH, cash);
    row.set(RECEIVABLES, receivables);
    row.set(PPE, coerce(balance, "propertyPlantEquipment"));
    row.set(GOODWILL, coerce(balance, "goodwill"));
    row.set(CURRENT_ASSETS, current_assets);
    row.set(CURRENT_LIABILITIES, current_liabilities);
    row.set(PAYABLES, coerce(balance, "currentAccountsPayable"));
    row.set(DEFERRED_REVENUE, coerce(balance, "deferredRevenue"));
    row.set(DEBT, debt);
    row.set(EQUITY, equity);
    row.set(ASSETS, assets);
    row.set(
        LIABILITIES_PLUS_EQUITY,
        Some(liabilities.unwrap_or(0.0) + equity.unwrap_or(0.0)),
    );

    // Cash flow
    row.set(CFFO, cffo);
    row.set(CAPEX, capex);

    // Filled in across periods
    row.set(TTM_CFFO, None);
    row.set(TTM_REVENUE, None);
    row.set(TTM_NET_INCOME, None);

    // Ratios
    row.set(
        FREE_CASH_FLOW,
        Some(cffo.unwrap_or(0.0) - capex.unwrap_or(0.0)),
    );
    row.set(OPERATING_MARGIN, guarded_ratio(operating_income, revenue));
    row.set(NET_PROFIT_MARGIN, guarded_ratio(net_income, revenue));
    row.set(ROE, guarded_ratio(net_income, equity));
    row.set(ROA, guarded_ratio(net_income, assets));
    row.set(
        CURRENT_RATIO,
        guarded_ratio(current_assets, current_liabilities),
    );
    row.set(QUICK_RATIO, quick_ratio);
    row.set(DEBT_TO_EQUITY, guarded_ratio(debt, equity));
    row.set(INTEREST_COVERAGE, interest_coverage);

    row
}
