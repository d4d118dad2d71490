//! Alpha Vantage API functions used by the report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An Alpha Vantage `function` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Function {
    /// Company overview and valuation ratios
    Overview,
    /// Income statement, quarterly and annual
    IncomeStatement,
    /// Balance sheet, quarterly and annual
    BalanceSheet,
    /// Cash flow statement, quarterly and annual
    CashFlow,
    /// Daily adjusted price series
    DailyAdjusted,
}

impl Function {
    /// Every function, in the order a report fetches them.
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::IncomeStatement,
        Self::BalanceSheet,
        Self::CashFlow,
        Self::DailyAdjusted,
    ];

    /// Query parameter value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "OVERVIEW",
            Self::IncomeStatement => "INCOME_STATEMENT",
            Self::BalanceSheet => "BALANCE_SHEET",
            Self::CashFlow => "CASH_FLOW",
            Self::DailyAdjusted => "TIME_SERIES_DAILY_ADJUSTED",
        }
    }

    /// Short human-readable description for progress output.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Overview => "company overview",
            Self::IncomeStatement => "income statements",
            Self::BalanceSheet => "balance sheets",
            Self::CashFlow => "cash flow statements",
            Self::DailyAdjusted => "daily prices",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Function {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|function| function.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown Alpha Vantage function: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_str() {
        for function in Function::ALL {
            assert_eq!(function.as_str().parse::<Function>(), Ok(function));
        }
        assert_eq!("cash_flow".parse::<Function>(), Ok(Function::CashFlow));
        assert!("EARNINGS".parse::<Function>().is_err());
    }
}
