//! Reporting period kinds and access to period reports.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One fiscal period of one statement: line-item name to raw scalar.
pub type PeriodReport = Map<String, Value>;

/// Period kind of a statement series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKind {
    /// Quarterly reports (10-Q)
    Quarterly,
    /// Annual reports (10-K)
    Annual,
}

impl PeriodKind {
    /// Key under which the statement document lists reports of this kind.
    pub const fn report_key(&self) -> &'static str {
        match self {
            Self::Quarterly => "quarterlyReports",
            Self::Annual => "annualReports",
        }
    }

    /// Prefix used for period-over-period growth rows.
    pub const fn growth_prefix(&self) -> &'static str {
        match self {
            Self::Quarterly => "QoQ",
            Self::Annual => "YoY",
        }
    }

    /// Lower-case name, as used in file names and log messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reports of the given kind in a statement document, in document order.
///
/// A missing report list yields an empty vector. Entries that are not JSON
/// objects are skipped.
pub fn period_reports(document: &Map<String, Value>, kind: PeriodKind) -> Vec<&PeriodReport> {
    document
        .get(kind.report_key())
        .and_then(Value::as_array)
        .map(|reports| reports.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_keys() {
        assert_eq!(PeriodKind::Quarterly.report_key(), "quarterlyReports");
        assert_eq!(PeriodKind::Annual.report_key(), "annualReports");
        assert_eq!(PeriodKind::Quarterly.growth_prefix(), "QoQ");
        assert_eq!(PeriodKind::Annual.growth_prefix(), "YoY");
    }

    #[test]
    fn test_period_reports() {
        let doc = json!({
            "symbol": "IBM",
            "annualReports": [
                {"fiscalDateEnding": "2023-12-31"},
                "garbage",
                {"fiscalDateEnding": "2022-12-31"}
            ]
        });
        let doc = doc.as_object().unwrap();

        let annual = period_reports(doc, PeriodKind::Annual);
        assert_eq!(annual.len(), 2);
        assert_eq!(annual[0]["fiscalDateEnding"], json!("2023-12-31"));

        assert!(period_reports(doc, PeriodKind::Quarterly).is_empty());
    }
}
