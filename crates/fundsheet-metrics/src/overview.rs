//! Valuation summary from the company overview document.

use crate::coerce::{coerce, coerce_value};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Placeholder for an overview field the document does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// Overview fields coerced to a number or absent, in display order.
pub const NUMERIC_FIELDS: &[&str] = &[
    "MarketCapitalization",
    "EBITDA",
    "PERatio",
    "PEGRatio",
    "PriceToBookRatio",
    "DividendYield",
    "PayoutRatio",
    "EVToEBITDA",
];

/// Overview fields copied as-is, in display order.
pub const PASSTHROUGH_FIELDS: &[&str] = &["BookValue", "52WeekHigh", "52WeekLow"];

/// Every summary field in display order.
pub const SUMMARY_FIELDS: &[&str] = &[
    "MarketCapitalization",
    "EBITDA",
    "PERatio",
    "PEGRatio",
    "PriceToBookRatio",
    "DividendYield",
    "PayoutRatio",
    "EVToEBITDA",
    "BookValue",
    "52WeekHigh",
    "52WeekLow",
    "AnalystTargetPrice",
];

/// A summary cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryValue {
    /// A numeric value
    Number(f64),
    /// Numerically absent
    Missing,
    /// Text copied from the document, or the `N/A` placeholder
    Text(String),
}

impl SummaryValue {
    /// The numeric value, if any.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<Option<f64>> for SummaryValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Number)
    }
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Missing => Ok(()),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One summary metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Overview field name
    pub metric: String,
    /// Cell value
    pub value: SummaryValue,
}

/// The valuation summary, one row per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Rows in display order.
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// Look up a field.
    pub fn get(&self, metric: &str) -> Option<&SummaryValue> {
        self.rows
            .iter()
            .find(|row| row.metric == metric)
            .map(|row| &row.value)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn passthrough(overview: &Map<String, Value>, key: &str) -> SummaryValue {
    match overview.get(key) {
        None => SummaryValue::Text(NOT_AVAILABLE.to_string()),
        Some(Value::String(s)) => SummaryValue::Text(s.clone()),
        Some(Value::Null) => SummaryValue::Missing,
        Some(other) => coerce_value(other).into(),
    }
}

/// Build the valuation summary.
///
/// Numeric fields become a number or `Missing`; pass-through fields keep
/// the document's text and fall back to `N/A` when the key is absent.
pub fn build_summary(overview: &Map<String, Value>) -> SummaryTable {
    let rows = SUMMARY_FIELDS
        .iter()
        .map(|&metric| {
            let value = if PASSTHROUGH_FIELDS.contains(&metric) {
                passthrough(overview, metric)
            } else {
                coerce(overview, metric).into()
            };
            SummaryRow {
                metric: metric.to_string(),
                value,
            }
        })
        .collect();

    SummaryTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn overview(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_summary_from_sparse_overview() {
        let summary = build_summary(&overview(json!({
            "MarketCapitalization": "123000000",
            "PERatio": "15.2"
        })));

        assert_eq!(summary.len(), SUMMARY_FIELDS.len());
        assert_eq!(
            summary.get("MarketCapitalization"),
            Some(&SummaryValue::Number(123000000.0))
        );
        assert_eq!(summary.get("PERatio"), Some(&SummaryValue::Number(15.2)));
        assert_eq!(
            summary.get("BookValue"),
            Some(&SummaryValue::Text("N/A".to_string()))
        );
        assert_eq!(summary.get("EBITDA"), Some(&SummaryValue::Missing));
        assert_eq!(summary.get("AnalystTargetPrice"), Some(&SummaryValue::Missing));
    }

    #[test]
    fn test_field_order() {
        let summary = build_summary(&Map::new());
        let names: Vec<_> = summary.rows().iter().map(|row| row.metric.as_str()).collect();
        assert_eq!(names, SUMMARY_FIELDS);
        assert!(NUMERIC_FIELDS.iter().all(|f| SUMMARY_FIELDS.contains(f)));
    }

    #[test]
    fn test_passthrough_values() {
        let summary = build_summary(&overview(json!({
            "BookValue": "21.5",
            "52WeekHigh": 199.6,
            "52WeekLow": null,
            "DividendYield": "None"
        })));

        assert_eq!(
            summary.get("BookValue"),
            Some(&SummaryValue::Text("21.5".to_string()))
        );
        assert_eq!(summary.get("52WeekHigh"), Some(&SummaryValue::Number(199.6)));
        assert_eq!(summary.get("52WeekLow"), Some(&SummaryValue::Missing));
        assert_eq!(summary.get("DividendYield"), Some(&SummaryValue::Missing));
    }

    #[test]
    fn test_display() {
        assert_eq!(SummaryValue::Number(1.5).to_string(), "1.5");
        assert_eq!(SummaryValue::Missing.to_string(), "");
        assert_eq!(SummaryValue::Text("N/A".into()).to_string(), "N/A");
    }
}
