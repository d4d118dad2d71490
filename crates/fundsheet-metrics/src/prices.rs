//! Daily price history as a typed frame.

use crate::coerce::coerce;
use crate::error::Result;
use chrono::NaiveDate;
use polars::prelude::*;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Key of the daily series in the price document.
pub const DAILY_SERIES_KEY: &str = "Time Series (Daily)";

/// Name of the date column.
pub const DATE_COLUMN: &str = "Date";

/// Upstream field names and their display names, in column order.
pub const PRICE_FIELDS: &[(&str, &str)] = &[
    ("1. open", "Open"),
    ("2. high", "High"),
    ("3. low", "Low"),
    ("4. close", "Close"),
    ("5. adjusted close", "Adj Close"),
    ("6. volume", "Volume"),
];

/// Build the price frame from a full price document.
pub fn build_price_frame(document: &Map<String, Value>) -> Result<DataFrame> {
    match document.get(DAILY_SERIES_KEY).and_then(Value::as_object) {
        Some(series) => price_frame(series),
        None => {
            warn!("no price data found");
            Ok(DataFrame::empty())
        }
    }
}

/// Build the price frame from a date-keyed daily series.
///
/// Rows are sorted by date ascending. Known fields are renamed and come
/// first; any other field keeps its name and follows in name order. Keys
/// that are not `YYYY-MM-DD` dates are skipped.
pub fn price_frame(series: &Map<String, Value>) -> Result<DataFrame> {
    let mut days: BTreeMap<NaiveDate, &Map<String, Value>> = BTreeMap::new();
    for (key, entry) in series {
        let Ok(date) = NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d") else {
            warn!(key = %key, "skipping price entry with unparsable date");
            continue;
        };
        if let Some(fields) = entry.as_object() {
            days.insert(date, fields);
        }
    }

    if days.is_empty() {
        warn!("no price data found");
        return Ok(DataFrame::empty());
    }

    let present: BTreeSet<&str> = days
        .values()
        .flat_map(|fields| fields.keys().map(String::as_str))
        .collect();

    let mut fields: Vec<(&str, &str)> = PRICE_FIELDS
        .iter()
        .copied()
        .filter(|(source, _)| present.contains(source))
        .collect();
    fields.extend(
        present
            .iter()
            .filter(|name| !PRICE_FIELDS.iter().any(|(source, _)| source == *name))
            .map(|name| (*name, *name)),
    );

    let epoch = NaiveDate::default();
    let day_numbers: Vec<i32> = days
        .keys()
        .map(|date| (*date - epoch).num_days() as i32)
        .collect();

    let mut columns: Vec<Column> = Vec::with_capacity(fields.len() + 1);
    columns.push(
        Series::new(DATE_COLUMN.into(), day_numbers)
            .cast(&DataType::Date)?
            .into(),
    );
    for (source, name) in fields {
        let values: Vec<Option<f64>> = days.values().map(|fields| coerce(fields, source)).collect();
        columns.push(Series::new(name.into(), values).into());
    }

    let df = DataFrame::new(columns)?;
    debug!(rows = df.height(), "built price frame");
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(close: &str) -> Value {
        json!({
            "1. open": "10.0",
            "2. high": "12.5",
            "3. low": "9.5",
            "4. close": close,
            "5. adjusted close": close,
            "6. volume": "1500",
            "7. dividend amount": "0.0000",
            "8. split coefficient": "1.0"
        })
    }

    fn document() -> Map<String, Value> {
        json!({
            "Meta Data": {"2. Symbol": "IBM"},
            "Time Series (Daily)": {
                "2024-01-03": day("11.0"),
                "2024-01-02": day("10.5"),
                "not-a-date": day("0"),
                "2024-01-04": day("oops")
            }
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_price_frame_sorted_and_renamed() {
        let df = build_price_frame(&document()).unwrap();

        assert_eq!(df.height(), 3);
        assert_eq!(
            df.get_column_names(),
            vec![
                "Date",
                "Open",
                "High",
                "Low",
                "Close",
                "Adj Close",
                "Volume",
                "7. dividend amount",
                "8. split coefficient"
            ]
        );
        assert_eq!(df.column(DATE_COLUMN).unwrap().dtype(), &DataType::Date);

        let dates = df
            .column(DATE_COLUMN)
            .unwrap()
            .cast(&DataType::String)
            .unwrap();
        let dates = dates.str().unwrap();
        assert_eq!(dates.get(0), Some("2024-01-02"));
        assert_eq!(dates.get(2), Some("2024-01-04"));

        let close = df.column("Close").unwrap().f64().unwrap();
        assert_eq!(close.get(0), Some(10.5));
        assert_eq!(close.get(1), Some(11.0));
        assert_eq!(close.get(2), None);
    }

    #[test]
    fn test_missing_series_is_empty() {
        let df = build_price_frame(&Map::new()).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 0);

        let df = price_frame(&Map::new()).unwrap();
        assert_eq!(df.width(), 0);
    }
}
