//! Cross-period metrics and reshaping.
//!
//! Rolling sums and growth rates are computed on periods sorted oldest
//! first. Quarterly tables are then presented newest first, annual tables
//! oldest first.

use crate::metric::{ANNUAL_GROWTH_ROWS, QUARTERLY_GROWTH_ROWS, TTM_ROWS};
use crate::period::PeriodKind;
use crate::rows::PeriodRow;
use crate::table::{MetricRow, MetricTable};
use std::cmp::Ordering;

/// Number of quarters in a trailing-twelve-month window.
pub const TTM_WINDOW: usize = 4;

/// Label of a column whose fiscal date is unknown.
pub const UNKNOWN_PERIOD: &str = "Unknown";

/// Trailing rolling sum.
///
/// Position `t` holds the sum of `values[t + 1 - window..=t]` once a full
/// window is available and every value in it is present; otherwise `None`.
pub fn rolling_sum(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|t| {
            if window == 0 || t + 1 < window {
                return None;
            }
            values[t + 1 - window..=t].iter().copied().sum()
        })
        .collect()
}

/// Period-over-period change `(x[t] - x[t-1]) / x[t-1]`.
///
/// The first position is always `None`, as is any position where either
/// operand is absent or the prior value is zero.
pub fn pct_change(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut changes = Vec::with_capacity(values.len());
    if values.is_empty() {
        return changes;
    }

    changes.push(None);
    changes.extend(values.windows(2).map(|pair| match (pair[0], pair[1]) {
        (Some(prior), Some(current)) if prior != 0.0 => Some((current - prior) / prior),
        _ => None,
    }));
    changes
}

/// Ascending by fiscal date, unknown dates last.
fn ascending(a: &PeriodRow, b: &PeriodRow) -> Ordering {
    match (a.fiscal_date, b.fiscal_date) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending by fiscal date, unknown dates still last.
fn descending(a: &PeriodRow, b: &PeriodRow) -> Ordering {
    match (a.fiscal_date, b.fiscal_date) {
        (Some(a), Some(b)) => b.cmp(&a),
        _ => ascending(a, b),
    }
}

fn column(rows: &[PeriodRow], metric: &str) -> Vec<Option<f64>> {
    rows.iter().map(|row| row.get(metric)).collect()
}

fn write_column(rows: &mut [PeriodRow], metric: &'static str, values: Vec<Option<f64>>) {
    for (row, value) in rows.iter_mut().zip(values) {
        row.set(metric, value);
    }
}

/// Compute cross-period metrics and pivot the periods into a table.
///
/// Quarterly input gains TTM sums and QoQ growth and is returned newest
/// first. Annual input gains YoY growth and is returned oldest first.
pub fn process(mut rows: Vec<PeriodRow>, kind: PeriodKind) -> MetricTable {
    if rows.is_empty() {
        return MetricTable::empty();
    }

    rows.sort_by(ascending);

    match kind {
        PeriodKind::Quarterly => {
            for &(target, source) in TTM_ROWS {
                let sums = rolling_sum(&column(&rows, source), TTM_WINDOW);
                write_column(&mut rows, target, sums);
            }
            for &(target, source) in QUARTERLY_GROWTH_ROWS {
                let growth = pct_change(&column(&rows, source));
                write_column(&mut rows, target, growth);
            }
            rows.sort_by(descending);
        }
        PeriodKind::Annual => {
            for &(target, source) in ANNUAL_GROWTH_ROWS {
                let growth = pct_change(&column(&rows, source));
                write_column(&mut rows, target, growth);
            }
        }
    }

    pivot(&rows)
}

/// Reshape period rows into metric rows, keeping the period order.
fn pivot(rows: &[PeriodRow]) -> MetricTable {
    let columns: Vec<String> = rows
        .iter()
        .map(|row| {
            row.fiscal_date
                .map_or_else(|| UNKNOWN_PERIOD.to_string(), |d| d.to_string())
        })
        .collect();

    let metric_rows = rows
        .first()
        .map(|first| {
            first
                .metrics()
                .map(|metric| MetricRow::new(metric, column(rows, metric)))
                .collect()
        })
        .unwrap_or_default();

    // Every row carries one value per period by construction.
    MetricTable::new(columns, metric_rows).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn quarter(date: &str, revenue: f64) -> PeriodRow {
        let mut row = PeriodRow::new(NaiveDate::parse_from_str(date, "%Y-%m-%d").ok());
        row.set(REVENUE, Some(revenue));
        row.set(NET_INCOME, Some(revenue / 10.0));
        row.set(EPS, Some(1.0));
        row.set(CFFO, Some(revenue / 5.0));
        row.set(FREE_CASH_FLOW, Some(revenue / 5.0));
        row.set(TTM_CFFO, None);
        row.set(TTM_REVENUE, None);
        row.set(TTM_NET_INCOME, None);
        row
    }

    /// Newest first, as the API delivers them.
    fn quarters() -> Vec<PeriodRow> {
        vec![
            quarter("2024-12-31", 14.0),
            quarter("2024-09-30", 13.0),
            quarter("2024-06-30", 12.0),
            quarter("2024-03-31", 11.0),
            quarter("2023-12-31", 10.0),
        ]
    }

    #[test]
    fn test_rolling_sum() {
        let values = [10.0, 11.0, 12.0, 13.0, 14.0].map(Some);
        assert_eq!(
            rolling_sum(&values, 4),
            vec![None, None, None, Some(46.0), Some(50.0)]
        );
    }

    #[test]
    fn test_rolling_sum_absent_in_window() {
        let values = [Some(1.0), None, Some(1.0), Some(1.0), Some(1.0), Some(1.0)];
        assert_eq!(
            rolling_sum(&values, 4),
            vec![None, None, None, None, None, Some(4.0)]
        );
    }

    #[test]
    fn test_pct_change() {
        let growth = pct_change(&[Some(100.0), Some(110.0)]);
        assert_eq!(growth[0], None);
        assert_relative_eq!(growth[1].unwrap(), 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_pct_change_absent_and_zero() {
        let growth = pct_change(&[Some(0.0), Some(5.0), None, Some(4.0), Some(-2.0)]);
        assert_eq!(growth[..4], [None, None, None, None]);
        assert_relative_eq!(growth[4].unwrap(), -1.5);
        assert!(pct_change(&[]).is_empty());
    }

    #[test]
    fn test_quarterly_processing() {
        let table = process(quarters(), PeriodKind::Quarterly);

        assert_eq!(
            table.columns(),
            ["2024-12-31", "2024-09-30", "2024-06-30", "2024-03-31", "2023-12-31"]
        );
        assert_eq!(
            table.row(TTM_REVENUE).unwrap().values,
            vec![Some(50.0), Some(46.0), None, None, None]
        );
        assert_relative_eq!(
            table.value(TTM_CFFO, "2024-12-31").unwrap(),
            10.0,
            epsilon = 1e-12
        );

        let growth = &table.row(QOQ_REVENUE_GROWTH).unwrap().values;
        assert_eq!(growth[4], None);
        assert_relative_eq!(growth[3].unwrap(), 0.1, epsilon = 1e-12);
        assert!(table.row(YOY_REVENUE_GROWTH).is_none());
        assert_eq!(table.rows().last().unwrap().name, QOQ_EPS_GROWTH);
    }

    #[test]
    fn test_annual_processing_is_ascending() {
        let table = process(quarters(), PeriodKind::Annual);

        assert_eq!(
            table.columns(),
            ["2023-12-31", "2024-03-31", "2024-06-30", "2024-09-30", "2024-12-31"]
        );
        assert!(table.row(TTM_REVENUE).unwrap().is_blank());
        assert!(table.row(QOQ_REVENUE_GROWTH).is_none());

        let fcf_growth = &table.row(YOY_FCF_GROWTH).unwrap().values;
        assert_eq!(fcf_growth[0], None);
        assert_relative_eq!(fcf_growth[1].unwrap(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_order_independent_of_input_order() {
        let mut shuffled = quarters();
        shuffled.swap(0, 3);
        shuffled.swap(1, 4);

        assert_eq!(
            process(shuffled.clone(), PeriodKind::Quarterly),
            process(quarters(), PeriodKind::Quarterly)
        );
        assert_eq!(
            process(shuffled, PeriodKind::Annual),
            process(quarters(), PeriodKind::Annual)
        );
    }

    #[test]
    fn test_unknown_dates_sort_last() {
        let mut rows = quarters();
        rows.push(PeriodRow::new(None));
        rows.last_mut().unwrap().set(REVENUE, Some(1.0));

        let quarterly = process(rows.clone(), PeriodKind::Quarterly);
        assert_eq!(quarterly.columns().last().unwrap(), UNKNOWN_PERIOD);

        let annual = process(rows, PeriodKind::Annual);
        assert_eq!(annual.columns().last().unwrap(), UNKNOWN_PERIOD);
    }

    #[test]
    fn test_empty_input() {
        assert!(process(Vec::new(), PeriodKind::Quarterly).is_empty());
    }
}
