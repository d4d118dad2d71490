//! Positional alignment of the three statement series.

use crate::period::PeriodReport;
use chrono::NaiveDate;
use serde_json::Value;

/// Key holding a report's fiscal period end.
pub const FISCAL_DATE_KEY: &str = "fiscalDateEnding";

/// Income, balance sheet and cash flow reports for one fiscal period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedPeriod<'a> {
    /// Income statement report
    pub income: &'a PeriodReport,
    /// Balance sheet report
    pub balance: &'a PeriodReport,
    /// Cash flow report
    pub cash_flow: &'a PeriodReport,
    /// Fiscal period end, if any of the reports carries a parsable one
    pub fiscal_date: Option<NaiveDate>,
}

/// Pair the three report lists by index.
///
/// The lists are assumed to share the API's newest-first order. Only the
/// first `min(len)` entries of each list are used. Returns `None` when any
/// list is empty, so the caller can emit an empty table for this period kind
/// without failing the whole report.
pub fn align<'a>(
    income: &[&'a PeriodReport],
    balance: &[&'a PeriodReport],
    cash_flow: &[&'a PeriodReport],
) -> Option<Vec<AlignedPeriod<'a>>> {
    let n = income.len().min(balance.len()).min(cash_flow.len());
    if n == 0 {
        return None;
    }

    let periods = income
        .iter()
        .zip(balance)
        .zip(cash_flow)
        .take(n)
        .map(|((&income, &balance), &cash_flow)| AlignedPeriod {
            income,
            balance,
            cash_flow,
            fiscal_date: fiscal_date(income)
                .or_else(|| fiscal_date(balance))
                .or_else(|| fiscal_date(cash_flow)),
        })
        .collect();

    Some(periods)
}

/// Parse a report's `fiscalDateEnding`.
pub fn fiscal_date(report: &PeriodReport) -> Option<NaiveDate> {
    report
        .get(FISCAL_DATE_KEY)
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn reports(count: usize, year: i32) -> Vec<PeriodReport> {
        (0..count)
            .map(|i| {
                json!({ "fiscalDateEnding": format!("{}-12-31", year - i as i32) })
                    .as_object()
                    .cloned()
                    .unwrap()
            })
            .collect()
    }

    fn refs(reports: &[PeriodReport]) -> Vec<&PeriodReport> {
        reports.iter().collect()
    }

    #[test]
    fn test_align_takes_shortest_length() {
        let income = reports(5, 2024);
        let balance = reports(4, 2024);
        let cash_flow = reports(6, 2024);

        let aligned = align(&refs(&income), &refs(&balance), &refs(&cash_flow)).unwrap();
        assert_eq!(aligned.len(), 4);
        assert_eq!(
            aligned[0].fiscal_date,
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
        assert_eq!(
            aligned[3].fiscal_date,
            NaiveDate::from_ymd_opt(2021, 12, 31)
        );
        assert!(std::ptr::eq(aligned[2].income, &income[2]));
        assert!(std::ptr::eq(aligned[2].cash_flow, &cash_flow[2]));
    }

    #[rstest]
    #[case(0, 4, 6)]
    #[case(5, 0, 6)]
    #[case(5, 4, 0)]
    #[case(0, 0, 0)]
    fn test_align_no_data(#[case] a: usize, #[case] b: usize, #[case] c: usize) {
        let income = reports(a, 2024);
        let balance = reports(b, 2024);
        let cash_flow = reports(c, 2024);

        assert!(align(&refs(&income), &refs(&balance), &refs(&cash_flow)).is_none());
    }

    #[test]
    fn test_fiscal_date_falls_back_to_other_statements() {
        let income = json!({"totalRevenue": "1"}).as_object().cloned().unwrap();
        let balance = json!({ "fiscalDateEnding": "2023-06-30" })
            .as_object()
            .cloned()
            .unwrap();
        let cash_flow = json!({ "fiscalDateEnding": "bogus" })
            .as_object()
            .cloned()
            .unwrap();

        let aligned = align(&[&income], &[&balance], &[&cash_flow]).unwrap();
        assert_eq!(
            aligned[0].fiscal_date,
            NaiveDate::from_ymd_opt(2023, 6, 30)
        );

        let aligned = align(&[&income], &[&income], &[&cash_flow]).unwrap();
        assert_eq!(aligned[0].fiscal_date, None);
    }
}
