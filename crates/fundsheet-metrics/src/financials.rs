//! Quarterly and annual statement tables.

use crate::align::align;
use crate::period::{PeriodKind, period_reports};
use crate::rows::build_row;
use crate::series::process;
use crate::table::MetricTable;
use crate::units::UnitScale;
use serde_json::{Map, Value};
use tracing::{info, warn};

/// Build the statement table for one period kind.
///
/// Reports are aligned, turned into rows, processed across periods and
/// rescaled. When any statement has no reports of this kind the result is
/// an empty table and a warning is logged.
pub fn build_financials(
    income: &Map<String, Value>,
    balance: &Map<String, Value>,
    cash_flow: &Map<String, Value>,
    kind: PeriodKind,
    scale: &UnitScale,
) -> MetricTable {
    let income_reports = period_reports(income, kind);
    let balance_reports = period_reports(balance, kind);
    let cash_flow_reports = period_reports(cash_flow, kind);

    let Some(periods) = align(&income_reports, &balance_reports, &cash_flow_reports) else {
        warn!(
            period = %kind,
            income = income_reports.len(),
            balance = balance_reports.len(),
            cash_flow = cash_flow_reports.len(),
            "no {kind} data found"
        );
        return MetricTable::empty();
    };

    info!(period = %kind, periods = periods.len(), "building statement table");
    let rows = periods.iter().map(build_row).collect();
    scale.apply(process(rows, kind))
}
