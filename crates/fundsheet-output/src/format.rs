//! Cell number formats chosen from metric names.

/// Percent, e.g. margins and growth rates.
pub const PERCENT_FORMAT: &str = "0.0%";
/// Dollars and cents, for per-share values.
pub const CURRENCY_FORMAT: &str = "$#,##0.00";
/// Rescaled dollar amounts.
pub const BILLIONS_FORMAT: &str = "#,##0.00";
/// Plain ratios.
pub const RATIO_FORMAT: &str = "0.00";
/// Prices on the stock price sheet.
pub const PRICE_FORMAT: &str = "#,##0.00";
/// Traded volume on the stock price sheet.
pub const VOLUME_FORMAT: &str = "#,##0";

/// Fill for negative growth and cash flow cells.
pub const NEGATIVE_FILL_RGB: u32 = 0xFFC7CE;

const PERCENT_MARKERS: &[&str] = &["Margin", "ROE", "ROA", "Growth", "Yield", "Payout"];
const RATIO_MARKERS: &[&str] = &[
    "Ratio",
    "Coverage",
    "Debt-to-Equity",
    "PEGRatio",
    "EVToEBITDA",
];
const HIGHLIGHT_MARKERS: &[&str] = &["Growth", "Free Cash Flow"];

/// Number format family of a metric row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberStyle {
    /// `0.0%`
    Percent,
    /// `$#,##0.00`
    Currency,
    /// `#,##0.00`
    Billions,
    /// `0.00`
    Ratio,
}

impl NumberStyle {
    /// Pick the style for a metric by substring, first match wins.
    pub fn for_metric(metric: &str) -> Option<Self> {
        let has = |markers: &[&str]| markers.iter().any(|m| metric.contains(m));

        if has(PERCENT_MARKERS) {
            Some(Self::Percent)
        } else if metric.contains("EPS") {
            Some(Self::Currency)
        } else if metric.contains("(B$)") {
            Some(Self::Billions)
        } else if has(RATIO_MARKERS) {
            Some(Self::Ratio)
        } else {
            None
        }
    }

    /// Excel number format string.
    pub const fn num_format(&self) -> &'static str {
        match self {
            Self::Percent => PERCENT_FORMAT,
            Self::Currency => CURRENCY_FORMAT,
            Self::Billions => BILLIONS_FORMAT,
            Self::Ratio => RATIO_FORMAT,
        }
    }
}

/// Whether negative values in this row get the red fill.
pub fn highlights_negative(metric: &str) -> bool {
    HIGHLIGHT_MARKERS.iter().any(|m| metric.contains(m))
}
