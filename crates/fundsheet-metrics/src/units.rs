//! Rescaling of absolute-dollar rows.

use crate::metric::UNSCALED_ROWS;
use crate::table::MetricTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rows whose name ends with this are rates and keep their unit.
const GROWTH_SUFFIX: &str = "Growth";

/// Divisor, label suffix and exclusions for unit normalization.
///
/// The default converts to billions of dollars and leaves ratios, margins,
/// per-share values and growth rates alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitScale {
    /// Every selected value is divided by this
    pub divisor: f64,
    /// Appended to the name of every selected row
    pub suffix: String,
    /// Row names that are never converted
    pub excluded: Vec<String>,
}

impl Default for UnitScale {
    fn default() -> Self {
        Self {
            divisor: 1e9,
            suffix: " (B$)".to_string(),
            excluded: UNSCALED_ROWS.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl UnitScale {
    /// Whether a row with this name is converted.
    pub fn selects(&self, name: &str) -> bool {
        !name.ends_with(GROWTH_SUFFIX) && !self.excluded.iter().any(|excluded| excluded == name)
    }

    /// Label of a converted row.
    pub fn label(&self, name: &str) -> String {
        format!("{name}{}", self.suffix)
    }

    /// Rescale and relabel every selected row of the table.
    ///
    /// A row holding a non-finite value keeps its values but is still
    /// relabelled, so row names only depend on selection.
    pub fn apply(&self, mut table: MetricTable) -> MetricTable {
        for row in table.rows_mut() {
            if !self.selects(&row.name) {
                continue;
            }

            if row.values.iter().flatten().all(|v| v.is_finite()) {
                for value in row.values.iter_mut().flatten() {
                    *value /= self.divisor;
                }
            } else {
                debug!(metric = %row.name, "row left unconverted");
            }
            row.name = self.label(&row.name);
        }
        table
    }
}
