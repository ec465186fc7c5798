//! Working period model.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::date_range::DateRange;

/// One averaging-window-aligned slice of a contract's life.
///
/// Produced by period division; full periods span exactly one averaging
/// window (usually a Monday-to-Monday week), while the edges of a
/// contract's life may yield shorter partial periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingPeriod {
    /// The employee this period belongs to.
    pub employee_id: String,
    /// The contract this period was divided from.
    pub contract_id: String,
    /// The covered dates, aligned to the averaging boundary.
    pub range: DateRange,
}

impl WorkingPeriod {
    /// Whether this period is shorter than the contract's averaging window.
    pub fn is_partial(&self, averaging_period: Duration) -> bool {
        self.range.num_days() < averaging_period.num_days()
    }
}
