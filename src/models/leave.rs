//! Leave model and related types.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::duration::minutes;
use super::time_slot::TimeSlot;

/// How a leave is compensated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationClass {
    /// Paid leave; feeds the available-normal pool.
    Paid,
    /// Unpaid leave.
    Unpaid,
    /// National-holiday compensation; substituted from the weekly planning
    /// during curation and counted into the additional-hours raw total.
    NationalHoliday,
}

/// Represents a recorded leave period on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    /// Unique identifier for the leave.
    pub id: String,
    /// The employee on leave.
    pub employee_id: String,
    /// The day the leave applies to.
    pub date: NaiveDate,
    /// Start of the leave window.
    pub start_time: NaiveTime,
    /// End of the leave window.
    pub end_time: NaiveTime,
    /// The credited duration.
    #[serde(with = "minutes")]
    pub duration: Duration,
    /// The upstream absence code (e.g. "CP", "RTT", "AM").
    pub absence_type: String,
    /// How the leave is compensated.
    pub compensation: CompensationClass,
}

impl Leave {
    /// The leave's time-of-day window, when well-formed.
    pub fn slot(&self) -> Option<TimeSlot> {
        TimeSlot::new(self.start_time, self.end_time).ok()
    }

    /// Creates a derived leave covering `slot` on the same day, used by the
    /// holiday-substitution step of curation. The id is suffixed with the
    /// fragment position.
    pub fn with_slot(&self, slot: TimeSlot, index: usize) -> Leave {
        Leave {
            id: format!("{}-{}", self.id, index),
            employee_id: self.employee_id.clone(),
            date: self.date,
            start_time: slot.start(),
            end_time: slot.end(),
            duration: slot.duration(),
            absence_type: self.absence_type.clone(),
            compensation: self.compensation,
        }
    }
}
