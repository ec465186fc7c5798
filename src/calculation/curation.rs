//! Shift and leave curation.
//!
//! Curation prepares a working period's raw records for classification:
//! holiday leaves are substituted from the weekly planning, paid leaves
//! shadowed by a holiday are dropped, shifts overlapping leaves are split
//! into fragments, bench fillers from earlier runs are removed, and the
//! unworked days of a partial period are filled with synthetic inactive
//! shifts.

use chrono::Duration;

use crate::models::{
    CompensationClass, EmploymentContract, Leave, Shift, ShiftReason, WorkingPeriod,
};

use super::period_division::previous_or_same_monday;

/// Curates a period's leaves.
///
/// National-holiday leaves are replaced by fragments synthesized from the
/// weekly planning on their date, one per planned slot; any paid leave
/// whose window overlaps a holiday leave is dropped so the same hours are
/// not credited twice. Holiday leaves arrive pre-classified from upstream,
/// so no holiday-zone lookup happens here.
pub fn curate_leaves(leaves: &[Leave], contract: &EmploymentContract) -> Vec<Leave> {
    let holiday_leaves: Vec<&Leave> = leaves
        .iter()
        .filter(|l| l.compensation == CompensationClass::NationalHoliday)
        .collect();

    let shadowed_by_holiday = |leave: &Leave| -> bool {
        let Some(slot) = leave.slot() else {
            return false;
        };
        holiday_leaves.iter().any(|h| {
            h.date == leave.date
                && h.slot().is_some_and(|holiday_slot| holiday_slot.overlaps(&slot))
        })
    };

    let mut curated = Vec::new();
    for leave in leaves {
        match leave.compensation {
            CompensationClass::NationalHoliday => {
                for (index, slot) in contract.planning_slots(leave.date).into_iter().enumerate() {
                    curated.push(leave.with_slot(slot, index + 1));
                }
            }
            CompensationClass::Paid if shadowed_by_holiday(leave) => {}
            CompensationClass::Paid | CompensationClass::Unpaid => curated.push(leave.clone()),
        }
    }
    curated
}

/// Splits one shift against the leaves recorded on its day.
///
/// The shift's window is subtracted leave by leave; surviving pieces become
/// derived fragments. A shift untouched by any leave is returned unchanged,
/// and a midnight-crossing shift has no single-day window to subtract from.
fn split_shift(shift: &Shift, leaves: &[Leave]) -> Vec<Shift> {
    let Some(slot) = shift.time_slot() else {
        return vec![shift.clone()];
    };

    let mut pieces = vec![slot];
    for leave in leaves.iter().filter(|l| l.date == shift.date()) {
        let Some(leave_slot) = leave.slot() else {
            continue;
        };
        pieces = pieces
            .iter()
            .flat_map(|piece| piece.subtract(&leave_slot))
            .collect();
    }

    if pieces == vec![slot] {
        return vec![shift.clone()];
    }
    pieces
        .into_iter()
        .enumerate()
        .map(|(index, piece)| shift.fragment(piece, index + 1))
        .collect()
}

/// Curates a period's shifts against its (already curated) leaves.
///
/// Bench fillers produced by an earlier generation run are dropped
/// entirely; every other shift is split against the day's leaves.
pub fn curate_shifts(shifts: &[Shift], leaves: &[Leave]) -> Vec<Shift> {
    shifts
        .iter()
        .filter(|s| !s.reason.is_bench_filler())
        .flat_map(|s| split_shift(s, leaves))
        .collect()
}

/// Synthesizes inactive filler shifts for the unworked days of a partial
/// period.
///
/// A partial period is shorter than the averaging window; the days of its
/// enclosing Monday-aligned window that fall outside the period get one
/// synthetic shift per planned slot, so the period's totals reflect a full
/// averaging window.
pub fn fill_partial_period(
    period: &WorkingPeriod,
    contract: &EmploymentContract,
) -> Vec<Shift> {
    if !period.is_partial(contract.overtime_averaging_period) {
        return Vec::new();
    }

    let averaging_days = contract.averaging_days().max(1);
    let window_start = previous_or_same_monday(period.range.start());

    let mut fillers = Vec::new();
    for offset in 0..averaging_days {
        let day = window_start + Duration::days(offset);
        if period.range.contains(day) {
            continue;
        }
        for (index, slot) in contract.planning_slots(day).into_iter().enumerate() {
            fillers.push(Shift {
                id: format!("inactive-{}-{}-{}", contract.id, day, index + 1),
                employee_id: contract.employee_id.clone(),
                client_id: String::new(),
                start: day.and_time(slot.start()),
                duration: slot.duration(),
                reason: ShiftReason::Inactive,
                precedence_date: None,
                source_id: None,
            });
        }
    }
    fillers
}
