//! Bench / idle-time generation.
//!
//! Fills an employee's contracted-but-unworked availability: the period's
//! intercontract total, net of bench already recorded, is poured day by day
//! into the free fragments of the contractual availability planning.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Weekday};

use crate::models::{
    BenchAllocation, EmploymentContract, HourBucket, Shift, SlotToCreate, TimeSlot,
    WorkingPeriodTimecard,
};

/// Generates the period's daily bench slots.
///
/// The budget is the `Intercontract` total minus the durations of existing
/// bench records in the period. Days are walked in order while budget
/// remains; within a day, each contractual availability slot is reduced by
/// the occupied slots (shifts, leaves and existing bench records) through
/// cumulative subtraction, and each free fragment absorbs
/// `min(fragment, budget)` from its start. Records on a day with a recorded
/// leave are tagged `during_leave`, which drives the downstream Absence vs
/// Intercontrat classification.
pub fn generate_bench_slots(
    timecard: &WorkingPeriodTimecard,
    contract: &EmploymentContract,
    existing_bench: &[Shift],
) -> Vec<SlotToCreate> {
    let consumed = existing_bench
        .iter()
        .filter(|b| timecard.period.range.contains(b.date()))
        .fold(Duration::zero(), |acc, b| acc + b.duration);
    let mut budget =
        (timecard.buckets.get(HourBucket::Intercontract) - consumed).max(Duration::zero());

    let mut created = Vec::new();
    'days: for day in timecard.period.range.iter_days() {
        if budget <= Duration::zero() {
            break;
        }
        let availability = contract.availability_slots(day);
        if availability.is_empty() {
            continue;
        }

        let mut occupied: Vec<TimeSlot> = Vec::new();
        occupied.extend(
            timecard
                .shifts
                .iter()
                .filter(|s| s.date() == day)
                .filter_map(Shift::time_slot),
        );
        occupied.extend(
            timecard
                .leaves
                .iter()
                .filter(|l| l.date == day)
                .filter_map(|l| l.slot()),
        );
        occupied.extend(
            existing_bench
                .iter()
                .filter(|b| b.date() == day)
                .filter_map(Shift::time_slot),
        );
        let day_has_leave = timecard.leaves.iter().any(|l| l.date == day);

        for slot in availability {
            let mut free = vec![slot];
            for occupant in &occupied {
                free = free
                    .iter()
                    .flat_map(|fragment| fragment.subtract(occupant))
                    .collect();
            }
            for fragment in free {
                if budget <= Duration::zero() {
                    break 'days;
                }
                let allocated = fragment.duration().min(budget);
                let Ok(allocated_slot) =
                    TimeSlot::new(fragment.start(), fragment.start() + allocated)
                else {
                    continue;
                };
                created.push(SlotToCreate {
                    employee_id: timecard.employee_id.clone(),
                    contract_id: contract.id.clone(),
                    date: day,
                    slot: allocated_slot,
                    duration: allocated,
                    during_leave: day_has_leave,
                });
                budget = budget - allocated;
            }
        }
    }
    created
}

/// Merges same-day adjacent slots, then groups identical recurring slots.
///
/// Chronologically adjacent records on the same day (inclusive adjacency,
/// same leave flag) become one contiguous slot; records then sharing an
/// identical `(slot, during_leave)` pair across distinct weekdays collapse
/// into one weekly-recurring allocation.
pub fn group_bench_slots(slots: Vec<SlotToCreate>) -> Vec<BenchAllocation> {
    let mut sorted = slots;
    sorted.sort_by_key(|s| (s.date, s.slot));

    let mut merged: Vec<SlotToCreate> = Vec::new();
    for record in sorted {
        if let Some(last) = merged.last_mut() {
            if last.date == record.date && last.during_leave == record.during_leave {
                let joined = last.slot.add(&record.slot);
                if joined.len() == 1 {
                    last.slot = joined[0];
                    last.duration = joined[0].duration();
                    continue;
                }
            }
        }
        merged.push(record);
    }

    let mut groups: BTreeMap<(TimeSlot, bool), (SlotToCreate, Vec<Weekday>)> = BTreeMap::new();
    for record in merged {
        let weekday = record.date.weekday();
        let entry = groups
            .entry((record.slot, record.during_leave))
            .or_insert_with(|| (record.clone(), Vec::new()));
        if !entry.1.contains(&weekday) {
            entry.1.push(weekday);
        }
    }

    groups
        .into_values()
        .map(|(record, mut weekdays)| {
            weekdays.sort_by_key(|w| w.num_days_from_monday());
            BenchAllocation {
                employee_id: record.employee_id,
                contract_id: record.contract_id,
                weekdays,
                slot: record.slot,
                duration: record.duration,
                during_leave: record.during_leave,
            }
        })
        .collect()
}

/// Runs the full bench generation for one timecard.
pub fn generate_bench(
    timecard: &WorkingPeriodTimecard,
    contract: &EmploymentContract,
    existing_bench: &[Shift],
) -> Vec<BenchAllocation> {
    group_bench_slots(generate_bench_slots(timecard, contract, existing_bench))
}
