use crate::parser::VolunteerRecord;
use crate::roles::RoleCategory;
use crate::topology::{ShiftId, ShiftTopology};

use super::types::{remaining_capacity, ScheduleState, SchedulerOptions};

/// Phase 2: honor the consecutive-shifts preference by assigning whole runs
/// of adjacent same-day shifts at once.
///
/// A run is trimmed before assignment: shifts already held are removed,
/// filer-cap-violating shifts are dropped, and the rest is cut down to the
/// volunteer's remaining capacity. Only runs that still hold two or more
/// shifts are assigned; the preference is for multi-shift continuity, so a
/// run that trims to a single shift is discarded rather than partially
/// honored.
pub(super) fn assign_consecutive_chains(
    state: &mut ScheduleState,
    records: &[VolunteerRecord],
    topology: &ShiftTopology,
    options: &SchedulerOptions,
) {
    for rec in records {
        if !rec.prefer_consecutive || rec.role == RoleCategory::InternalServices {
            continue;
        }
        let name = rec.full_name();
        for run in maximal_runs(&rec.available, topology) {
            let mut trimmed: Vec<ShiftId> = run
                .into_iter()
                .filter(|&shift| !state.is_assigned(&name, shift))
                .filter(|&shift| {
                    rec.role != RoleCategory::Filer
                        || state.tally(shift).filer < options.filer_cap
                })
                .collect();
            trimmed.truncate(remaining_capacity(rec, state) as usize);
            if trimmed.len() < 2 {
                continue;
            }
            log::debug!("assigning consecutive run {:?} to {}", trimmed, name);
            for shift in trimmed {
                state.assign(shift, &name, rec.role);
            }
        }
    }
}

/// Splits a sorted availability list into maximal runs of consecutive
/// shifts. Runs shorter than two shifts are not returned.
fn maximal_runs(available: &[ShiftId], topology: &ShiftTopology) -> Vec<Vec<ShiftId>> {
    let mut runs = Vec::new();
    let mut current: Vec<ShiftId> = Vec::new();
    for &shift in available {
        match current.last() {
            Some(&prev) if topology.consecutive(prev, shift) => current.push(shift),
            _ => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                }
                current = vec![shift];
            }
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }
    runs
}
