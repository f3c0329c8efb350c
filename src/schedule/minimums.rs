use crate::parser::VolunteerRecord;
use crate::roles::RoleCategory;
use crate::topology::ShiftTopology;

use super::types::{remaining_capacity, ScheduleState, SchedulerOptions};

/// Phase 1: fill every shift up to the per-role minimum, roles in priority
/// order (filer, then mentor, then frontline).
///
/// Among eligible candidates the one with the least remaining capacity is
/// claimed first, so volunteers with slack stay flexible for later phases.
/// The filer cap is enforced even while the minimum is unmet; a shortfall is
/// recorded by the post-pass scan, never raised here.
pub(super) fn fill_role_minimums(
    state: &mut ScheduleState,
    records: &[VolunteerRecord],
    topology: &ShiftTopology,
    options: &SchedulerOptions,
) {
    for shift in topology.shift_ids() {
        for role in RoleCategory::PRIMARY {
            while state.tally(shift).count(role) < options.role_minimum {
                if role == RoleCategory::Filer && state.tally(shift).filer >= options.filer_cap {
                    break;
                }
                let candidate = records
                    .iter()
                    .filter(|rec| rec.role == role)
                    .filter(|rec| rec.available.contains(&shift))
                    .filter(|rec| remaining_capacity(rec, state) > 0)
                    .filter(|rec| !state.is_assigned(&rec.full_name(), shift))
                    .min_by_key(|rec| remaining_capacity(rec, state));
                match candidate {
                    Some(rec) => {
                        state.assign(shift, &rec.full_name(), rec.role);
                    }
                    None => break,
                }
            }
        }
    }
}

/// Phase 1.5: internal-services volunteers work every shift they declared,
/// unconditionally. This is the one role exempt from the max-shifts cap and
/// from capacity contention.
pub(super) fn assign_internal_services(state: &mut ScheduleState, records: &[VolunteerRecord]) {
    for rec in records
        .iter()
        .filter(|rec| rec.role == RoleCategory::InternalServices)
    {
        let name = rec.full_name();
        for &shift in &rec.available {
            state.assign(shift, &name, rec.role);
        }
    }
}
