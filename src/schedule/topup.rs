use crate::parser::VolunteerRecord;
use crate::roles::RoleCategory;

use super::types::{FilerShortfall, ScheduleState, SchedulerOptions};

/// Phase 3: top up every filer toward the minimum shift count, provided
/// their own requested maximum allows it.
///
/// Each step claims the eligible shift with the fewest current occupants,
/// which spreads the guaranteed filer load across the grid. Filers whose
/// declared availability runs out before the target are reported as a
/// shortfall, never an error.
pub(super) fn top_up_filers(
    state: &mut ScheduleState,
    records: &[VolunteerRecord],
    options: &SchedulerOptions,
) -> Vec<FilerShortfall> {
    let mut shortfalls = Vec::new();
    for rec in records.iter().filter(|rec| rec.role == RoleCategory::Filer) {
        if rec.max_shifts < options.filer_min_shifts {
            continue;
        }
        let name = rec.full_name();
        while state.assigned_count(&name) < options.filer_min_shifts
            && state.assigned_count(&name) < rec.max_shifts
        {
            let next = rec
                .available
                .iter()
                .copied()
                .filter(|&shift| !state.is_assigned(&name, shift))
                .filter(|&shift| state.tally(shift).filer < options.filer_cap)
                .min_by_key(|&shift| state.headcount(shift));
            match next {
                Some(shift) => {
                    state.assign(shift, &name, rec.role);
                }
                None => break,
            }
        }
        let actual = state.assigned_count(&name);
        if actual < options.filer_min_shifts {
            log::warn!(
                "filer {} stuck at {} of {} target shifts; availability exhausted",
                name,
                actual,
                options.filer_min_shifts
            );
            shortfalls.push(FilerShortfall {
                volunteer: name,
                target: options.filer_min_shifts,
                actual,
            });
        }
    }
    shortfalls
}
