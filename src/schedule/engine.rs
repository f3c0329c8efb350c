use crate::error::{ScheduleError, ScheduleResult};
use crate::parser::VolunteerRecord;
use crate::roles::RoleCategory;
use crate::topology::ShiftTopology;

use super::balance::balanced_fill;
use super::chains::assign_consecutive_chains;
use super::minimums::{assign_internal_services, fill_role_minimums};
use super::topup::top_up_filers;
use super::types::{ScheduleOutcome, ScheduleState, SchedulerOptions, Shortfall};

/// Generates a complete shift schedule from availability records.
///
/// The engine is a pure function of its inputs: no I/O, no globals, and the
/// same records against the same topology always produce the same schedule.
/// Phases run in a fixed order because earlier phases make harder
/// guarantees and must claim capacity first:
///
///   0. filter + priority sort
///   1. per-shift role minimums
///   1.5 internal-services volunteers take all their declared shifts
///   2. consecutive-preference chains
///   3. filer minimum-shift guarantee
///   4. balanced fill until no assignment is possible
///
/// Unmet staffing minimums come back as shortfall entries alongside the
/// schedule; the only hard failure is having no usable records at all.
pub fn generate_schedule(
    records: &[VolunteerRecord],
    topology: &ShiftTopology,
    options: &SchedulerOptions,
) -> ScheduleResult<ScheduleOutcome> {
    // Phase 0: drop records that cannot be scheduled, normalize
    // availability, and order the rest. The sort is stable (slice::sort_by),
    // so volunteers that tie on both keys keep their input order, which is
    // what later first-match tie-breaks resolve against.
    let mut records: Vec<VolunteerRecord> = records
        .iter()
        .filter(|rec| rec.max_shifts > 0 && !rec.available.is_empty())
        .cloned()
        .collect();
    if records.is_empty() {
        return Err(ScheduleError::NoVolunteers);
    }
    for rec in &mut records {
        rec.available.sort();
        rec.available.dedup();
    }
    records.sort_by(|a, b| {
        let preference = if options.prioritize_consecutive {
            b.prefer_consecutive.cmp(&a.prefer_consecutive)
        } else {
            std::cmp::Ordering::Equal
        };
        // Scarcer availability schedules first: most-constrained-first keeps
        // hard-to-place volunteers from being starved by flexible ones.
        preference.then(a.available.len().cmp(&b.available.len()))
    });

    let mut state = ScheduleState::new(topology);

    fill_role_minimums(&mut state, &records, topology, options);
    assign_internal_services(&mut state, &records);
    assign_consecutive_chains(&mut state, &records, topology, options);
    let filer_below_target = top_up_filers(&mut state, &records, options);
    balanced_fill(&mut state, &records, topology, options);

    // Compare final per-role counts against the minimum. Below-minimum
    // staffing is reported, not raised; full satisfaction is frequently
    // impossible with real availability data.
    let mut shortfalls = Vec::new();
    for shift in topology.shift_ids() {
        for role in RoleCategory::PRIMARY {
            let actual = state.tally(shift).count(role);
            if actual < options.role_minimum {
                shortfalls.push(Shortfall {
                    shift,
                    role,
                    target: options.role_minimum,
                    actual,
                });
            }
        }
    }

    let assigned_total: usize = topology
        .shift_ids()
        .iter()
        .map(|&shift| state.headcount(shift))
        .sum();
    log::info!(
        "schedule generated: {} volunteers, {} assignments, {} staffing shortfalls, {} filers below target",
        records.len(),
        assigned_total,
        shortfalls.len(),
        filer_below_target.len()
    );

    Ok(ScheduleOutcome {
        schedule: state.into_schedule(),
        shortfalls,
        filer_below_target,
    })
}
