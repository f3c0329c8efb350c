use std::collections::HashMap;

use crate::parser::VolunteerRecord;
use crate::roles::RoleCategory;
use crate::topology::{ShiftId, ShiftTopology};

use super::types::{remaining_capacity, ScheduleState, SchedulerOptions};

/// Phase 4: spend the remaining volunteer capacity evening out staffing.
///
/// Each round finds the (shift, role) pair furthest below the grid-wide
/// average for that role and fills it with the best eligible candidate.
/// When no role-specific deficit has a candidate left, the round falls back
/// to the shift with the lowest total headcount. The loop stops when no
/// (shift, candidate) pair remains; every round assigns exactly one
/// volunteer, so it cannot spin.
pub(super) fn balanced_fill(
    state: &mut ScheduleState,
    records: &[VolunteerRecord],
    topology: &ShiftTopology,
    options: &SchedulerOptions,
) {
    // Reverse index (shift -> declared-available volunteers), built once.
    // Internal-services volunteers were exhausted in Phase 1.5 and never
    // compete here.
    let mut available_for: HashMap<ShiftId, Vec<&VolunteerRecord>> = HashMap::new();
    for rec in records {
        if rec.role == RoleCategory::InternalServices {
            continue;
        }
        for &shift in &rec.available {
            available_for.entry(shift).or_default().push(rec);
        }
    }

    let shifts = topology.shift_ids();
    let shift_total = shifts.len() as f64;

    loop {
        let candidates_by_shift: HashMap<ShiftId, Vec<&VolunteerRecord>> = shifts
            .iter()
            .map(|&shift| {
                (
                    shift,
                    eligible_candidates(shift, &available_for, state, topology, options),
                )
            })
            .collect();

        // Grid-wide average headcount per primary role.
        let averages: HashMap<RoleCategory, f64> = RoleCategory::PRIMARY
            .iter()
            .map(|&role| {
                let total: u32 = shifts.iter().map(|&s| state.tally(s).count(role)).sum();
                (role, total as f64 / shift_total)
            })
            .collect();

        // The single largest positive deficit that has someone to fill it.
        // Strict comparison keeps the earliest (shift, role) on ties.
        let mut best: Option<(ShiftId, RoleCategory, f64)> = None;
        for &shift in &shifts {
            if candidates_by_shift[&shift].is_empty() {
                continue;
            }
            for role in RoleCategory::PRIMARY {
                let deficit = averages[&role] - state.tally(shift).count(role) as f64;
                if deficit <= 0.0 {
                    continue;
                }
                if best.map_or(true, |(_, _, d)| deficit > d) {
                    best = Some((shift, role, deficit));
                }
            }
        }

        let (shift, target_role) = match best {
            Some((shift, role, _)) => (shift, Some(role)),
            None => {
                // No role-specific deficit left; fill the emptiest shift
                // that still has an eligible candidate.
                let fallback = shifts
                    .iter()
                    .copied()
                    .filter(|shift| !candidates_by_shift[shift].is_empty())
                    .min_by_key(|&shift| state.headcount(shift));
                match fallback {
                    Some(shift) => (shift, None),
                    None => break,
                }
            }
        };

        let pick = pick_candidate(
            candidates_by_shift[&shift].clone(),
            target_role,
            shift,
            state,
            topology,
        );
        state.assign(shift, &pick.full_name(), pick.role);
    }
}

/// Candidates who may still be placed on this shift: under their own cap,
/// not already booked, filer-cap compliant, and (for volunteers who did not
/// ask for consecutive shifts) not creating an unwanted back-to-back pair.
fn eligible_candidates<'a>(
    shift: ShiftId,
    available_for: &HashMap<ShiftId, Vec<&'a VolunteerRecord>>,
    state: &ScheduleState,
    topology: &ShiftTopology,
    options: &SchedulerOptions,
) -> Vec<&'a VolunteerRecord> {
    let Some(declared) = available_for.get(&shift) else {
        return Vec::new();
    };
    declared
        .iter()
        .copied()
        .filter(|rec| remaining_capacity(rec, state) > 0)
        .filter(|rec| !state.is_assigned(&rec.full_name(), shift))
        .filter(|rec| {
            rec.role != RoleCategory::Filer || state.tally(shift).filer < options.filer_cap
        })
        .filter(|rec| {
            rec.prefer_consecutive
                || !state
                    .shifts_for(&rec.full_name())
                    .iter()
                    .any(|&held| topology.consecutive(held, shift))
        })
        .collect()
}

/// Tie-break chain for one fill: prefer the deficit's role, then (on the
/// final day) volunteers who already hold an earlier-day shift so newcomers
/// are not clustered at the end of the event, then the most remaining
/// capacity. Every step keeps the earliest candidate on ties.
fn pick_candidate<'a>(
    mut candidates: Vec<&'a VolunteerRecord>,
    target_role: Option<RoleCategory>,
    shift: ShiftId,
    state: &ScheduleState,
    topology: &ShiftTopology,
) -> &'a VolunteerRecord {
    debug_assert!(!candidates.is_empty());

    if let Some(role) = target_role {
        let matching: Vec<_> = candidates
            .iter()
            .copied()
            .filter(|rec| rec.role == role)
            .collect();
        if !matching.is_empty() {
            candidates = matching;
        }
    }

    if topology.is_final_day(shift) {
        let seasoned: Vec<_> = candidates
            .iter()
            .copied()
            .filter(|rec| {
                state
                    .shifts_for(&rec.full_name())
                    .iter()
                    .any(|&held| !topology.is_final_day(held))
            })
            .collect();
        if !seasoned.is_empty() {
            candidates = seasoned;
        }
    }

    let mut winner = candidates[0];
    let mut best = remaining_capacity(winner, state);
    for &rec in &candidates[1..] {
        let cap = remaining_capacity(rec, state);
        if cap > best {
            winner = rec;
            best = cap;
        }
    }
    winner
}
