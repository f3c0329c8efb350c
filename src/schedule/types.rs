use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::parser::VolunteerRecord;
use crate::roles::RoleCategory;
use crate::topology::{ShiftId, ShiftTopology};

/// Tunable knobs for the assignment engine. Defaults match the standard
/// clinic configuration.
#[derive(Debug, Clone)]
pub struct SchedulerOptions {
    /// When true, volunteers who asked for consecutive shifts are scheduled
    /// ahead of those who did not.
    pub prioritize_consecutive: bool,
    /// Minimum headcount per primary role per shift that Phase 1 tries to
    /// reach.
    pub role_minimum: u32,
    /// Hard cap on filer headcount per shift. Never exceeded in any phase.
    pub filer_cap: u32,
    /// Shift count every filer is topped up toward in Phase 3, provided
    /// their own requested maximum allows it.
    pub filer_min_shifts: u32,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            prioritize_consecutive: true,
            role_minimum: 1,
            filer_cap: 2,
            filer_min_shifts: 3,
        }
    }
}

/// Per-shift headcount by role category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTally {
    pub filer: u32,
    pub mentor: u32,
    pub frontline: u32,
    pub internal_services: u32,
}

impl RoleTally {
    pub fn count(&self, role: RoleCategory) -> u32 {
        match role {
            RoleCategory::Filer => self.filer,
            RoleCategory::Mentor => self.mentor,
            RoleCategory::Frontline => self.frontline,
            RoleCategory::InternalServices => self.internal_services,
        }
    }

    fn bump(&mut self, role: RoleCategory) {
        match role {
            RoleCategory::Filer => self.filer += 1,
            RoleCategory::Mentor => self.mentor += 1,
            RoleCategory::Frontline => self.frontline += 1,
            RoleCategory::InternalServices => self.internal_services += 1,
        }
    }
}

/// A shift whose final headcount for some role came in under the configured
/// minimum. Informational, never an error: real availability data often
/// cannot satisfy every minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub shift: ShiftId,
    pub role: RoleCategory,
    pub target: u32,
    pub actual: u32,
}

/// A filer who could not be topped up to the minimum shift count because
/// their declared availability ran out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilerShortfall {
    pub volunteer: String,
    pub target: u32,
    pub actual: u32,
}

/// The finished schedule: both directions of the assignment relation plus
/// per-shift role tallies. Lists are in assignment order, not display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub by_shift: HashMap<ShiftId, Vec<String>>,
    pub by_volunteer: HashMap<String, Vec<ShiftId>>,
    pub tallies: HashMap<ShiftId, RoleTally>,
}

/// Engine result: the schedule plus the structured warning lists callers are
/// expected to render distinctly from hard failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    pub schedule: Schedule,
    pub shortfalls: Vec<Shortfall>,
    pub filer_below_target: Vec<FilerShortfall>,
}

/// Mutable scheduling state threaded through the phases.
///
/// All three maps are kept consistent by funnelling every mutation through
/// [`ScheduleState::assign`]; there is deliberately no other write path, so
/// the bidirectional-consistency invariant holds by construction.
#[derive(Debug, Clone)]
pub struct ScheduleState {
    by_shift: HashMap<ShiftId, Vec<String>>,
    by_volunteer: HashMap<String, Vec<ShiftId>>,
    tallies: HashMap<ShiftId, RoleTally>,
}

impl ScheduleState {
    pub fn new(topology: &ShiftTopology) -> Self {
        let mut by_shift = HashMap::new();
        let mut tallies = HashMap::new();
        for id in topology.shift_ids() {
            by_shift.insert(id, Vec::new());
            tallies.insert(id, RoleTally::default());
        }
        Self {
            by_shift,
            by_volunteer: HashMap::new(),
            tallies,
        }
    }

    /// Assigns a volunteer to a shift, updating both directions and the role
    /// tally atomically. Returns false (and changes nothing) if the
    /// volunteer is already on that shift.
    pub fn assign(&mut self, shift: ShiftId, name: &str, role: RoleCategory) -> bool {
        let roster = self
            .by_shift
            .get_mut(&shift)
            .expect("shift comes from the topology");
        if roster.iter().any(|n| n == name) {
            return false;
        }
        roster.push(name.to_string());
        self.by_volunteer
            .entry(name.to_string())
            .or_default()
            .push(shift);
        self.tallies
            .get_mut(&shift)
            .expect("shift comes from the topology")
            .bump(role);
        true
    }

    pub fn is_assigned(&self, name: &str, shift: ShiftId) -> bool {
        self.by_shift
            .get(&shift)
            .map(|roster| roster.iter().any(|n| n == name))
            .unwrap_or(false)
    }

    pub fn shifts_for(&self, name: &str) -> &[ShiftId] {
        self.by_volunteer
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn assigned_count(&self, name: &str) -> u32 {
        self.shifts_for(name).len() as u32
    }

    pub fn volunteers_in(&self, shift: ShiftId) -> &[String] {
        self.by_shift
            .get(&shift)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn headcount(&self, shift: ShiftId) -> usize {
        self.volunteers_in(shift).len()
    }

    pub fn tally(&self, shift: ShiftId) -> &RoleTally {
        self.tallies
            .get(&shift)
            .expect("shift comes from the topology")
    }

    pub fn into_schedule(self) -> Schedule {
        Schedule {
            by_shift: self.by_shift,
            by_volunteer: self.by_volunteer,
            tallies: self.tallies,
        }
    }
}

/// Shifts a volunteer can still accept before hitting their requested
/// maximum.
pub fn remaining_capacity(rec: &VolunteerRecord, state: &ScheduleState) -> u32 {
    rec.max_shifts.saturating_sub(state.assigned_count(&rec.full_name()))
}
