use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::topology::ShiftId;

/// One volunteer's before/after shift sets, both sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDelta {
    pub old: Vec<ShiftId>,
    pub new: Vec<ShiftId>,
}

/// Compares a previous schedule snapshot against a newly generated one and
/// returns the volunteers whose assignments changed.
///
/// Only volunteers present in the OLD snapshot can produce an entry:
/// someone appearing for the first time has no prior assignment to be
/// notified about. Comparison is order-insensitive; a reshuffled but
/// identical shift set is not a change.
pub fn diff_schedules(
    old_assignments: &HashMap<String, Vec<ShiftId>>,
    new_assignments: &HashMap<String, Vec<ShiftId>>,
) -> HashMap<String, AssignmentDelta> {
    let mut changes = HashMap::new();
    for (name, old_shifts) in old_assignments {
        let mut old_sorted = old_shifts.clone();
        old_sorted.sort();
        old_sorted.dedup();

        let mut new_sorted = new_assignments.get(name).cloned().unwrap_or_default();
        new_sorted.sort();
        new_sorted.dedup();

        if old_sorted != new_sorted {
            changes.insert(
                name.clone(),
                AssignmentDelta {
                    old: old_sorted,
                    new: new_sorted,
                },
            );
        }
    }
    changes
}
