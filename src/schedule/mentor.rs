use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::topology::{ShiftId, ShiftTopology};

/// Admin-maintained mentor designations, typically loaded from a JSON
/// roster file. Mentors in neither list are treated as independent and are
/// never paired.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentorDesignations {
    pub senior_mentors: Vec<String>,
    pub first_time_mentors: Vec<String>,
}

/// day label -> (first-time mentor -> assigned senior, or None).
pub type MentorTeams = HashMap<String, HashMap<String, Option<String>>>;

/// Pairs every first-time mentor with a senior mentor, day by day.
///
/// Pass 1 balances load: each first-time mentor (in roster order) goes to
/// the senior with the fewest assignments that day, ties to the earlier
/// senior in the designation list. Pass 2 repairs pairings where mentor and
/// senior never share a shift, reassigning to the first senior whose shifts
/// do overlap. Overlap wins over balance: Pass 2 does not rebalance
/// Pass 1's counts, so a repair can leave some seniors carrying more
/// first-timers than others.
pub fn compute_mentor_teams(
    assignments: &HashMap<String, Vec<ShiftId>>,
    roster: &[String],
    designations: &MentorDesignations,
    topology: &ShiftTopology,
) -> MentorTeams {
    let mut teams = MentorTeams::new();

    for day in 1..=topology.days() {
        let shifts_on_day = |name: &str| -> Vec<ShiftId> {
            assignments
                .get(name)
                .map(|shifts| shifts.iter().copied().filter(|s| s.day == day).collect())
                .unwrap_or_default()
        };

        // Seniors actually working this day, in designation-list order.
        let mut seniors: Vec<(&str, Vec<ShiftId>, u32)> = designations
            .senior_mentors
            .iter()
            .filter_map(|name| {
                let shifts = shifts_on_day(name);
                if shifts.is_empty() {
                    None
                } else {
                    Some((name.as_str(), shifts, 0u32))
                }
            })
            .collect();

        let mut day_teams: HashMap<String, Option<String>> = HashMap::new();

        // Pass 1: round-robin balance in roster order.
        for name in roster {
            if !designations.first_time_mentors.contains(name) {
                continue;
            }
            if shifts_on_day(name).is_empty() {
                day_teams.insert(name.clone(), None);
                continue;
            }
            let lightest = seniors
                .iter()
                .enumerate()
                .min_by_key(|(_, senior)| senior.2)
                .map(|(i, _)| i);
            match lightest {
                Some(i) => {
                    seniors[i].2 += 1;
                    day_teams.insert(name.clone(), Some(seniors[i].0.to_string()));
                }
                None => {
                    day_teams.insert(name.clone(), None);
                }
            }
        }

        // Pass 2: overlap repair.
        for name in roster {
            let Some(Some(current)) = day_teams.get(name).cloned() else {
                continue;
            };
            let mentor_shifts = shifts_on_day(name);
            let overlaps = |senior_shifts: &[ShiftId]| {
                senior_shifts.iter().any(|s| mentor_shifts.contains(s))
            };
            let current_overlaps = seniors
                .iter()
                .find(|(senior, _, _)| *senior == current)
                .map(|(_, shifts, _)| overlaps(shifts))
                .unwrap_or(false);
            if current_overlaps {
                continue;
            }
            if let Some((replacement, _, _)) =
                seniors.iter().find(|(_, shifts, _)| overlaps(shifts))
            {
                log::debug!(
                    "day {}: moving {} from {} to {} for shift overlap",
                    day,
                    name,
                    current,
                    replacement
                );
                day_teams.insert(name.clone(), Some(replacement.to_string()));
            }
        }

        teams.insert(topology.day_label(day).to_string(), day_teams);
    }

    teams
}
