use std::collections::HashMap;

use clinic_scheduler::schedule::diff_schedules;
use clinic_scheduler::topology::ShiftId;

fn id(s: &str) -> ShiftId {
    s.parse().expect("valid shift id")
}

fn assignments(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<ShiftId>> {
    entries
        .iter()
        .map(|(name, shifts)| {
            (
                name.to_string(),
                shifts.iter().map(|s| id(s)).collect::<Vec<_>>(),
            )
        })
        .collect()
}

#[test]
fn changed_assignments_produce_sorted_deltas() {
    let old = assignments(&[("Ada Park", &["D1B", "D1A"])]);
    let new = assignments(&[("Ada Park", &["D1B", "D2C"])]);

    let changes = diff_schedules(&old, &new);
    let delta = &changes["Ada Park"];
    assert_eq!(delta.old, vec![id("D1A"), id("D1B")]);
    assert_eq!(delta.new, vec![id("D1B"), id("D2C")]);
}

#[test]
fn new_volunteers_are_not_notified() {
    let old = assignments(&[("Ada Park", &["D1A"])]);
    let new = assignments(&[("Ada Park", &["D1A"]), ("Ben Ruiz", &["D2A", "D2B"])]);

    let changes = diff_schedules(&old, &new);
    assert!(changes.is_empty());
}

#[test]
fn reordered_but_identical_sets_are_not_changes() {
    let old = assignments(&[("Ada Park", &["D2C", "D1A", "D1B"])]);
    let new = assignments(&[("Ada Park", &["D1A", "D1B", "D2C"])]);

    assert!(diff_schedules(&old, &new).is_empty());
}

#[test]
fn dropped_volunteers_diff_against_an_empty_set() {
    let old = assignments(&[("Ada Park", &["D1A", "D1B"])]);
    let new = assignments(&[]);

    let changes = diff_schedules(&old, &new);
    let delta = &changes["Ada Park"];
    assert_eq!(delta.old, vec![id("D1A"), id("D1B")]);
    assert!(delta.new.is_empty());
}
