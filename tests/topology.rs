use clinic_scheduler::parser::parse_shift_list;
use clinic_scheduler::roles::RoleCategory;
use clinic_scheduler::topology::{ShiftId, ShiftTopology};

fn id(s: &str) -> ShiftId {
    s.parse().expect("valid shift id")
}

#[test]
fn adjacency_within_a_day() {
    let topology = ShiftTopology::clinic_default();
    assert!(topology.consecutive(id("D1A"), id("D1B")));
    assert!(topology.consecutive(id("D1B"), id("D1C")));
    // Symmetric.
    assert!(topology.consecutive(id("D1B"), id("D1A")));
}

#[test]
fn non_adjacent_and_cross_day_pairs_are_never_consecutive() {
    let topology = ShiftTopology::clinic_default();
    assert!(!topology.consecutive(id("D1A"), id("D1C")));
    assert!(!topology.consecutive(id("D1C"), id("D2A")));
    assert!(!topology.consecutive(id("D2C"), id("D3A")));
    assert!(!topology.consecutive(id("D1A"), id("D1A")));
}

#[test]
fn shift_id_parses_and_displays() {
    assert_eq!(id("D1A").to_string(), "D1A");
    assert_eq!(id("D12C").to_string(), "D12C");
    // Case and whitespace tolerant.
    assert_eq!(id(" d2b "), ShiftId::new(2, 1));

    assert!("X1A".parse::<ShiftId>().is_err());
    assert!("D0A".parse::<ShiftId>().is_err());
    assert!("D1".parse::<ShiftId>().is_err());
    assert!("D1a1".parse::<ShiftId>().is_err());
}

#[test]
fn shift_ids_walk_the_grid_in_day_slot_order() {
    let topology = ShiftTopology::clinic_default();
    let ids = topology.shift_ids();
    assert_eq!(ids.len(), 12);
    assert_eq!(ids[0], id("D1A"));
    assert_eq!(ids[2], id("D1C"));
    assert_eq!(ids[3], id("D2A"));
    assert_eq!(ids[11], id("D4C"));
}

#[test]
fn contains_rejects_ids_outside_the_grid() {
    let topology = ShiftTopology::clinic_default();
    assert!(topology.contains(id("D4C")));
    assert!(!topology.contains(id("D5A")));
    assert!(!topology.contains(id("D1D")));
}

#[test]
fn parse_shift_list_drops_bad_tokens_and_dedups() {
    let topology = ShiftTopology::clinic_default();
    let shifts = parse_shift_list("D1B, D1A, what, D1A, D9Z, D2C", &topology);
    assert_eq!(shifts, vec![id("D1A"), id("D1B"), id("D2C")]);

    assert!(parse_shift_list("", &topology).is_empty());
    assert!(parse_shift_list("nope, also nope", &topology).is_empty());
}

#[test]
fn classification_is_case_insensitive_and_idempotent() {
    assert_eq!(
        RoleCategory::classify("Senior Mentor"),
        RoleCategory::classify("senior mentor")
    );
    assert_eq!(RoleCategory::classify("Senior Mentor"), RoleCategory::Mentor);
    assert_eq!(RoleCategory::classify("Frontline"), RoleCategory::Frontline);
    assert_eq!(
        RoleCategory::classify("front line greeter"),
        RoleCategory::Frontline
    );
    assert_eq!(
        RoleCategory::classify("Internal Services"),
        RoleCategory::InternalServices
    );
}

#[test]
fn unknown_role_text_defaults_to_filer() {
    assert_eq!(RoleCategory::classify("Tax Preparer"), RoleCategory::Filer);
    assert_eq!(RoleCategory::classify(""), RoleCategory::Filer);
    assert_eq!(RoleCategory::classify("???"), RoleCategory::Filer);
}

#[test]
fn custom_topologies_are_independent_values() {
    let small = ShiftTopology::new(
        vec!["Day 1".to_string(), "Day 2".to_string()],
        vec![
            ("9:00".to_string(), "13:00".to_string()),
            ("13:00".to_string(), "17:00".to_string()),
        ],
    )
    .expect("2x2 grid");
    assert_eq!(small.shift_count(), 4);
    assert!(small.contains(id("D2B")));
    assert!(!small.contains(id("D2C")));
    assert!(!small.contains(id("D3A")));

    // The default grid is unaffected.
    assert!(ShiftTopology::clinic_default().contains(id("D4C")));
}

#[test]
fn degenerate_topologies_are_rejected() {
    assert!(ShiftTopology::new(vec![], vec![("9".into(), "12".into())]).is_err());
    assert!(ShiftTopology::new(vec!["Day 1".into()], vec![]).is_err());
}
