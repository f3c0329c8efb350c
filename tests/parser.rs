use std::io::Write;
use std::path::PathBuf;

use clinic_scheduler::parser::load_volunteers;
use clinic_scheduler::roles::RoleCategory;
use clinic_scheduler::topology::{ShiftId, ShiftTopology};

fn id(s: &str) -> ShiftId {
    s.parse().expect("valid shift id")
}

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture");
    file.write_all(contents.as_bytes()).expect("write fixture");
    path
}

const HEADER: &str = "Timestamp,First name,Last name,Email address,\
What role are you volunteering for?,How many shifts would you like?,\
Do you prefer consecutive shifts?,Which shifts are you available for?\n";

#[test]
fn loads_and_normalizes_signup_rows() {
    let csv = format!(
        "{HEADER}\
         2026-02-01 10:00,Ada,Park,ada@example.org,Senior Mentor,3,Yes,\"D1B, D1A, D1A\"\n\
         2026-02-01 10:05,Ben,Ruiz,ben@example.org,Tax Filer,2,No,\"D2A, D9Z, nonsense\"\n"
    );
    let path = write_fixture("clinic_parser_basic.csv", &csv);
    let topology = ShiftTopology::clinic_default();

    let records = load_volunteers(&path, &topology).expect("load");
    std::fs::remove_file(&path).ok();

    assert_eq!(records.len(), 2);

    let ada = &records[0];
    assert_eq!(ada.full_name(), "Ada Park");
    assert_eq!(ada.role, RoleCategory::Mentor);
    assert!(ada.prefer_consecutive);
    // Deduplicated and sorted.
    assert_eq!(ada.available, vec![id("D1A"), id("D1B")]);

    let ben = &records[1];
    assert_eq!(ben.role, RoleCategory::Filer);
    assert!(!ben.prefer_consecutive);
    // Bad tokens dropped, the valid one kept.
    assert_eq!(ben.available, vec![id("D2A")]);
}

#[test]
fn resubmissions_replace_the_earlier_record() {
    let csv = format!(
        "{HEADER}\
         2026-02-01 10:00,Ada,Park,ada@example.org,Filer,2,No,D1A\n\
         2026-02-02 09:00,Ada,Park,ada@example.org,Filer,4,Yes,\"D2A, D2B\"\n"
    );
    let path = write_fixture("clinic_parser_resubmit.csv", &csv);
    let topology = ShiftTopology::clinic_default();

    let records = load_volunteers(&path, &topology).expect("load");
    std::fs::remove_file(&path).ok();

    assert_eq!(records.len(), 1);
    let ada = &records[0];
    assert_eq!(ada.max_shifts, 4);
    assert!(ada.prefer_consecutive);
    assert_eq!(ada.available, vec![id("D2A"), id("D2B")]);
}

#[test]
fn unschedulable_rows_are_excluded() {
    let csv = format!(
        "{HEADER}\
         2026-02-01 10:00,Ada,Park,ada@example.org,Filer,0,No,D1A\n\
         2026-02-01 10:01,Ben,Ruiz,ben@example.org,Filer,3,No,\"D9Z, bogus\"\n\
         2026-02-01 10:02,Cy,Sato,cy@example.org,Filer,3,No,D1A\n"
    );
    let path = write_fixture("clinic_parser_excluded.csv", &csv);
    let topology = ShiftTopology::clinic_default();

    let records = load_volunteers(&path, &topology).expect("load");
    std::fs::remove_file(&path).ok();

    // Ada requested zero shifts; Ben has no valid availability.
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].full_name(), "Cy Sato");
}

#[test]
fn oversized_shift_requests_are_clamped() {
    let csv = format!(
        "{HEADER}\
         2026-02-01 10:00,Ada,Park,ada@example.org,Filer,40,No,D1A\n"
    );
    let path = write_fixture("clinic_parser_clamp.csv", &csv);
    let topology = ShiftTopology::clinic_default();

    let records = load_volunteers(&path, &topology).expect("load");
    std::fs::remove_file(&path).ok();

    assert_eq!(records[0].max_shifts, 12);
}
