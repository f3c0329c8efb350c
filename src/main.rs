use std::collections::HashMap;
use std::process::ExitCode;

use clinic_scheduler::display::{print_mentor_teams, print_schedule, write_schedule_to_file};
use clinic_scheduler::schedule::{
    compute_mentor_teams, diff_schedules, generate_schedule, MentorDesignations, SchedulerOptions,
};
use clinic_scheduler::topology::{ShiftId, ShiftTopology};
use clinic_scheduler::{load_volunteers, ScheduleError};

const SNAPSHOT_FILE: &str = "schedule_snapshot.json";
const REPORT_FILE: &str = "schedule_report.txt";

fn usage() {
    eprintln!("Usage: clinic-scheduler <availability.csv> [--designations roster.json] [--previous snapshot.json]");
    eprintln!();
    eprintln!("  --designations  JSON file with senior_mentors / first_time_mentors lists");
    eprintln!("  --previous      snapshot from an earlier run; prints who must be notified");
}

fn run() -> Result<(), ScheduleError> {
    let args: Vec<String> = std::env::args().collect();
    let mut csv_path: Option<&str> = None;
    let mut designations_path: Option<&str> = None;
    let mut previous_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--designations" => {
                designations_path = args.get(i + 1).map(String::as_str);
                i += 2;
            }
            "--previous" => {
                previous_path = args.get(i + 1).map(String::as_str);
                i += 2;
            }
            other => {
                csv_path = Some(other);
                i += 1;
            }
        }
    }

    let Some(csv_path) = csv_path else {
        usage();
        return Ok(());
    };

    let topology = ShiftTopology::clinic_default();

    println!("Loading volunteer availability from {}...", csv_path);
    let records = load_volunteers(csv_path, &topology)?;
    println!("Loaded {} volunteer records (resubmissions merged)", records.len());

    let options = SchedulerOptions::default();
    let outcome = generate_schedule(&records, &topology, &options)?;
    print_schedule(&outcome, &records, &topology);

    if let Some(path) = designations_path {
        let raw = std::fs::read_to_string(path)?;
        let designations: MentorDesignations = serde_json::from_str(&raw)?;
        let roster: Vec<String> = records.iter().map(|rec| rec.full_name()).collect();
        let teams = compute_mentor_teams(
            &outcome.schedule.by_volunteer,
            &roster,
            &designations,
            &topology,
        );
        print_mentor_teams(&teams, &topology);
    }

    if let Some(path) = previous_path {
        let raw = std::fs::read_to_string(path)?;
        let old_assignments: HashMap<String, Vec<ShiftId>> = serde_json::from_str(&raw)?;
        let changes = diff_schedules(&old_assignments, &outcome.schedule.by_volunteer);
        if changes.is_empty() {
            println!("\nNo assignment changes since the previous schedule.");
        } else {
            println!("\n=== Volunteers to notify ({}) ===", changes.len());
            let mut names: Vec<&String> = changes.keys().collect();
            names.sort();
            for name in names {
                let delta = &changes[name];
                let old: Vec<String> = delta.old.iter().map(ShiftId::to_string).collect();
                let new: Vec<String> = delta.new.iter().map(ShiftId::to_string).collect();
                println!("  {}: [{}] -> [{}]", name, old.join(", "), new.join(", "));
            }
        }
    }

    write_schedule_to_file(&outcome, &records, &topology, REPORT_FILE)?;
    let snapshot = serde_json::to_string_pretty(&outcome.schedule.by_volunteer)?;
    std::fs::write(SNAPSHOT_FILE, snapshot)?;
    println!("\nReport written to {}, snapshot to {}", REPORT_FILE, SNAPSHOT_FILE);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
