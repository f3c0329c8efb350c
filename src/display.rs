use std::fs::File;
use std::io::Write;

use crate::error::ScheduleResult;
use crate::parser::VolunteerRecord;
use crate::schedule::{MentorTeams, ScheduleOutcome};
use crate::topology::{ShiftId, ShiftTopology};

/// Formats a volunteer name with a short role tag, e.g. "Ada Park (filer)".
pub fn format_volunteer(name: &str, records: &[VolunteerRecord]) -> String {
    match records.iter().find(|rec| rec.full_name() == name) {
        Some(rec) => format!("{} ({})", name, rec.role.label()),
        None => name.to_string(),
    }
}

/// Prints the generated schedule in a readable per-day grid, followed by
/// staffing warnings. Warnings are rendered distinctly from hard errors:
/// a shortfall means the schedule stands but a shift is thin.
pub fn print_schedule(
    outcome: &ScheduleOutcome,
    records: &[VolunteerRecord],
    topology: &ShiftTopology,
) {
    println!("\n=== Clinic Shift Schedule ===");
    for day in 1..=topology.days() {
        println!("\n{}", topology.day_label(day));
        for slot in 0..topology.slots_per_day() {
            let shift = ShiftId::new(day, slot);
            let (start, end) = topology.display_time(shift);
            let roster = outcome
                .schedule
                .by_shift
                .get(&shift)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            if roster.is_empty() {
                println!("  {} {}-{}  [OPEN]", shift, start, end);
            } else {
                let names: Vec<String> = roster
                    .iter()
                    .map(|name| format_volunteer(name, records))
                    .collect();
                println!("  {} {}-{}  {}", shift, start, end, names.join(", "));
            }
        }
    }

    if !outcome.shortfalls.is_empty() {
        println!(
            "\n⚠️  {} shifts below target staffing:",
            outcome.shortfalls.len()
        );
        for shortfall in &outcome.shortfalls {
            println!(
                "  - {}: {} {}/{}",
                shortfall.shift, shortfall.role, shortfall.actual, shortfall.target
            );
        }
    }
    if !outcome.filer_below_target.is_empty() {
        println!(
            "\n⚠️  {} filers below their shift target:",
            outcome.filer_below_target.len()
        );
        for shortfall in &outcome.filer_below_target {
            println!(
                "  - {}: {}/{} shifts",
                shortfall.volunteer, shortfall.actual, shortfall.target
            );
        }
    }
}

/// Prints the mentor-team pairings, day by day.
pub fn print_mentor_teams(teams: &MentorTeams, topology: &ShiftTopology) {
    println!("\n=== Mentor Teams ===");
    for label in topology.day_labels() {
        let Some(day_teams) = teams.get(label) else {
            continue;
        };
        if day_teams.is_empty() {
            continue;
        }
        println!("\n{}", label);
        let mut names: Vec<&String> = day_teams.keys().collect();
        names.sort();
        for name in names {
            match &day_teams[name] {
                Some(senior) => println!("  {} -> {}", name, senior),
                None => println!("  {} -> (unassigned)", name),
            }
        }
    }
}

/// Writes the schedule grid to a file in the same per-day format the
/// terminal report uses, with a generated-at stamp in the header.
pub fn write_schedule_to_file(
    outcome: &ScheduleOutcome,
    records: &[VolunteerRecord],
    topology: &ShiftTopology,
    filename: &str,
) -> ScheduleResult<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "** Clinic Shift Schedule **")?;
    writeln!(
        file,
        "Generated {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    )?;

    for day in 1..=topology.days() {
        writeln!(file, "\n{}", topology.day_label(day))?;
        for slot in 0..topology.slots_per_day() {
            let shift = ShiftId::new(day, slot);
            let (start, end) = topology.display_time(shift);
            let roster = outcome
                .schedule
                .by_shift
                .get(&shift)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            if roster.is_empty() {
                writeln!(file, "{} {}-{} [OPEN]", shift, start, end)?;
            } else {
                let names: Vec<String> = roster
                    .iter()
                    .map(|name| format_volunteer(name, records))
                    .collect();
                writeln!(file, "{} {}-{} {}", shift, start, end, names.join(", "))?;
            }
        }
    }

    for shortfall in &outcome.shortfalls {
        writeln!(
            file,
            "WARNING {}: {} {}/{}",
            shortfall.shift, shortfall.role, shortfall.actual, shortfall.target
        )?;
    }

    Ok(())
}
