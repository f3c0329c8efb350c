use csv::Reader;
use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleResult;
use crate::roles::RoleCategory;
use crate::topology::{ShiftId, ShiftTopology};

/// Hard upper bound on how many shifts one volunteer may request.
pub const MAX_SHIFTS_LIMIT: u32 = 12;

/// One volunteer's signup, already normalized: role text classified, shift
/// ids validated against the topology, availability sorted and deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_text: String,
    pub role: RoleCategory,
    pub max_shifts: u32,
    pub prefer_consecutive: bool,
    pub available: Vec<ShiftId>,
}

impl VolunteerRecord {
    /// Full name is the de facto primary key within one scheduling run.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Parses a boolean value from various string representations
fn parse_bool(value: &str) -> bool {
    let lower = value.trim().to_lowercase();
    lower == "yes" || lower == "true" || lower == "1"
}

/// Parses a number, returning 0 if empty or invalid
fn parse_number(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

/// Parses a comma-delimited shift-id string ("D1A, D1B, D2C") against the
/// topology. Unrecognized or out-of-grid tokens are dropped with a warning;
/// duplicates collapse. The result is sorted in (day, slot) order.
pub fn parse_shift_list(raw: &str, topology: &ShiftTopology) -> Vec<ShiftId> {
    let mut shifts: Vec<ShiftId> = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<ShiftId>() {
            Ok(id) if topology.contains(id) => {
                if !shifts.contains(&id) {
                    shifts.push(id);
                }
            }
            Ok(id) => {
                log::warn!("dropping shift id '{}' outside the clinic grid", id);
            }
            Err(err) => {
                log::warn!("dropping unrecognized shift token '{}': {}", token, err);
            }
        }
    }
    shifts.sort();
    shifts
}

/// Loads volunteer availability records from a signup-form CSV export.
///
/// Column positions are resolved by header keyword with indexed fallbacks,
/// since form exports occasionally reorder or reword columns. Resubmissions
/// (same full name appearing again later in the file) replace the earlier
/// record wholesale. Records with no valid availability or a zero shift
/// count are excluded from scheduling entirely.
pub fn load_volunteers<P: AsRef<Path>>(
    csv_path: P,
    topology: &ShiftTopology,
) -> ScheduleResult<Vec<VolunteerRecord>> {
    let mut reader = Reader::from_path(csv_path)?;

    let headers = reader.headers()?;
    let first_name_col = headers
        .iter()
        .position(|h| h.to_lowercase().contains("first name"))
        .unwrap_or(1);
    let last_name_col = headers
        .iter()
        .position(|h| h.to_lowercase().contains("last name"))
        .unwrap_or(2);
    let email_col = headers
        .iter()
        .position(|h| h.to_lowercase().contains("email"))
        .unwrap_or(3);
    let role_col = headers
        .iter()
        .position(|h| h.to_lowercase().contains("role"))
        .unwrap_or(4);
    let max_shifts_col = headers
        .iter()
        .position(|h| h.to_lowercase().contains("how many shifts"))
        .unwrap_or(5);
    let consecutive_col = headers
        .iter()
        .position(|h| h.to_lowercase().contains("consecutive"))
        .unwrap_or(6);
    let availability_col = headers
        .iter()
        .position(|h| h.to_lowercase().contains("available"))
        .unwrap_or(7);

    // Keyed by full name so a resubmission replaces the earlier row.
    let mut records_map: HashMap<String, VolunteerRecord> = HashMap::new();
    // Preserve first-seen order; map iteration order is not stable.
    let mut order: Vec<String> = Vec::new();

    for result in reader.records() {
        let record = result?;

        let first_name = record.get(first_name_col).unwrap_or("").trim().to_string();
        let last_name = record.get(last_name_col).unwrap_or("").trim().to_string();
        if first_name.is_empty() && last_name.is_empty() {
            continue;
        }
        let email = record.get(email_col).unwrap_or("").trim().to_string();
        let role_text = record.get(role_col).unwrap_or("").trim().to_string();
        let role = RoleCategory::classify(&role_text);

        let mut max_shifts = parse_number(record.get(max_shifts_col).unwrap_or(""));
        if max_shifts > MAX_SHIFTS_LIMIT {
            log::warn!(
                "{} {} requested {} shifts; clamping to {}",
                first_name,
                last_name,
                max_shifts,
                MAX_SHIFTS_LIMIT
            );
            max_shifts = MAX_SHIFTS_LIMIT;
        }

        let prefer_consecutive = parse_bool(record.get(consecutive_col).unwrap_or(""));
        let available = parse_shift_list(record.get(availability_col).unwrap_or(""), topology);

        let entry = VolunteerRecord {
            first_name,
            last_name,
            email,
            role_text,
            role,
            max_shifts,
            prefer_consecutive,
            available,
        };
        let key = entry.full_name();
        if records_map.insert(key.clone(), entry).is_some() {
            log::debug!("resubmission from {}; earlier record replaced", key);
        } else {
            order.push(key);
        }
    }

    let mut records = Vec::with_capacity(order.len());
    for key in order {
        let entry = records_map
            .remove(&key)
            .expect("every ordered key has a record");
        if entry.max_shifts == 0 {
            log::warn!("excluding {}: requested shift count is zero", key);
            continue;
        }
        if entry.available.is_empty() {
            log::warn!("excluding {}: no valid availability", key);
            continue;
        }
        records.push(entry);
    }

    Ok(records)
}
