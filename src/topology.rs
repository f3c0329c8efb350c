use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Stable identifier for one shift: a day index (1-based) plus a slot
/// position within that day (0-based, rendered as a letter).
///
/// The id is what gets persisted and compared across schedule regenerations;
/// day names and display times are labels only and may change without
/// invalidating stored ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShiftId {
    pub day: u8,
    pub slot: u8,
}

impl ShiftId {
    pub fn new(day: u8, slot: u8) -> Self {
        Self { day, slot }
    }

    /// The slot letter used in the rendered id (slot 0 -> 'A').
    pub fn slot_letter(&self) -> char {
        (b'A' + self.slot) as char
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}{}", self.day, self.slot_letter())
    }
}

impl FromStr for ShiftId {
    type Err = String;

    /// Parses ids of the form "D1A", "D12C". Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_uppercase();
        let rest = trimmed
            .strip_prefix('D')
            .ok_or_else(|| format!("shift id '{}' must start with 'D'", s))?;
        if rest.len() < 2 {
            return Err(format!("shift id '{}' is too short", s));
        }
        let (digits, letter) = rest.split_at(rest.len() - 1);
        let day: u8 = digits
            .parse()
            .map_err(|_| format!("shift id '{}' has an invalid day number", s))?;
        let letter = letter.chars().next().unwrap_or('?');
        if !letter.is_ascii_uppercase() {
            return Err(format!("shift id '{}' has an invalid slot letter", s));
        }
        if day == 0 {
            return Err(format!("shift id '{}' has day 0; days start at 1", s));
        }
        Ok(ShiftId {
            day,
            slot: letter as u8 - b'A',
        })
    }
}

impl Serialize for ShiftId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShiftId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// The static shift grid for one clinic season: `days` x `slots_per_day`
/// shifts, plus display metadata for rendering.
///
/// This is an injected value, not a global, so tests can run against a
/// smaller grid (e.g. 2 days x 2 slots) without touching shared state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftTopology {
    days: u8,
    slots_per_day: u8,
    day_labels: Vec<String>,
    /// (start, end) display times per slot. Display only; adjacency is
    /// decided by slot position, never by these strings.
    slot_times: Vec<(String, String)>,
}

impl ShiftTopology {
    pub fn new(
        day_labels: Vec<String>,
        slot_times: Vec<(String, String)>,
    ) -> Result<Self, ScheduleError> {
        if day_labels.is_empty() {
            return Err(ScheduleError::InvalidTopology(
                "at least one day is required".to_string(),
            ));
        }
        if slot_times.is_empty() {
            return Err(ScheduleError::InvalidTopology(
                "at least one slot per day is required".to_string(),
            ));
        }
        if day_labels.len() > u8::MAX as usize {
            return Err(ScheduleError::InvalidTopology(
                "too many days".to_string(),
            ));
        }
        // Slot letters run A..Z.
        if slot_times.len() > 26 {
            return Err(ScheduleError::InvalidTopology(
                "more than 26 slots per day is not supported".to_string(),
            ));
        }
        Ok(Self {
            days: day_labels.len() as u8,
            slots_per_day: slot_times.len() as u8,
            day_labels,
            slot_times,
        })
    }

    /// The standard clinic grid: 4 clinic days, 3 slots per day.
    pub fn clinic_default() -> Self {
        let day_labels = vec![
            "Saturday (Week 1)".to_string(),
            "Sunday (Week 1)".to_string(),
            "Saturday (Week 2)".to_string(),
            "Sunday (Week 2)".to_string(),
        ];
        let slot_times = vec![
            ("9:00".to_string(), "12:00".to_string()),
            ("12:00".to_string(), "15:00".to_string()),
            ("15:00".to_string(), "18:00".to_string()),
        ];
        Self::new(day_labels, slot_times).expect("default topology is well-formed")
    }

    pub fn days(&self) -> u8 {
        self.days
    }

    pub fn slots_per_day(&self) -> u8 {
        self.slots_per_day
    }

    pub fn shift_count(&self) -> usize {
        self.days as usize * self.slots_per_day as usize
    }

    /// All shift ids in (day, slot) order. Every loop whose iteration order
    /// can affect the output walks shifts in this order, which is what makes
    /// repeated runs reproducible.
    pub fn shift_ids(&self) -> Vec<ShiftId> {
        let mut ids = Vec::with_capacity(self.shift_count());
        for day in 1..=self.days {
            for slot in 0..self.slots_per_day {
                ids.push(ShiftId::new(day, slot));
            }
        }
        ids
    }

    pub fn contains(&self, id: ShiftId) -> bool {
        id.day >= 1 && id.day <= self.days && id.slot < self.slots_per_day
    }

    /// Two shifts are consecutive iff they fall on the same day in adjacent
    /// slot positions. Cross-day pairs are never consecutive.
    pub fn consecutive(&self, a: ShiftId, b: ShiftId) -> bool {
        a.day == b.day && a.slot.abs_diff(b.slot) == 1
    }

    pub fn is_final_day(&self, id: ShiftId) -> bool {
        id.day == self.days
    }

    pub fn day_label(&self, day: u8) -> &str {
        &self.day_labels[day as usize - 1]
    }

    pub fn day_labels(&self) -> &[String] {
        &self.day_labels
    }

    /// Display times for a shift's slot, e.g. ("9:00", "12:00").
    pub fn display_time(&self, id: ShiftId) -> (&str, &str) {
        let (start, end) = &self.slot_times[id.slot as usize];
        (start, end)
    }
}
