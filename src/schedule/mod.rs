mod balance;
mod chains;
mod minimums;
mod topup;

pub mod diff;
pub mod engine;
pub mod mentor;
pub mod types;

pub use diff::{diff_schedules, AssignmentDelta};
pub use engine::generate_schedule;
pub use mentor::{compute_mentor_teams, MentorDesignations, MentorTeams};
pub use types::{
    FilerShortfall, RoleTally, Schedule, ScheduleOutcome, ScheduleState, SchedulerOptions,
    Shortfall,
};
