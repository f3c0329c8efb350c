pub mod display;
pub mod error;
pub mod parser;
pub mod roles;
pub mod schedule;
pub mod topology;

pub use error::{ScheduleError, ScheduleResult};
pub use parser::{load_volunteers, VolunteerRecord};
pub use roles::RoleCategory;
pub use schedule::{
    compute_mentor_teams, diff_schedules, generate_schedule, Schedule, ScheduleOutcome,
    SchedulerOptions,
};
pub use topology::{ShiftId, ShiftTopology};
