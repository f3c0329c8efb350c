use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("no volunteer availability data found - cannot generate schedule")]
    NoVolunteers,

    #[error("invalid shift topology: {0}")]
    InvalidTopology(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
