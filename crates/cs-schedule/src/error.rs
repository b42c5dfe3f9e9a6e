use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("invalid schedule: {0}")]
    Config(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
