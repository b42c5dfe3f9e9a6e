use thiserror::Error;

use cs_core::CoreError;
use cs_schedule::ScheduleError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
