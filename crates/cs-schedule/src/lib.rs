//! `cs-schedule`: the school-week timer and per-agent daily schedules.
//!
//! # Crate layout
//!
//! | Module             | Contents                                           |
//! |--------------------|----------------------------------------------------|
//! | [`timer`]          | `Timer` (week, weekday, time of day, finished)     |
//! | [`agent_schedule`] | `AgentSchedule` (arrival / leaving time of day)    |
//! | [`error`]          | `ScheduleError`, `ScheduleResult<T>`               |
//!
//! # Day model (summary)
//!
//! ```text
//! daily_start ──tick──tick── … ──tick──▶ ≥ daily_end
//!                                           │
//!                     check_finished(): next school day, time = daily_start
//!                     (Friday → Monday, week += 1; finished once week > num_weeks)
//! ```

pub mod agent_schedule;
pub mod error;
pub mod timer;

#[cfg(test)]
mod tests;

pub use agent_schedule::AgentSchedule;
pub use error::{ScheduleError, ScheduleResult};
pub use timer::Timer;
