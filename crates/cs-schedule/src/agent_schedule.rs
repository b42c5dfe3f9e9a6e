//! Per-agent daily attendance window.

use cs_core::TimeOfDay;

use crate::{ScheduleError, ScheduleResult};

/// When an agent arrives at and leaves the venue each school day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSchedule {
    pub arrival: TimeOfDay,
    pub leaving: TimeOfDay,
}

impl AgentSchedule {
    pub fn new(arrival: TimeOfDay, leaving: TimeOfDay) -> ScheduleResult<Self> {
        if arrival > leaving {
            return Err(ScheduleError::Config(format!(
                "arrival {arrival} is after leaving {leaving}"
            )));
        }
        Ok(Self { arrival, leaving })
    }

    /// Parse the roster's `HH:MM:SS` strings (`HH:MM` is also accepted).
    pub fn parse(arrival: &str, leaving: &str) -> ScheduleResult<Self> {
        let parse = |s: &str| {
            s.parse::<TimeOfDay>()
                .map_err(|e| ScheduleError::Parse(e.to_string()))
        };
        Self::new(parse(arrival)?, parse(leaving)?)
    }

    /// `true` once the agent is due in the venue.
    #[inline]
    pub fn has_arrived(&self, now: TimeOfDay) -> bool {
        now >= self.arrival
    }

    /// `true` once the agent is due to leave.
    #[inline]
    pub fn should_leave(&self, now: TimeOfDay) -> bool {
        now >= self.leaving
    }
}
