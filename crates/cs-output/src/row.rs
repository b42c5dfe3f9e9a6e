//! Plain data row types written by output backends.

use cs_behavior::AgentKind;
use cs_core::{TimeOfDay, Weekday};
use cs_epidemic::PandemicStatus;

/// SIQR totals at the end of one school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySiqrRow {
    pub week:        u32,
    pub weekday:     Weekday,
    /// Calendar-day index since the first Monday, weekends counted.
    pub day:         u32,
    pub susceptible: usize,
    pub infected:    usize,
    pub quarantined: usize,
    pub recovered:   usize,
}

/// One SIQR status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRow {
    pub agent_id: u32,
    pub role:     AgentKind,
    pub from:     PandemicStatus,
    pub to:       PandemicStatus,
    pub week:     u32,
    pub weekday:  Weekday,
    pub time:     TimeOfDay,
}
