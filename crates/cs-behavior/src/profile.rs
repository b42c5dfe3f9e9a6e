//! Agent identity: roster records and their validated form.

use cs_core::{AgentId, AgentTraits};
use cs_schedule::AgentSchedule;

use crate::BehaviorResult;

/// One roster entry exactly as the agent loader supplies it.
///
/// All categorical fields are raw strings; [`AgentProfile::from_record`]
/// validates them against the fixed trait tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentRecord {
    pub id:        u32,
    /// `HH:MM:SS`
    pub arrival:   String,
    /// `HH:MM:SS`
    pub leaving:   String,
    pub style:     String,
    pub behaviour: String,
    pub mask:      String,
    pub vaccine:   String,
}

/// Immutable, validated identity of a student or the teacher.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentProfile {
    pub id:       AgentId,
    pub schedule: AgentSchedule,
    pub traits:   AgentTraits,
}

impl AgentProfile {
    pub fn new(id: AgentId, schedule: AgentSchedule, traits: AgentTraits) -> Self {
        Self { id, schedule, traits }
    }

    /// Validate a roster record.  Unknown trait strings and malformed times
    /// are errors; nothing is silently defaulted.
    pub fn from_record(record: &AgentRecord) -> BehaviorResult<Self> {
        let schedule = AgentSchedule::parse(&record.arrival, &record.leaving)?;
        let traits = AgentTraits::parse(&record.style, &record.behaviour, &record.mask, &record.vaccine)?;
        Ok(Self::new(AgentId(record.id), schedule, traits))
    }
}

impl TryFrom<&AgentRecord> for AgentProfile {
    type Error = crate::BehaviorError;

    fn try_from(record: &AgentRecord) -> BehaviorResult<Self> {
        Self::from_record(record)
    }
}
