//! What distinguishes a student from the teacher.

use std::fmt;

use crate::Place;

/// Per-role data and policy switches for the activity machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Sits at the `chair_index`-th "Chair" placeable.
    Student { chair_index: usize },
    /// Uses the "Armchair" or the "Whiteboard"; may leave the room on a break.
    Teacher,
}

impl Role {
    #[inline]
    pub fn kind(self) -> AgentKind {
        match self {
            Role::Student { .. } => AgentKind::Student,
            Role::Teacher => AgentKind::Teacher,
        }
    }

    /// Where the agent goes after spawning at the entrance.
    #[inline]
    pub fn arrival_place(self) -> Place {
        match self {
            Role::Student { .. } => Place::Back,
            Role::Teacher => Place::TeacherDesk,
        }
    }
}

/// Role without its data, for reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Student,
    Teacher,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Student => "student",
            AgentKind::Teacher => "teacher",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
