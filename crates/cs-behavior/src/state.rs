//! The activity state of one agent, collapsed into a single struct.
//!
//! The machine's position is the `(activity, place)` pair; everything else is
//! a small bag of timers and guards the transition function reads and writes.

use std::collections::VecDeque;
use std::fmt;

use cs_core::TimeOfDay;
use cs_spatial::GridPos;

/// What the agent is doing right now.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activity {
    /// Not in the venue; position is [`GridPos::OUTSIDE`].
    #[default]
    Outside,
    /// Following (or about to plan) a path to `place`.
    Moving,
    /// Standing still at, or stuck on the way to, `place`.
    Idle,
}

/// Where the agent is heading or staying.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Place {
    Entrance,
    /// A "BackHotspot" gathering area.
    Back,
    /// The student's assigned chair.
    Desk,
    /// The teacher's "Armchair".
    TeacherDesk,
    Whiteboard,
}

impl Place {
    pub fn as_str(self) -> &'static str {
        match self {
            Place::Entrance => "entrance",
            Place::Back => "back",
            Place::Desk => "desk",
            Place::TeacherDesk => "teacher_desk",
            Place::Whiteboard => "whiteboard",
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full per-agent activity state.
///
/// `Default` is the start-of-day state: outside, eligible to enter and to
/// take a break, with no pending path or timers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityState {
    pub activity: Activity,
    pub place:    Option<Place>,
    pub pos:      GridPos,
    /// Remaining cells to walk, current cell excluded.
    pub path:     VecDeque<GridPos>,
    /// Resolved goal cell for `place`, cleared whenever `place` changes.
    pub target:   Option<GridPos>,

    /// Morning entry still pending.
    pub restart:        bool,
    /// Break logic may still fire this hour.
    pub break_eligible: bool,

    /// Leave the desk for the back hotspot at this time.
    pub desk_delay_end:   Option<TimeOfDay>,
    /// Return from the back hotspot at this time.
    pub back_hotspot_end: Option<TimeOfDay>,
    /// Re-enter the venue at this time after stepping out on a break.
    pub resume_at:        Option<TimeOfDay>,

    /// Hour for which `lesson_place` was drawn.
    pub lesson_hour:  Option<u32>,
    /// Class-time place chosen for `lesson_hour` (teacher only).
    pub lesson_place: Option<Place>,
}

impl Default for ActivityState {
    fn default() -> Self {
        Self {
            activity: Activity::Outside,
            place: None,
            pos: GridPos::OUTSIDE,
            path: VecDeque::new(),
            target: None,
            restart: true,
            break_eligible: true,
            desk_delay_end: None,
            back_hotspot_end: None,
            resume_at: None,
            lesson_hour: None,
            lesson_place: None,
        }
    }
}

impl ActivityState {
    /// Start moving towards `place`, dropping any previous path and target.
    pub fn head_to(&mut self, place: Place) {
        self.activity = Activity::Moving;
        self.place = Some(place);
        self.path.clear();
        self.target = None;
    }

    /// Leave the venue: outside, no position, no path.
    pub fn leave_venue(&mut self) {
        self.activity = Activity::Outside;
        self.pos = GridPos::OUTSIDE;
        self.path.clear();
        self.target = None;
    }

    #[inline]
    pub fn is_outside(&self) -> bool {
        self.activity == Activity::Outside
    }

    #[inline]
    pub fn is_at(&self, place: Place) -> bool {
        self.place == Some(place)
    }
}
