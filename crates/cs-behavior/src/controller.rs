//! The daily-activity transition function.
//!
//! # Machine
//!
//! | Activity  | Behaviour per tick                                                          |
//! |-----------|-----------------------------------------------------------------------------|
//! | `Outside` | at arrival time (or when a break excursion ends) spawn on the Entrance      |
//! | `Moving`  | plan a path if none (this consumes the tick), else take exactly one step    |
//! | `Idle`    | at the Entrance: leave; past leaving time: walk out; else break/class logic |
//!
//! Break logic runs from minute [`BREAK_MINUTE`] of each hour and fires at
//! most once per hour.  Class logic runs below that minute and sends the
//! agent back to its class place.
//!
//! [`advance`] owns no state: it takes the current [`ActivityState`] by value
//! and returns the next one with the events it produced, so it can be tested
//! without a scene.

use cs_core::{AgentRng, TimeOfDay};
use cs_spatial::{roles, GridPos, PathFinder};

use crate::{Activity, ActivityState, AgentProfile, Place, Role, Venue};

/// Minute of the hour from which break logic applies.
pub const BREAK_MINUTE: u32 = 50;

/// Upper bound of the sampled delay before a student leaves the desk.
pub const MAX_DESK_DELAY_MINUTES: f64 = 5.0;

/// Chance that the teacher steps out of the room rather than visiting the
/// back hotspot once it decides to take a break.
pub const TEACHER_EXIT_PROBABILITY: f64 = 0.5;

/// Break durations are Gamma(shape 2, scale 1) minutes.
const BREAK_GAMMA_SHAPE: f64 = 2.0;
const BREAK_GAMMA_SCALE: f64 = 1.0;

// ── Inputs and outputs ────────────────────────────────────────────────────────

/// Everything the transition reads besides the state itself.
pub struct StepInput<'a, P: PathFinder + ?Sized> {
    pub now:        TimeOfDay,
    pub role:       Role,
    pub profile:    &'a AgentProfile,
    pub venue:      &'a Venue,
    pub pathfinder: &'a P,
}

/// Something observable that happened during one transition.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityEvent {
    /// Entered the venue at an Entrance sub-cell.
    Spawned { at: GridPos },
    /// Started moving towards `place`.
    HeadingTo { place: Place },
    /// A path of `steps` moves to `to` was planned.
    PathPlanned { to: GridPos, steps: usize },
    /// `place` could not be resolved to a cell (`to == None`) or reached.
    Unreachable { place: Option<Place>, to: Option<GridPos> },
    /// Reached the end of the path.
    Arrived { place: Option<Place>, at: GridPos },
    /// Walked out through the Entrance.
    LeftVenue,
    /// Will get up from the desk at `leave_at`.
    BreakScheduled { leave_at: TimeOfDay },
    /// Stepped out of the room; re-enters at `back_at`.
    SteppedOut { back_at: TimeOfDay },
}

/// The result of [`advance`].
#[derive(Debug, Clone)]
pub struct Transition {
    pub state:  ActivityState,
    pub events: Vec<ActivityEvent>,
}

// ── Transition ────────────────────────────────────────────────────────────────

/// Advance one agent's activity machine by one tick.
pub fn advance<P: PathFinder + ?Sized>(
    state: ActivityState,
    input: &StepInput<'_, P>,
    rng: &mut AgentRng,
) -> Transition {
    let mut s = state;
    let mut events = Vec::new();

    if !s.break_eligible && input.now.minute() < BREAK_MINUTE {
        s.break_eligible = true;
    }

    match s.activity {
        Activity::Outside => enter(&mut s, input, rng, &mut events),
        Activity::Moving => walk(&mut s, input, rng, &mut events),
        Activity::Idle => idle(&mut s, input, rng, &mut events),
    }

    Transition { state: s, events }
}

fn head_to(s: &mut ActivityState, place: Place, events: &mut Vec<ActivityEvent>) {
    s.head_to(place);
    events.push(ActivityEvent::HeadingTo { place });
}

// ── Outside ───────────────────────────────────────────────────────────────────

fn enter<P: PathFinder + ?Sized>(
    s: &mut ActivityState,
    input: &StepInput<'_, P>,
    rng: &mut AgentRng,
    events: &mut Vec<ActivityEvent>,
) {
    let schedule = &input.profile.schedule;
    let due = if s.restart {
        schedule.has_arrived(input.now)
    } else {
        s.resume_at.is_some_and(|t| input.now >= t) && !schedule.should_leave(input.now)
    };
    if !due {
        return;
    }
    // No entrance: nowhere to spawn, try again next tick.
    let Some(cell) = input.venue.random_cell_in(roles::ENTRANCE, rng) else {
        return;
    };

    s.restart = false;
    s.resume_at = None;
    s.pos = cell;
    events.push(ActivityEvent::Spawned { at: cell });
    head_to(s, input.role.arrival_place(), events);
}

// ── Moving ────────────────────────────────────────────────────────────────────

fn walk<P: PathFinder + ?Sized>(
    s: &mut ActivityState,
    input: &StepInput<'_, P>,
    rng: &mut AgentRng,
    events: &mut Vec<ActivityEvent>,
) {
    if let Some(next) = s.path.pop_front() {
        s.pos = next;
        if s.path.is_empty() {
            s.activity = Activity::Idle;
            events.push(ActivityEvent::Arrived { place: s.place, at: next });
        }
        return;
    }

    if s.target.is_none() {
        s.target = s.place.and_then(|place| resolve_target(place, input.role, input.venue, rng));
    }
    let Some(goal) = s.target else {
        s.activity = Activity::Idle;
        events.push(ActivityEvent::Unreachable { place: s.place, to: None });
        return;
    };

    match input.pathfinder.find_path(input.venue.grid(), s.pos, goal) {
        Err(_) => {
            s.activity = Activity::Idle;
            events.push(ActivityEvent::Unreachable { place: s.place, to: Some(goal) });
        }
        Ok(route) => {
            let steps = route.into_steps();
            if steps.is_empty() {
                s.activity = Activity::Idle;
                events.push(ActivityEvent::Arrived { place: s.place, at: s.pos });
            } else {
                events.push(ActivityEvent::PathPlanned { to: goal, steps: steps.len() });
                s.path = steps.into();
            }
        }
    }
}

/// The cell an agent walks to for `place`, or `None` if the venue has no
/// matching placeable.
pub fn resolve_target(place: Place, role: Role, venue: &Venue, rng: &mut AgentRng) -> Option<GridPos> {
    let scale = venue.scale();
    match place {
        Place::Desk => match role {
            Role::Student { chair_index } => venue.chair(chair_index).map(|c| c.anchor_cell(scale)),
            Role::Teacher => None,
        },
        Place::TeacherDesk => venue.first(roles::ARMCHAIR).map(|p| p.anchor_cell(scale)),
        Place::Whiteboard => venue.first(roles::WHITEBOARD).map(|p| p.front_cell(scale)),
        Place::Back => venue.random_cell_in(roles::BACK_HOTSPOT, rng),
        Place::Entrance => venue.random_cell_in(roles::ENTRANCE, rng),
    }
}

// ── Idle ──────────────────────────────────────────────────────────────────────

fn idle<P: PathFinder + ?Sized>(
    s: &mut ActivityState,
    input: &StepInput<'_, P>,
    rng: &mut AgentRng,
    events: &mut Vec<ActivityEvent>,
) {
    let now = input.now;

    if s.is_at(Place::Entrance) {
        s.leave_venue();
        events.push(ActivityEvent::LeftVenue);
        return;
    }

    if input.profile.schedule.should_leave(now) {
        s.desk_delay_end = None;
        s.back_hotspot_end = None;
        head_to(s, Place::Entrance, events);
        return;
    }

    match input.role {
        Role::Student { .. } => student_break(s, input, rng, events),
        Role::Teacher => teacher_break(s, input, rng, events),
    }

    if s.is_at(Place::Back) && s.back_hotspot_end.is_some_and(|t| now >= t) {
        s.back_hotspot_end = None;
        let place = current_class_place(s, input.role);
        head_to(s, place, events);
    }

    if now.minute() < BREAK_MINUTE {
        let place = class_place(s, input, rng);
        if !s.is_at(place) {
            head_to(s, place, events);
        }
    }
}

fn student_break<P: PathFinder + ?Sized>(
    s: &mut ActivityState,
    input: &StepInput<'_, P>,
    rng: &mut AgentRng,
    events: &mut Vec<ActivityEvent>,
) {
    let now = input.now;

    if now.minute() >= BREAK_MINUTE && !s.is_at(Place::Back) && s.break_eligible {
        s.break_eligible = false;
        if rng.draw_below(input.profile.traits.behaviour.value()) {
            let wait = break_minutes(rng, MAX_DESK_DELAY_MINUTES);
            let leave_at = now.plus_minutes(wait);
            s.desk_delay_end = Some(leave_at);
            s.back_hotspot_end = None;
            events.push(ActivityEvent::BreakScheduled { leave_at });
        }
    }

    if s.desk_delay_end.is_some_and(|t| now >= t) {
        let stay = break_minutes(rng, minutes_left_in_hour(now));
        s.back_hotspot_end = Some(now.plus_minutes(stay));
        s.desk_delay_end = None;
        head_to(s, Place::Back, events);
    }
}

fn teacher_break<P: PathFinder + ?Sized>(
    s: &mut ActivityState,
    input: &StepInput<'_, P>,
    rng: &mut AgentRng,
    events: &mut Vec<ActivityEvent>,
) {
    let now = input.now;
    if now.minute() < BREAK_MINUTE || s.is_at(Place::Back) || !s.break_eligible {
        return;
    }
    s.break_eligible = false;
    if !rng.draw_below(input.profile.traits.behaviour.value()) {
        return;
    }

    let until = now.plus_minutes(break_minutes(rng, minutes_left_in_hour(now)));
    if input.venue.has(roles::ENTRANCE) && rng.draw_below(TEACHER_EXIT_PROBABILITY) {
        s.resume_at = Some(until);
        events.push(ActivityEvent::SteppedOut { back_at: until });
        head_to(s, Place::Entrance, events);
    } else {
        s.back_hotspot_end = Some(until);
        head_to(s, Place::Back, events);
    }
}

/// Class-time place for this hour.  The teacher draws whiteboard vs. desk
/// once per hour, weighted by `style`.
fn class_place<P: PathFinder + ?Sized>(
    s: &mut ActivityState,
    input: &StepInput<'_, P>,
    rng: &mut AgentRng,
) -> Place {
    if let Role::Teacher = input.role {
        let hour = input.now.hour();
        if s.lesson_hour != Some(hour) {
            let board = input.venue.has(roles::WHITEBOARD)
                && rng.draw_below(input.profile.traits.style.value());
            s.lesson_hour = Some(hour);
            s.lesson_place = Some(if board { Place::Whiteboard } else { Place::TeacherDesk });
        }
    }
    current_class_place(s, input.role)
}

fn current_class_place(s: &ActivityState, role: Role) -> Place {
    match role {
        Role::Student { .. } => Place::Desk,
        Role::Teacher => s.lesson_place.unwrap_or(Place::TeacherDesk),
    }
}

#[inline]
fn minutes_left_in_hour(now: TimeOfDay) -> f64 {
    (60 - now.minute()) as f64
}

/// Gamma-distributed break length in minutes, capped at `max`.
fn break_minutes(rng: &mut AgentRng, max: f64) -> f64 {
    rng.gamma_with_mean(BREAK_GAMMA_SHAPE, BREAK_GAMMA_SHAPE * BREAK_GAMMA_SCALE)
        .min(max)
}
