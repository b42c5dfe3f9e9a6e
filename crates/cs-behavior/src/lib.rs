//! `cs-behavior`: who the agents are and what they do each tick.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                         |
//! |----------------|------------------------------------------------------------------|
//! | [`profile`]    | `AgentRecord` (roster strings), `AgentProfile` (validated)       |
//! | [`role`]       | `Role` (student with chair / teacher), `AgentKind`               |
//! | [`venue`]      | `Venue`: placeables + occupancy grid + role lookups              |
//! | [`state`]      | `Activity`, `Place`, `ActivityState`                             |
//! | [`controller`] | `advance` (pure activity transition), `ActivityEvent`            |
//! | [`agent`]      | `Agent`: profile + activity + pandemic state + RNG, `StatusChange` |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                             |
//!
//! # Design notes
//!
//! The activity machine is one function, [`controller::advance`], taking the
//! state by value and returning the next state plus the events it produced.
//! It never touches the spread field or the pandemic state; [`Agent::tick`]
//! does the epidemic half of the tick (exposure, shedding, symptom onset)
//! and then delegates movement to `advance`.
//!
//! Shedding is returned as buffered [`Deposit`](cs_epidemic::Deposit)s rather
//! than written to the field, so every agent in a tick reads the field as it
//! was at the start of that tick.

pub mod agent;
pub mod controller;
pub mod error;
pub mod profile;
pub mod role;
pub mod state;
pub mod venue;

#[cfg(test)]
mod tests;

pub use agent::{spread_footprint, Agent, StatusChange, TickContext};
pub use controller::{advance, resolve_target, ActivityEvent, StepInput, Transition};
pub use error::{BehaviorError, BehaviorResult};
pub use profile::{AgentProfile, AgentRecord};
pub use role::{AgentKind, Role};
pub use state::{Activity, ActivityState, Place};
pub use venue::Venue;
