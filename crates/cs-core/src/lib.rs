//! `cs-core`: foundational types for the `classroom_sim` engine.
//!
//! This crate is a dependency of every other `cs-*` crate.  It has no `cs-*`
//! dependencies and minimal external ones (`rand`, `rand_distr`, and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                                  |
//! | [`time`]        | `TimeOfDay`, `SimInstant`, `Weekday`                       |
//! | [`rng`]         | `AgentRng` (per-agent, teacher-salted variant)             |
//! | [`traits`]      | `Style`, `Behaviour`, `Mask`, `Vaccine`, `AgentTraits`     |
//! | [`config`]      | `EngineConfig`, `SpreadParams`, `DiseaseParams`            |
//! | [`error`]       | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod traits;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DiseaseParams, EngineConfig, SpreadParams};
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use rng::AgentRng;
pub use time::{SimInstant, TimeOfDay, Weekday, SECS_PER_DAY};
pub use traits::{AgentTraits, Behaviour, Mask, Style, Vaccine};
