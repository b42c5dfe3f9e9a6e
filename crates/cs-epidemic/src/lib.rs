//! `cs-epidemic`: environmental spread and per-agent disease progression.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`spread`]     | `SpreadField` (decay + diffusion), buffered `Deposit`s        |
//! | [`pandemic`]   | `PandemicStatus`, `PandemicState` (SIQR state machine)        |
//! | [`exposure`]   | load → infection probability, shedding amount                 |
//! | [`error`]      | `EpidemicError`, `EpidemicResult<T>`                          |
//!
//! # Coupling
//!
//! Agents read the field (exposure) and write to it (shedding); the field
//! itself knows nothing about agents.  The pandemic state never reads the
//! field either: the behaviour layer computes a probability with
//! [`exposure::infection_probability`], draws, and calls
//! [`PandemicState::become_infected`] on success.

pub mod error;
pub mod exposure;
pub mod pandemic;
pub mod spread;


pub use error::{EpidemicError, EpidemicResult};
pub use exposure::{infection_probability, shedding_amount};
pub use pandemic::{PandemicState, PandemicStatus};
pub use spread::{Deposit, SpreadField};
