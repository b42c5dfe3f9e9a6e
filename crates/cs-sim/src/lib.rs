//! `cs-sim`: scene orchestrator for the classroom_sim engine.
//!
//! # Tick sequence
//!
//! ```text
//! step():
//!   ① Day start  time == daily_start: reset every agent's activity state,
//!                then morning check (quarantine expiry, baseline infection).
//!   ② Agents     students in roster order, then the teacher:
//!                exposure → shedding (buffered) → symptoms → movement.
//!   ③ Shedding   buffered deposits applied to the spread field.
//!   ④ Day end    last tick of the day: end-of-day test, quarantined agents
//!                leave the venue.
//!   ⑤ Spread     one decay/diffusion pass.
//!   ⑥ Timer      tick + check_finished; new school day ⇒ field reset.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`builder`]  | `SceneBuilder` (validation, venue rasterization)    |
//! | [`scene`]    | `Scene` (the per-tick sequence, accessors)          |
//! | [`observer`] | `SceneObserver` hooks, `NoopObserver`               |
//! | [`counts`]   | `SiqrCounts`                                        |
//! | [`error`]    | `SimError`, `SimResult<T>`                          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cs_core::EngineConfig;
//! use cs_sim::{NoopObserver, SceneBuilder};
//!
//! let mut scene = SceneBuilder::new(EngineConfig::default())
//!     .placeables(placeables)
//!     .student_records(&records)?
//!     .build()?;
//! scene.run(&mut NoopObserver);
//! println!("{}", scene.siqr_counts());
//! ```

pub mod builder;
pub mod counts;
pub mod error;
pub mod observer;
pub mod scene;


pub use builder::SceneBuilder;
pub use counts::SiqrCounts;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SceneObserver};
pub use scene::Scene;
