//! `cs-output`: simulation output writers for the classroom_sim engine.
//!
//! | File               | Written                | Columns                                                     |
//! |--------------------|------------------------|-------------------------------------------------------------|
//! | `daily_siqr.csv`   | once per school day    | `week,weekday,day,susceptible,infected,quarantined,recovered` |
//! | `transitions.csv`  | once per status change | `agent_id,role,from,to,week,weekday,time`                   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SceneOutputObserver`], which implements `cs_sim::SceneObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cs_output::{CsvWriter, SceneOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SceneOutputObserver::new(writer);
//! scene.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SceneOutputObserver;
pub use row::{DailySiqrRow, TransitionRow};
pub use writer::OutputWriter;
