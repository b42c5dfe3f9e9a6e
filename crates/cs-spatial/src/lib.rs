//! `cs-spatial`: venue geometry, occupancy grid, and pathfinding.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`placeable`]   | `Shape`, `Placeable`, role names (`roles::ENTRANCE`, …)     |
//! | [`grid`]        | `GridPos`, `GridScale`, `OccupancyGrid` (+ builder)         |
//! | [`pathfinder`]  | `PathFinder` trait, `Route`, `AStarPathFinder`              |
//! | [`error`]       | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Coordinates
//!
//! Placeables are positioned in **tile** units.  The occupancy grid subdivides
//! each tile into `map_density × map_density` sub-cells; every agent position
//! and path step is a sub-cell `GridPos { col, row }`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod pathfinder;
pub mod placeable;


pub use error::{SpatialError, SpatialResult};
pub use grid::{GridPos, GridScale, OccupancyGrid};
pub use pathfinder::{AStarPathFinder, PathFinder, Route, SearchStats};
pub use placeable::{roles, Placeable, Shape};
