//! Occupancy grid and its rasterizing builder.
//!
//! # Data layout
//!
//! The grid is a flat row-major `Vec<bool>` of `rows × cols` sub-cells, where
//! `rows = tiles_y × map_density` and `cols = tiles_x × map_density`.
//! `true` means blocked.  A cell is blocked iff it lies in the rasterized
//! footprint of a placeable whose `collision` flag is set.
//!
//! The grid is built once at scene setup and never mutated afterwards, so it
//! is shared read-only by every agent's path query.

use std::fmt;

use crate::Placeable;

// ── GridPos ───────────────────────────────────────────────────────────────────

/// A sub-cell position.  Signed so that neighbour arithmetic near the border
/// and the "outside the venue" sentinel need no special casing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

impl GridPos {
    /// Sentinel for an agent that is not inside the venue.
    pub const OUTSIDE: GridPos = GridPos { col: -1, row: -1 };

    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    #[inline]
    pub fn is_outside(self) -> bool {
        self == GridPos::OUTSIDE
    }

    /// Manhattan distance, the A* heuristic for 4-connected movement.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }

    /// North, south, east, west neighbours (may be out of bounds).
    #[inline]
    pub fn neighbours4(self) -> [GridPos; 4] {
        [
            GridPos::new(self.col, self.row + 1),
            GridPos::new(self.col, self.row - 1),
            GridPos::new(self.col + 1, self.row),
            GridPos::new(self.col - 1, self.row),
        ]
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

// ── GridScale ─────────────────────────────────────────────────────────────────

/// Tile size and subdivision needed to turn tile coordinates into sub-cells.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridScale {
    /// Pixels per tile edge.  Only used for the conventional circle radius.
    pub tile_size:   u32,
    /// Sub-cells per tile edge.
    pub map_density: u32,
}

impl GridScale {
    #[inline]
    pub fn density(self) -> f64 {
        self.map_density as f64
    }

    /// Conventional circle radius in tile units when a circle carries none.
    #[inline]
    pub fn default_circle_radius(self) -> f64 {
        self.tile_size as f64 / 2.5
    }
}

// ── OccupancyGrid ─────────────────────────────────────────────────────────────

/// Immutable boolean occupancy grid.  Construct with [`OccupancyGrid::build`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    rows:    usize,
    cols:    usize,
    blocked: Vec<bool>,
}

impl OccupancyGrid {
    /// An all-free grid.  Useful for tests and for obstacle-free arenas.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self { rows, cols, blocked: vec![false; rows * cols] }
    }

    /// Rasterize every collision-enabled placeable into a `rows × cols` grid.
    ///
    /// Footprint cells that fall outside the grid are silently clipped;
    /// degenerate shapes (zero width/height, fewer than three polygon
    /// vertices) contribute nothing.
    pub fn build(placeables: &[Placeable], rows: usize, cols: usize, scale: GridScale) -> Self {
        let mut grid = Self::empty(rows, cols);
        for p in placeables.iter().filter(|p| p.collision()) {
            for cell in p.footprint(scale) {
                grid.mark_blocked(cell);
            }
        }
        grid
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.row >= 0 && pos.col >= 0 && (pos.row as usize) < self.rows && (pos.col as usize) < self.cols
    }

    /// Flat index of an in-bounds cell.
    #[inline]
    pub fn index_of(&self, pos: GridPos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.row as usize * self.cols + pos.col as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn pos_of(&self, index: usize) -> GridPos {
        GridPos::new((index % self.cols) as i32, (index / self.cols) as i32)
    }

    /// `true` if the cell is blocked.  Out-of-bounds cells count as blocked.
    #[inline]
    pub fn is_blocked(&self, pos: GridPos) -> bool {
        self.index_of(pos).is_none_or(|i| self.blocked[i])
    }

    /// `true` if the cell is in bounds and walkable.
    #[inline]
    pub fn is_free(&self, pos: GridPos) -> bool {
        !self.is_blocked(pos)
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    fn mark_blocked(&mut self, pos: GridPos) {
        if let Some(i) = self.index_of(pos) {
            self.blocked[i] = true;
        }
    }
}
