//! Pathfinding trait and default A* implementation.
//!
//! # Pluggability
//!
//! The behaviour controller only sees the [`PathFinder`] trait, so a scene can
//! swap in a different search (jump-point search, cached flow fields) without
//! touching agent logic.  [`AStarPathFinder`] is the default.
//!
//! # Search
//!
//! 4-connected moves, unit edge cost, Manhattan heuristic.  The heuristic is
//! admissible and consistent on this graph, so the first time the goal is
//! popped the path is optimal.  Heap entries are keyed on `(f, flat index)`
//! so equal-f ties resolve the same way on every run.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{GridPos, OccupancyGrid, SpatialError, SpatialResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a path query: every cell from start to goal, inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub cells: Vec<GridPos>,
}

impl Route {
    /// Number of cells including the start.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of single-cell moves needed to follow the route.
    #[inline]
    pub fn moves(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// The cells still to walk, i.e. everything after the current cell.
    pub fn into_steps(self) -> Vec<GridPos> {
        self.cells.into_iter().skip(1).collect()
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable path search over an [`OccupancyGrid`].
pub trait PathFinder: Send + Sync {
    /// Find a route from `start` to `goal`.
    ///
    /// Returns `Err(SpatialError::NoPath)` when either endpoint is blocked or
    /// out of bounds, or when the goal is unreachable.  Callers treat that as
    /// "stay put", never as a fault.
    fn find_path(&self, grid: &OccupancyGrid, start: GridPos, goal: GridPos) -> SpatialResult<Route>;
}

// ── AStarPathFinder ───────────────────────────────────────────────────────────

/// Node-expansion counters for a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the open set and expanded.
    pub expanded: usize,
}

/// Grid A* with a Manhattan heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPathFinder;

impl AStarPathFinder {
    /// Raw search: the full cell sequence, or empty when there is no path.
    pub fn search(&self, grid: &OccupancyGrid, start: GridPos, goal: GridPos) -> Vec<GridPos> {
        self.search_with_stats(grid, start, goal).0
    }

    /// Like [`search`](Self::search), also reporting how many nodes were expanded.
    pub fn search_with_stats(
        &self,
        grid: &OccupancyGrid,
        start: GridPos,
        goal: GridPos,
    ) -> (Vec<GridPos>, SearchStats) {
        let mut stats = SearchStats::default();

        let (Some(start_idx), Some(goal_idx)) = (grid.index_of(start), grid.index_of(goal)) else {
            return (Vec::new(), stats);
        };
        if grid.is_blocked(start) || grid.is_blocked(goal) {
            return (Vec::new(), stats);
        }

        let n = grid.rows() * grid.cols();
        // g[i] = best known step count to reach i.
        let mut g = vec![u32::MAX; n];
        // came_from[i] = predecessor on the best known path; usize::MAX if none.
        let mut came_from = vec![usize::MAX; n];
        let mut closed = vec![false; n];

        g[start_idx] = 0;

        // Min-heap on (f, flat index).  The index makes tie-breaking deterministic.
        let mut open: BinaryHeap<Reverse<(u32, usize)>> = BinaryHeap::new();
        open.push(Reverse((start.manhattan(goal), start_idx)));

        while let Some(Reverse((_, idx))) = open.pop() {
            if closed[idx] {
                continue;
            }
            if idx == goal_idx {
                return (reconstruct(grid, &came_from, goal_idx), stats);
            }
            closed[idx] = true;
            stats.expanded += 1;

            let pos = grid.pos_of(idx);
            let next_g = g[idx] + 1;
            for nb in pos.neighbours4() {
                if grid.is_blocked(nb) {
                    continue;
                }
                let Some(nb_idx) = grid.index_of(nb) else { continue };
                if closed[nb_idx] || next_g >= g[nb_idx] {
                    continue;
                }
                g[nb_idx] = next_g;
                came_from[nb_idx] = idx;
                open.push(Reverse((next_g + nb.manhattan(goal), nb_idx)));
            }
        }

        (Vec::new(), stats)
    }
}

impl PathFinder for AStarPathFinder {
    fn find_path(&self, grid: &OccupancyGrid, start: GridPos, goal: GridPos) -> SpatialResult<Route> {
        let cells = self.search(grid, start, goal);
        if cells.is_empty() {
            return Err(SpatialError::NoPath { from: start, to: goal });
        }
        Ok(Route { cells })
    }
}

fn reconstruct(grid: &OccupancyGrid, came_from: &[usize], goal_idx: usize) -> Vec<GridPos> {
    let mut cells = vec![grid.pos_of(goal_idx)];
    let mut cur = goal_idx;
    while came_from[cur] != usize::MAX {
        cur = came_from[cur];
        cells.push(grid.pos_of(cur));
    }
    cells.reverse();
    cells
}
