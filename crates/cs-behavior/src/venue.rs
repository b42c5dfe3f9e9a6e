//! The static room: placeables, their rasterized occupancy grid, and the
//! role lookups the activity machine needs.

use cs_core::{AgentRng, EngineConfig};
use cs_spatial::{roles, GridPos, GridScale, OccupancyGrid, Placeable};

/// Read-only for the whole run.
#[derive(Clone, Debug)]
pub struct Venue {
    placeables: Vec<Placeable>,
    grid:       OccupancyGrid,
    scale:      GridScale,
}

impl Venue {
    /// Rasterize `placeables` at the resolution implied by `config`.
    pub fn new(placeables: Vec<Placeable>, config: &EngineConfig) -> Self {
        let scale = GridScale { tile_size: config.tile_size, map_density: config.map_density };
        let (rows, cols) = config.occupancy_dims();
        let grid = OccupancyGrid::build(&placeables, rows, cols, scale);
        Self { placeables, grid, scale }
    }

    /// Use an existing grid as-is (tests, custom rasterizers).
    pub fn with_grid(placeables: Vec<Placeable>, grid: OccupancyGrid, scale: GridScale) -> Self {
        Self { placeables, grid, scale }
    }

    #[inline]
    pub fn placeables(&self) -> &[Placeable] {
        &self.placeables
    }

    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    #[inline]
    pub fn scale(&self) -> GridScale {
        self.scale
    }

    /// Every placeable carrying `role`, in scene order.
    pub fn all<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a Placeable> + 'a {
        self.placeables.iter().filter(move |p| p.is(role))
    }

    /// The first placeable carrying `role`.
    pub fn first(&self, role: &str) -> Option<&Placeable> {
        self.placeables.iter().find(|p| p.is(role))
    }

    #[inline]
    pub fn has(&self, role: &str) -> bool {
        self.first(role).is_some()
    }

    /// The `index`-th "Chair" in scene order.
    pub fn chair(&self, index: usize) -> Option<&Placeable> {
        self.all(roles::CHAIR).nth(index)
    }

    /// A random sub-cell of a randomly chosen placeable carrying `role`.
    pub fn random_cell_in(&self, role: &str, rng: &mut AgentRng) -> Option<GridPos> {
        let candidates: Vec<&Placeable> = self.all(role).collect();
        let chosen = rng.choose(&candidates)?;
        chosen.random_cell(self.scale, rng)
    }
}
