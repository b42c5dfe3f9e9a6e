//! Engine configuration.
//!
//! Loaded from the engine file by the application (outside the core) and
//! passed to the scene builder.  [`EngineConfig::validate`] must pass before
//! any component is constructed; a failure is fatal.

use crate::{CoreError, CoreResult, TimeOfDay};

// ── SpreadParams ──────────────────────────────────────────────────────────────

/// Parameters of the droplet decay/diffusion field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpreadParams {
    /// Per-cell cap on droplet load.
    pub max_load: f64,
    /// Exponential decay constant; each update multiplies loads by `exp(-decay_const)`.
    pub decay_const: f64,
    /// Fraction of a cell's load that flows to its neighbours per update.
    pub diffusion_coeff: f64,
}

impl Default for SpreadParams {
    fn default() -> Self {
        Self { max_load: 16_000.0, decay_const: 0.1, diffusion_coeff: 0.02 }
    }
}

impl SpreadParams {
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.max_load > 0.0) {
            return Err(CoreError::Config(format!("max_load must be > 0, got {}", self.max_load)));
        }
        if !(self.decay_const >= 0.0) {
            return Err(CoreError::Config(format!(
                "decay_const must be >= 0, got {}",
                self.decay_const
            )));
        }
        if !(0.0..=1.0).contains(&self.diffusion_coeff) {
            return Err(CoreError::Config(format!(
                "diffusion_coeff must be in [0, 1], got {}",
                self.diffusion_coeff
            )));
        }
        Ok(())
    }
}

// ── DiseaseParams ─────────────────────────────────────────────────────────────

/// Timeline of the disease, in days.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiseaseParams {
    /// Mean of the pre-symptomatic (infectious, undetected) phase.
    pub pre_symptomatic_mean_days: f64,
    /// Mean of the symptomatic phase.
    pub post_symptomatic_mean_days: f64,
    /// Shape of both Gamma distributions.
    pub gamma_shape: f64,
    /// Length of quarantine once detected.
    pub quarantine_days: f64,
}

impl Default for DiseaseParams {
    fn default() -> Self {
        Self {
            pre_symptomatic_mean_days:  2.3,
            post_symptomatic_mean_days: 3.2,
            gamma_shape:                2.0,
            quarantine_days:            14.0,
        }
    }
}

impl DiseaseParams {
    pub fn validate(&self) -> CoreResult<()> {
        let positive = [
            ("pre_symptomatic_mean_days", self.pre_symptomatic_mean_days),
            ("post_symptomatic_mean_days", self.post_symptomatic_mean_days),
            ("gamma_shape", self.gamma_shape),
        ];
        for (name, v) in positive {
            if !(v > 0.0) {
                return Err(CoreError::Config(format!("{name} must be > 0, got {v}")));
            }
        }
        if !(self.quarantine_days >= 0.0) {
            return Err(CoreError::Config(format!(
                "quarantine_days must be >= 0, got {}",
                self.quarantine_days
            )));
        }
        Ok(())
    }
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Pixels per tile edge.
    pub tile_size: u32,
    /// Map width in pixels; must be a multiple of `tile_size`.
    pub map_width: u32,
    /// Map height in pixels; must be a multiple of `tile_size`.
    pub map_height: u32,
    /// Occupancy sub-cells per tile edge; must evenly divide `tile_size`.
    pub map_density: u32,

    /// Morning chance that a susceptible agent arrives already infected.
    pub infection_prob: f64,
    /// Scale factor converting droplet load into infection probability.
    pub infection_k: f64,
    /// Droplet load an unmasked infectious agent adds per footprint cell per tick.
    pub base_shedding: f64,
    /// Spread-field cells per occupancy cell edge.  `1` matches the
    /// occupancy grid; larger values make the spread field finer, never
    /// coarser.
    pub grid_density: u32,

    /// Daily opening time of the venue.
    pub start_time: TimeOfDay,
    /// Daily closing time of the venue.
    pub end_time: TimeOfDay,
    /// Number of Monday–Friday weeks to simulate.
    pub num_weeks: u32,
    /// Simulated seconds per tick.
    pub time_step_seconds: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    pub spread:  SpreadParams,
    pub disease: DiseaseParams,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tile_size:         5,
            map_width:         1_200,
            map_height:        720,
            map_density:       5,
            infection_prob:    0.0,
            infection_k:       0.000_014,
            base_shedding:     100.0,
            grid_density:      1,
            start_time:        TimeOfDay::hms(7, 30, 0),
            end_time:          TimeOfDay::hms(13, 50, 0),
            num_weeks:         2,
            time_step_seconds: 5,
            seed:              0,
            spread:            SpreadParams::default(),
            disease:           DiseaseParams::default(),
        }
    }
}

impl EngineConfig {
    /// Number of whole tiles across the map.
    #[inline]
    pub fn tiles_x(&self) -> u32 {
        self.map_width / self.tile_size.max(1)
    }

    /// Number of whole tiles down the map.
    #[inline]
    pub fn tiles_y(&self) -> u32 {
        self.map_height / self.tile_size.max(1)
    }

    /// Occupancy grid dimensions as `(rows, cols)`.
    pub fn occupancy_dims(&self) -> (usize, usize) {
        (
            (self.tiles_y() * self.map_density) as usize,
            (self.tiles_x() * self.map_density) as usize,
        )
    }

    /// Spread-field dimensions as `(rows, cols)`.
    pub fn spread_dims(&self) -> (usize, usize) {
        let (rows, cols) = self.occupancy_dims();
        let d = self.grid_density as usize;
        (rows * d, cols * d)
    }

    /// Check every structural constraint.  Errors are fatal at construction.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tile_size == 0 {
            return Err(CoreError::Config("tile_size must be > 0".into()));
        }
        if self.map_density == 0 {
            return Err(CoreError::Config("map_density must be > 0".into()));
        }
        if self.tile_size % self.map_density != 0 {
            return Err(CoreError::Config(format!(
                "map_density {} must evenly divide tile_size {}",
                self.map_density, self.tile_size
            )));
        }
        if self.map_width % self.tile_size != 0 || self.map_height % self.tile_size != 0 {
            return Err(CoreError::Config(format!(
                "map size {}x{} must be divisible by tile_size {}",
                self.map_width, self.map_height, self.tile_size
            )));
        }
        if self.grid_density == 0 {
            return Err(CoreError::Config("grid_density must be > 0".into()));
        }
        if self.time_step_seconds == 0 {
            return Err(CoreError::Config("time_step_seconds must be > 0".into()));
        }
        if self.num_weeks == 0 {
            return Err(CoreError::Config("num_weeks must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.infection_prob) {
            return Err(CoreError::Config(format!(
                "infection_prob must be in [0, 1], got {}",
                self.infection_prob
            )));
        }
        if !(self.infection_k >= 0.0) || !(self.base_shedding >= 0.0) {
            return Err(CoreError::Config(
                "infection_k and base_shedding must be >= 0".into(),
            ));
        }
        if self.start_time >= self.end_time {
            return Err(CoreError::Config(format!(
                "start_time {} must be before end_time {}",
                self.start_time, self.end_time
            )));
        }
        let window = self.end_time.secs() - self.start_time.secs();
        if self.time_step_seconds > window {
            return Err(CoreError::Config(format!(
                "time_step_seconds {} exceeds the {window} s daily window",
                self.time_step_seconds
            )));
        }
        self.spread.validate()?;
        self.disease.validate()?;
        Ok(())
    }
}
