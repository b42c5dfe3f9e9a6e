//! Droplet-load field with exponential decay and 4-neighbour diffusion.
//!
//! # Data layout
//!
//! A flat row-major `Vec<f64>` of `rows × cols` cells plus a scratch buffer of
//! the same size.  [`SpreadField::update`] writes the diffused field into the
//! scratch buffer and swaps, so neighbour reads within a pass always see the
//! pre-pass values and no allocation happens per tick.
//!
//! # Invariants
//!
//! - Every cell is in `[0, max_load]` after any public call.
//! - Without new sources, total mass never increases: decay shrinks it,
//!   diffusion conserves it, and clamping can only remove.

use cs_core::{EngineConfig, SpreadParams};

use crate::{EpidemicError, EpidemicResult};

/// A pending `add_source` call.  Agents emit these during a tick; the
/// orchestrator applies them all at once so no agent sees another agent's
/// same-tick shedding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Deposit {
    pub row:    i64,
    pub col:    i64,
    pub amount: f64,
}

#[derive(Clone, Debug)]
pub struct SpreadField {
    rows:    usize,
    cols:    usize,
    load:    Vec<f64>,
    scratch: Vec<f64>,
    params:  SpreadParams,
}

impl SpreadField {
    pub fn new(rows: usize, cols: usize, params: SpreadParams) -> EpidemicResult<Self> {
        params.validate()?;
        if rows == 0 || cols == 0 {
            return Err(EpidemicError::Config(format!("spread field must be non-empty, got {rows}x{cols}")));
        }
        Ok(Self {
            rows,
            cols,
            load: vec![0.0; rows * cols],
            scratch: vec![0.0; rows * cols],
            params,
        })
    }

    /// Field sized `occupancy × grid_density` per axis.
    pub fn from_config(config: &EngineConfig) -> EpidemicResult<Self> {
        let (rows, cols) = config.spread_dims();
        Self::new(rows, cols, config.spread.clone())
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
    pub fn params(&self) -> &SpreadParams {
        &self.params
    }

    #[inline]
    pub fn max_load(&self) -> f64 {
        self.params.max_load
    }

    /// Raw row-major loads, for visualization.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.load
    }

    #[inline]
    fn index(&self, row: i64, col: i64) -> Option<usize> {
        (row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols)
            .then(|| row as usize * self.cols + col as usize)
    }

    // ── Point access ──────────────────────────────────────────────────────

    /// Add `amount` to a cell, capped at `max_load`.  Out of bounds is a no-op.
    pub fn add_source(&mut self, row: i64, col: i64, amount: f64) {
        if let Some(i) = self.index(row, col) {
            self.load[i] = (self.load[i] + amount).clamp(0.0, self.params.max_load);
        }
    }

    /// Apply a batch of buffered deposits in order.
    pub fn apply(&mut self, deposits: &[Deposit]) {
        for d in deposits {
            self.add_source(d.row, d.col, d.amount);
        }
    }

    /// Current load of a cell; `0.0` out of bounds.
    #[inline]
    pub fn get_rate(&self, row: i64, col: i64) -> f64 {
        self.index(row, col).map_or(0.0, |i| self.load[i])
    }

    /// Average load over a set of `(row, col)` cells; out-of-bounds cells
    /// count as zero.  Empty input averages to zero.
    pub fn mean_rate<I>(&self, cells: I) -> f64
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let (sum, n) = cells
            .into_iter()
            .fold((0.0, 0usize), |(s, n), (r, c)| (s + self.get_rate(r, c), n + 1));
        if n == 0 { 0.0 } else { sum / n as f64 }
    }

    /// Sum of every cell's load.
    pub fn total_mass(&self) -> f64 {
        self.load.iter().sum()
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// One decay pass followed by one simultaneous diffusion pass.
    pub fn update(&mut self) {
        self.apply_decay();
        self.apply_diffusion();
    }

    fn apply_decay(&mut self) {
        let factor = (-self.params.decay_const).exp();
        for v in &mut self.load {
            *v = (*v * factor).max(0.0);
        }
    }

    fn apply_diffusion(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        let coeff = self.params.diffusion_coeff;
        self.scratch.fill(0.0);

        for r in 0..rows {
            for c in 0..cols {
                let i = r * cols + c;
                let val = self.load[i];
                if val == 0.0 {
                    continue;
                }

                let mut neighbours = [0usize; 4];
                let mut n = 0;
                if r > 0 {
                    neighbours[n] = i - cols;
                    n += 1;
                }
                if r + 1 < rows {
                    neighbours[n] = i + cols;
                    n += 1;
                }
                if c > 0 {
                    neighbours[n] = i - 1;
                    n += 1;
                }
                if c + 1 < cols {
                    neighbours[n] = i + 1;
                    n += 1;
                }

                // A lone cell has nowhere to send its outflow; it keeps it.
                if n == 0 {
                    self.scratch[i] += val;
                    continue;
                }
                let outflow = coeff * val;
                self.scratch[i] += val - outflow;
                let portion = outflow / n as f64;
                for &nb in &neighbours[..n] {
                    self.scratch[nb] += portion;
                }
            }
        }

        let max = self.params.max_load;
        for v in &mut self.scratch {
            *v = v.min(max);
        }
        std::mem::swap(&mut self.load, &mut self.scratch);
    }

    /// Zero every cell.  Called by the orchestrator at each day boundary.
    pub fn reset(&mut self) {
        self.load.fill(0.0);
    }
}
