//! Deterministic per-agent RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! This means:
//!
//! - Agents never share RNG state, so the draws of one agent do not depend on
//!   how many other agents were processed before it in a tick.
//! - Adding a student at the end of the roster does not disturb the streams
//!   of existing students, so runs stay reproducible as classes grow.
//! - The teacher is seeded from a salted global seed so it never shares a
//!   stream with the student of the same id.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Gamma};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Salt XOR-ed into the global seed for the teacher's stream.
pub const TEACHER_SEED_SALT: u64 = 0x5445_4143_4845_5221;

/// Per-agent deterministic RNG.
///
/// Create one per agent at scene build time; it is owned by the agent so the
/// behaviour controller and the pandemic state draw from the same stream.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed the teacher's stream.
    pub fn for_teacher(global_seed: u64, agent: AgentId) -> Self {
        Self::new(global_seed ^ TEACHER_SEED_SALT, agent)
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` when a uniform draw in `[0, 1)` falls below `p`.
    ///
    /// Unlike `Rng::gen_bool` this accepts any `p`: values `<= 0` never
    /// succeed and values `> 1` always do.
    #[inline]
    pub fn draw_below(&mut self, p: f64) -> bool {
        self.0.r#gen::<f64>() < p
    }

    /// Sample a Gamma variate with the given `shape` and `mean`
    /// (scale = mean / shape).
    ///
    /// Degenerate parameters fall back to returning `mean` clamped at zero.
    pub fn gamma_with_mean(&mut self, shape: f64, mean: f64) -> f64 {
        match Gamma::new(shape, mean / shape) {
            Ok(dist) => dist.sample(&mut self.0),
            Err(_) => mean.max(0.0),
        }
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
