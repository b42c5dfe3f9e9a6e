//! Exposure model: droplet load to infection probability, and shedding.

use cs_core::AgentTraits;

/// Probability that one tick of exposure to `load` infects an agent.
///
/// ```text
/// masked = load · (1 − mask_efficacy)
/// p_raw  = 1 − exp(−k · masked)
/// p      = p_raw · (1 − vaccine_efficacy)
/// ```
pub fn infection_probability(load: f64, k: f64, traits: &AgentTraits) -> f64 {
    let masked = load.max(0.0) * traits.mask_pass_through();
    let raw = 1.0 - (-k * masked).exp();
    raw * traits.vaccine_pass_through()
}

/// Droplet load an infectious agent adds to each footprint cell per tick.
#[inline]
pub fn shedding_amount(base_shedding: f64, traits: &AgentTraits) -> f64 {
    base_shedding * traits.mask_pass_through()
}
