//! Per-agent SIQR state machine.
//!
//! ```text
//! SUSCEPTIBLE ──become_infected──▶ INFECTED (pre-symptomatic)
//!                                     │ update_status_during_day, now ≥ pre_symptomatic_end
//!                                     ▼
//!                                  INFECTED (symptomatic)
//!                                     │ end_of_day_test
//!                                     ▼
//!                                  QUARANTINED ──update_quarantine, now ≥ quarantine_end──▶ RECOVERED
//! ```
//!
//! Transitions are monotonic and every transition method is a no-op from the
//! wrong state.  Each one returns `true` when it actually changed something so
//! callers can report status changes without diffing.

use std::fmt;

use cs_core::{AgentId, AgentRng, DiseaseParams, SimInstant};

// ── PandemicStatus ────────────────────────────────────────────────────────────

/// The four SIQR statuses.  Declared in transition order, so `Ord` follows
/// the progression.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PandemicStatus {
    #[default]
    Susceptible,
    Infected,
    Quarantined,
    Recovered,
}

impl PandemicStatus {
    pub const ALL: [PandemicStatus; 4] = [
        PandemicStatus::Susceptible,
        PandemicStatus::Infected,
        PandemicStatus::Quarantined,
        PandemicStatus::Recovered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PandemicStatus::Susceptible => "susceptible",
            PandemicStatus::Infected => "infected",
            PandemicStatus::Quarantined => "quarantined",
            PandemicStatus::Recovered => "recovered",
        }
    }
}

impl fmt::Display for PandemicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PandemicState ─────────────────────────────────────────────────────────────

/// Disease timeline of one agent.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PandemicState {
    agent:  AgentId,
    status: PandemicStatus,

    pre_symptomatic: bool,
    symptomatic:     bool,

    infection_start:     Option<SimInstant>,
    pre_symptomatic_end: Option<SimInstant>,
    /// Sampled for analysis only; no transition reads it.
    symptomatic_end:     Option<SimInstant>,
    quarantine_end:      Option<SimInstant>,
}

impl PandemicState {
    pub fn new(agent: AgentId) -> Self {
        Self {
            agent,
            status: PandemicStatus::Susceptible,
            pre_symptomatic: false,
            symptomatic: false,
            infection_start: None,
            pre_symptomatic_end: None,
            symptomatic_end: None,
            quarantine_end: None,
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// SUSCEPTIBLE → INFECTED (pre-symptomatic).  Samples both phase
    /// durations from Gamma distributions with the configured means.
    pub fn become_infected(&mut self, now: SimInstant, rng: &mut AgentRng, disease: &DiseaseParams) -> bool {
        if self.status != PandemicStatus::Susceptible {
            return false;
        }
        let pre_days = rng.gamma_with_mean(disease.gamma_shape, disease.pre_symptomatic_mean_days);
        let post_days = rng.gamma_with_mean(disease.gamma_shape, disease.post_symptomatic_mean_days);
        let pre_end = now.plus_days(pre_days);

        self.status = PandemicStatus::Infected;
        self.infection_start = Some(now);
        self.pre_symptomatic_end = Some(pre_end);
        self.symptomatic_end = Some(pre_end.plus_days(post_days));
        self.pre_symptomatic = true;
        self.symptomatic = false;

        tracing::info!(agent = %self.agent, at = %now, pre_symptomatic_end = %pre_end, "became infected");
        true
    }

    /// Pre-symptomatic → symptomatic once `pre_symptomatic_end` is reached.
    /// Status stays INFECTED; detection waits for the end-of-day test.
    pub fn update_status_during_day(&mut self, now: SimInstant) -> bool {
        if self.status != PandemicStatus::Infected || !self.pre_symptomatic {
            return false;
        }
        match self.pre_symptomatic_end {
            Some(end) if now >= end => {
                self.pre_symptomatic = false;
                self.symptomatic = true;
                tracing::debug!(agent = %self.agent, at = %now, "became symptomatic");
                true
            }
            _ => false,
        }
    }

    /// INFECTED and symptomatic → QUARANTINED for `quarantine_days`.
    pub fn end_of_day_test(&mut self, now: SimInstant, disease: &DiseaseParams) -> bool {
        if self.status != PandemicStatus::Infected || !self.symptomatic {
            return false;
        }
        let until = now.plus_days(disease.quarantine_days);
        self.status = PandemicStatus::Quarantined;
        self.quarantine_end = Some(until);
        tracing::info!(agent = %self.agent, at = %now, until = %until, "quarantined at end_of_day");
        true
    }

    /// QUARANTINED → RECOVERED once `quarantine_end` is reached.
    pub fn update_quarantine(&mut self, now: SimInstant) -> bool {
        if self.status != PandemicStatus::Quarantined {
            return false;
        }
        match self.quarantine_end {
            Some(end) if now >= end => {
                self.status = PandemicStatus::Recovered;
                self.pre_symptomatic = false;
                self.symptomatic = false;
                tracing::info!(agent = %self.agent, at = %now, "recovered after quarantine");
                true
            }
            _ => false,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    #[inline]
    pub fn status(&self) -> PandemicStatus {
        self.status
    }

    #[inline]
    pub fn is_susceptible(&self) -> bool {
        self.status == PandemicStatus::Susceptible
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.status == PandemicStatus::Infected
    }

    /// INFECTED and in either sub-phase.
    #[inline]
    pub fn is_infectious(&self) -> bool {
        self.status == PandemicStatus::Infected && (self.pre_symptomatic || self.symptomatic)
    }

    #[inline]
    pub fn is_pre_symptomatic(&self) -> bool {
        self.pre_symptomatic
    }

    #[inline]
    pub fn is_symptomatic(&self) -> bool {
        self.symptomatic
    }

    #[inline]
    pub fn is_quarantined(&self) -> bool {
        self.status == PandemicStatus::Quarantined
    }

    #[inline]
    pub fn is_recovered(&self) -> bool {
        self.status == PandemicStatus::Recovered
    }

    pub fn infection_start(&self) -> Option<SimInstant> {
        self.infection_start
    }

    pub fn pre_symptomatic_end(&self) -> Option<SimInstant> {
        self.pre_symptomatic_end
    }

    pub fn symptomatic_end(&self) -> Option<SimInstant> {
        self.symptomatic_end
    }

    pub fn quarantine_end(&self) -> Option<SimInstant> {
        self.quarantine_end
    }
}
