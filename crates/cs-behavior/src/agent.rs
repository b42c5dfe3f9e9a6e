//! One simulated person: identity, activity, disease, and random stream.

use cs_core::{AgentId, AgentRng, DiseaseParams, EngineConfig, SimInstant};
use cs_epidemic::{infection_probability, shedding_amount, Deposit, PandemicState, PandemicStatus, SpreadField};
use cs_spatial::{GridPos, PathFinder};

use crate::controller::{advance, StepInput, Transition};
use crate::{Activity, ActivityState, AgentKind, AgentProfile, Place, Role, Venue};

// ── TickContext ───────────────────────────────────────────────────────────────

/// Read-only view of the scene shared by every agent during one tick.
pub struct TickContext<'a, P: PathFinder + ?Sized> {
    pub now:        SimInstant,
    pub config:     &'a EngineConfig,
    pub venue:      &'a Venue,
    /// The field as it was at the start of the tick.
    pub field:      &'a SpreadField,
    pub pathfinder: &'a P,
}

impl<'a, P: PathFinder + ?Sized> TickContext<'a, P> {
    #[inline]
    pub fn new(
        now:        SimInstant,
        config:     &'a EngineConfig,
        venue:      &'a Venue,
        field:      &'a SpreadField,
        pathfinder: &'a P,
    ) -> Self {
        Self { now, config, venue, field, pathfinder }
    }
}

// ── StatusChange ──────────────────────────────────────────────────────────────

/// An SIQR transition, reported to observers and output writers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusChange {
    pub agent: AgentId,
    pub kind:  AgentKind,
    pub from:  PandemicStatus,
    pub to:    PandemicStatus,
    pub at:    SimInstant,
}

// ── Agent ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Agent {
    profile: AgentProfile,
    role:    Role,
    state:   ActivityState,
    health:  PandemicState,
    rng:     AgentRng,
}

impl Agent {
    /// A student whose chair is the `id`-th "Chair" placeable.
    pub fn student(profile: AgentProfile, global_seed: u64) -> Self {
        let role = Role::Student { chair_index: profile.id.index() };
        let rng = AgentRng::new(global_seed, profile.id);
        Self::with_role(profile, role, rng)
    }

    pub fn teacher(profile: AgentProfile, global_seed: u64) -> Self {
        let rng = AgentRng::for_teacher(global_seed, profile.id);
        Self::with_role(profile, Role::Teacher, rng)
    }

    fn with_role(profile: AgentProfile, role: Role, rng: AgentRng) -> Self {
        let health = PandemicState::new(profile.id);
        Self { profile, role, state: ActivityState::default(), health, rng }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.profile.id
    }

    #[inline]
    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn kind(&self) -> AgentKind {
        self.role.kind()
    }

    #[inline]
    pub fn state(&self) -> &ActivityState {
        &self.state
    }

    #[inline]
    pub fn position(&self) -> GridPos {
        self.state.pos
    }

    #[inline]
    pub fn activity(&self) -> Activity {
        self.state.activity
    }

    #[inline]
    pub fn place(&self) -> Option<Place> {
        self.state.place
    }

    #[inline]
    pub fn health(&self) -> &PandemicState {
        &self.health
    }

    #[inline]
    pub fn status(&self) -> PandemicStatus {
        self.health.status()
    }

    fn change(&self, from: PandemicStatus, at: SimInstant) -> StatusChange {
        StatusChange { agent: self.id(), kind: self.kind(), from, to: self.status(), at }
    }

    // ── Day boundaries ────────────────────────────────────────────────────

    /// Reset the activity machine for a new school day.  Everyone starts
    /// outside with arrival and break logic re-armed.
    pub fn on_day_start(&mut self) {
        self.state = ActivityState::default();
    }

    /// First tick of the day: quarantine expiry, then the baseline morning
    /// infection draw for susceptible agents.
    pub fn morning_check(
        &mut self,
        now: SimInstant,
        infection_prob: f64,
        disease: &DiseaseParams,
    ) -> Option<StatusChange> {
        if self.health.update_quarantine(now) {
            return Some(self.change(PandemicStatus::Quarantined, now));
        }
        if !self.health.is_susceptible() {
            return None;
        }
        if self.rng.draw_below(infection_prob) {
            return self.infect(now, disease);
        }
        None
    }

    /// Infect now if susceptible.
    pub fn infect(&mut self, now: SimInstant, disease: &DiseaseParams) -> Option<StatusChange> {
        self.health
            .become_infected(now, &mut self.rng, disease)
            .then(|| self.change(PandemicStatus::Susceptible, now))
    }

    /// Last tick of the day: symptomatic agents are quarantined and leave.
    pub fn end_of_day_test(&mut self, now: SimInstant, disease: &DiseaseParams) -> Option<StatusChange> {
        if !self.health.end_of_day_test(now, disease) {
            return None;
        }
        self.state.leave_venue();
        Some(self.change(PandemicStatus::Infected, now))
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// One simulation step: exposure, shedding, symptom onset, then movement.
    ///
    /// Shedding goes into `deposits` instead of the field.  Returns the
    /// status change if the agent was infected from the environment.
    pub fn tick<P: PathFinder + ?Sized>(
        &mut self,
        ctx: &TickContext<'_, P>,
        deposits: &mut Vec<Deposit>,
    ) -> Option<StatusChange> {
        if self.health.is_quarantined() {
            return None;
        }

        let mut change = None;
        if !self.state.is_outside() {
            let gd = ctx.config.grid_density as i64;
            let pos = self.state.pos;

            if self.health.is_susceptible() {
                let load = ctx.field.mean_rate(spread_footprint(pos, gd));
                let p = infection_probability(load, ctx.config.infection_k, &self.profile.traits);
                if self.rng.draw_below(p) {
                    change = self.infect(ctx.now, &ctx.config.disease);
                }
            }

            if self.health.is_infectious() {
                let amount = shedding_amount(ctx.config.base_shedding, &self.profile.traits);
                deposits.extend(spread_footprint(pos, gd).map(|(row, col)| Deposit { row, col, amount }));
            }
        }

        self.health.update_status_during_day(ctx.now);

        let input = StepInput {
            now:        ctx.now.time_of_day(),
            role:       self.role,
            profile:    &self.profile,
            venue:      ctx.venue,
            pathfinder: ctx.pathfinder,
        };
        let Transition { state, events } = advance(std::mem::take(&mut self.state), &input, &mut self.rng);
        self.state = state;

        for event in &events {
            tracing::debug!(agent = %self.profile.id, kind = %self.kind(), ?event, "activity");
        }
        change
    }
}

/// The `gd × gd` block of spread cells under occupancy cell `pos`, as
/// `(row, col)` pairs.
pub fn spread_footprint(pos: GridPos, gd: i64) -> impl Iterator<Item = (i64, i64)> {
    let (r0, c0) = (pos.row as i64 * gd, pos.col as i64 * gd);
    (r0..r0 + gd).flat_map(move |r| (c0..c0 + gd).map(move |c| (r, c)))
}
