//! The `Scene` struct and its per-tick sequence.

use cs_behavior::{Agent, AgentKind, StatusChange, TickContext, Venue};
use cs_core::{AgentId, EngineConfig};
use cs_epidemic::{Deposit, SpreadField};
use cs_schedule::Timer;
use cs_spatial::{AStarPathFinder, PathFinder, Placeable};

use crate::{NoopObserver, SceneObserver, SiqrCounts};

// ── Scene ─────────────────────────────────────────────────────────────────────

/// The classroom and everyone in it.
///
/// `Scene<P>` owns the venue, the agents, the spread field and the timer, and
/// sequences one fixed time step per [`step`](Scene::step):
///
/// 1. **Day start** (time == daily start): every agent is reset to the
///    start-of-day state, then gets its morning check (quarantine expiry,
///    baseline infection draw).
/// 2. **Agents**: students in roster order, then the teacher.  Each reads
///    the spread field as it was at the start of the tick; shedding is
///    buffered and applied once all agents have acted.
/// 3. **Day end** (last tick before `daily_end`): end-of-day test; agents
///    found symptomatic are quarantined and leave the venue.
/// 4. **Spread** decay/diffusion pass.
/// 5. **Timer** advance; the spread field is cleared when a new school day
///    begins.
///
/// Create via [`SceneBuilder`][crate::SceneBuilder].
pub struct Scene<P: PathFinder = AStarPathFinder> {
    pub(crate) config:     EngineConfig,
    pub(crate) venue:      Venue,
    pub(crate) students:   Vec<Agent>,
    pub(crate) teacher:    Option<Agent>,
    pub(crate) timer:      Timer,
    pub(crate) spread:     SpreadField,
    pub(crate) pathfinder: P,
    /// Shedding buffered during the current tick.
    pub(crate) deposits:   Vec<Deposit>,
    pub(crate) finished:   bool,
}

impl<P: PathFinder> Scene<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process exactly one time step.  A no-op once finished.
    pub fn simulate_once(&mut self) {
        self.step(&mut NoopObserver);
    }

    /// Run until the timer reports completion.  Returns the number of steps
    /// processed by this call.
    pub fn run<O: SceneObserver>(&mut self, observer: &mut O) -> u64 {
        let before = self.timer.ticks();
        while !self.finished {
            self.step(observer);
        }
        self.timer.ticks() - before
    }

    /// Process one time step, reporting to `observer`.
    pub fn step<O: SceneObserver>(&mut self, observer: &mut O) {
        if self.finished {
            return;
        }
        let now = self.timer.now();

        // ── Day start ─────────────────────────────────────────────────────
        if self.timer.is_day_start() {
            tracing::info!(
                week = self.timer.current_week(),
                weekday = self.timer.day_str(),
                day = self.timer.current_day(),
                "day started"
            );
            observer.on_day_start(&self.timer);

            let prob = self.config.infection_prob;
            for agent in self.students.iter_mut().chain(self.teacher.iter_mut()) {
                agent.on_day_start();
                if let Some(change) = agent.morning_check(now, prob, &self.config.disease) {
                    observer.on_status_change(&change, &self.timer);
                }
            }
        }

        // ── Agents ────────────────────────────────────────────────────────
        self.deposits.clear();
        let ctx = TickContext::new(now, &self.config, &self.venue, &self.spread, &self.pathfinder);
        for agent in self.students.iter_mut().chain(self.teacher.iter_mut()) {
            if let Some(change) = agent.tick(&ctx, &mut self.deposits) {
                observer.on_status_change(&change, &self.timer);
            }
        }
        self.spread.apply(&self.deposits);

        // ── Day end ───────────────────────────────────────────────────────
        if self.timer.is_last_tick_of_day() {
            for agent in self.students.iter_mut().chain(self.teacher.iter_mut()) {
                if let Some(change) = agent.end_of_day_test(now, &self.config.disease) {
                    observer.on_status_change(&change, &self.timer);
                }
            }
            let counts = self.siqr_counts();
            tracing::info!(
                week = self.timer.current_week(),
                weekday = self.timer.day_str(),
                %counts,
                "day ended"
            );
            observer.on_day_end(&self.timer, counts);
        }

        // ── Spread and clock ──────────────────────────────────────────────
        self.spread.update();
        observer.on_tick_end(&self.timer);

        let day = self.timer.current_day();
        self.timer.tick();
        if self.timer.check_finished() {
            self.finished = true;
            tracing::info!(ticks = self.timer.ticks(), counts = %self.siqr_counts(), "simulation finished");
            observer.on_finished(&self.timer);
        } else if self.timer.current_day() != day {
            self.spread.reset();
        }
    }

    /// Infect an agent now, bypassing the morning draw.  Used to seed an
    /// outbreak with a known index case.
    ///
    /// Student and teacher ids are separate namespaces, so `kind` picks the
    /// roster.  `None` if there is no such agent or it is not susceptible.
    pub fn infect(&mut self, id: AgentId, kind: AgentKind) -> Option<StatusChange> {
        let now = self.timer.now();
        let agent = match kind {
            AgentKind::Student => self.students.iter_mut().find(|a| a.id() == id),
            AgentKind::Teacher => self.teacher.as_mut().filter(|t| t.id() == id),
        }?;
        agent.infect(now, &self.config.disease)
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    #[inline]
    pub fn placeables(&self) -> &[Placeable] {
        self.venue.placeables()
    }

    #[inline]
    pub fn students(&self) -> &[Agent] {
        &self.students
    }

    #[inline]
    pub fn teacher(&self) -> Option<&Agent> {
        self.teacher.as_ref()
    }

    /// Students in roster order, then the teacher.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.students.iter().chain(self.teacher.iter())
    }

    /// Look up an agent by id within the `kind` roster.
    pub fn agent(&self, id: AgentId, kind: AgentKind) -> Option<&Agent> {
        match kind {
            AgentKind::Student => self.students.iter().find(|a| a.id() == id),
            AgentKind::Teacher => self.teacher.as_ref().filter(|t| t.id() == id),
        }
    }

    #[inline]
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    #[inline]
    pub fn spread(&self) -> &SpreadField {
        &self.spread
    }

    #[inline]
    pub fn pathfinder(&self) -> &P {
        &self.pathfinder
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current SIQR totals over students and teacher.
    pub fn siqr_counts(&self) -> SiqrCounts {
        SiqrCounts::tally(self.agents().map(Agent::status))
    }
}
