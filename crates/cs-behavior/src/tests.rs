//! Unit tests for cs-behavior.
//!
//! The venue is a 20×20 sub-cell room at density 1:
//!
//! ```text
//! Entrance     (0..2, 0..2)
//! Whiteboard   (4..10, 0)        front cell (7, 1)
//! Chair #0     (10, 10)
//! Chair #1     (12, 10)
//! Armchair     (5, 18)
//! BackHotspot  (15..18, 15..18)
//! ```

use cs_core::{AgentId, AgentRng, AgentTraits, Behaviour, Style, TimeOfDay};
use cs_schedule::AgentSchedule;
use cs_spatial::{roles, AStarPathFinder, GridPos, GridScale, OccupancyGrid, Placeable};

use crate::controller::StepInput;
use crate::{advance, Activity, ActivityState, AgentProfile, Place, Role, Transition, Venue};

// ── Helpers ───────────────────────────────────────────────────────────────────

const SCALE: GridScale = GridScale { tile_size: 5, map_density: 1 };

fn placeables() -> Vec<Placeable> {
    vec![
        Placeable::rectangle(roles::ENTRANCE, 0.0, 0.0, 2.0, 2.0, false),
        Placeable::rectangle(roles::WHITEBOARD, 4.0, 0.0, 6.0, 1.0, true),
        Placeable::circle(roles::CHAIR, 10.0, 10.0, false),
        Placeable::circle(roles::CHAIR, 12.0, 10.0, false),
        Placeable::circle(roles::ARMCHAIR, 5.0, 18.0, false),
        Placeable::rectangle(roles::BACK_HOTSPOT, 15.0, 15.0, 3.0, 3.0, false),
    ]
}

fn venue() -> Venue {
    Venue::with_grid(placeables(), OccupancyGrid::empty(20, 20), SCALE)
}

fn profile(behaviour: Behaviour, style: Style) -> AgentProfile {
    AgentProfile::new(
        AgentId(0),
        AgentSchedule::new(TimeOfDay::hms(8, 0, 0), TimeOfDay::hms(12, 0, 0)).unwrap(),
        AgentTraits { behaviour, style, ..Default::default() },
    )
}

fn at(h: u32, m: u32) -> TimeOfDay {
    TimeOfDay::hms(h, m, 0)
}

fn idle_at(place: Place, pos: GridPos) -> ActivityState {
    ActivityState {
        activity: Activity::Idle,
        place: Some(place),
        pos,
        restart: false,
        ..Default::default()
    }
}

/// Run one transition for a student with chair 0.
fn step_student(state: ActivityState, now: TimeOfDay, p: &AgentProfile, venue: &Venue, rng: &mut AgentRng) -> Transition {
    step_as(Role::Student { chair_index: 0 }, state, now, p, venue, rng)
}

fn step_as(
    role: Role,
    state: ActivityState,
    now: TimeOfDay,
    profile: &AgentProfile,
    venue: &Venue,
    rng: &mut AgentRng,
) -> Transition {
    let input = StepInput { now, role, profile, venue, pathfinder: &AStarPathFinder };
    advance(state, &input, rng)
}

// ── Profiles ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod profile {
    use cs_core::{CoreError, Mask, Vaccine};

    use crate::{AgentProfile, AgentRecord, BehaviorError};

    fn record() -> AgentRecord {
        AgentRecord {
            id:        3,
            arrival:   "08:00:00".into(),
            leaving:   "13:30:00".into(),
            style:     "smart".into(),
            behaviour: "active".into(),
            mask:      "cloth".into(),
            vaccine:   "astra-zeneca".into(),
        }
    }

    #[test]
    fn valid_record() {
        let p = AgentProfile::from_record(&record()).unwrap();
        assert_eq!(p.id.0, 3);
        assert_eq!(p.traits.mask, Mask::Cloth);
        assert_eq!(p.traits.vaccine, Vaccine::AstraZeneca);
        assert_eq!(p.schedule.leaving.to_string(), "13:30:00");
    }

    #[test]
    fn unknown_trait_is_rejected() {
        let r = AgentRecord { behaviour: "rowdy".into(), ..record() };
        assert_eq!(
            AgentProfile::try_from(&r).unwrap_err(),
            BehaviorError::Core(CoreError::InvalidTrait { kind: "behaviour", value: "rowdy".into() })
        );
    }

    #[test]
    fn bad_time_is_rejected() {
        let r = AgentRecord { arrival: "8am".into(), ..record() };
        assert!(matches!(AgentProfile::from_record(&r), Err(BehaviorError::Schedule(_))));
    }
}

// ── Venue lookups ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod venue {
    use cs_core::EngineConfig;

    use super::*;

    #[test]
    fn chairs_in_scene_order() {
        let v = venue();
        assert_eq!(v.chair(0).unwrap().anchor_cell(SCALE), GridPos::new(10, 10));
        assert_eq!(v.chair(1).unwrap().anchor_cell(SCALE), GridPos::new(12, 10));
        assert!(v.chair(2).is_none());
    }

    #[test]
    fn random_cell_in_role() {
        let v = venue();
        let mut rng = AgentRng::new(5, AgentId(0));
        for _ in 0..50 {
            let c = v.random_cell_in(roles::BACK_HOTSPOT, &mut rng).unwrap();
            assert!((15..18).contains(&c.col) && (15..18).contains(&c.row));
        }
        assert!(v.random_cell_in("Nope", &mut rng).is_none());
    }

    #[test]
    fn built_from_config_rasterizes() {
        let cfg = EngineConfig { map_width: 100, map_height: 100, map_density: 1, ..Default::default() };
        let v = Venue::new(placeables(), &cfg);
        assert_eq!((v.grid().rows(), v.grid().cols()), (20, 20));
        // Only the whiteboard collides.
        assert_eq!(v.grid().blocked_count(), 6);
    }
}

// ── Outside ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival {
    use super::*;
    use crate::ActivityEvent;

    #[test]
    fn waits_until_arrival_time() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut rng = AgentRng::new(1, AgentId(0));
        let t = step_student(ActivityState::default(), at(7, 59), &p, &venue(), &mut rng);
        assert_eq!(t.state, ActivityState::default());
        assert!(t.events.is_empty());
    }

    #[test]
    fn spawns_on_entrance_heading_back() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut rng = AgentRng::new(1, AgentId(0));
        let t = step_student(ActivityState::default(), at(8, 0), &p, &venue(), &mut rng);
        let s = &t.state;
        assert_eq!(s.activity, Activity::Moving);
        assert_eq!(s.place, Some(Place::Back));
        assert!(!s.restart);
        assert!((0..2).contains(&s.pos.col) && (0..2).contains(&s.pos.row));
        assert!(matches!(t.events[0], ActivityEvent::Spawned { .. }));
    }

    #[test]
    fn teacher_heads_to_armchair() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut rng = AgentRng::for_teacher(1, AgentId(0));
        let t = step_as(Role::Teacher, ActivityState::default(), at(8, 0), &p, &venue(), &mut rng);
        assert_eq!(t.state.place, Some(Place::TeacherDesk));
    }

    #[test]
    fn no_entrance_means_no_spawn() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let v = Venue::with_grid(Vec::new(), OccupancyGrid::empty(5, 5), SCALE);
        let mut rng = AgentRng::new(1, AgentId(0));
        let t = step_student(ActivityState::default(), at(9, 0), &p, &v, &mut rng);
        assert!(t.state.is_outside());
        assert!(t.state.restart, "entry stays pending");
    }

    #[test]
    fn does_not_reenter_after_leaving() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut rng = AgentRng::new(1, AgentId(0));
        let left = ActivityState { restart: false, ..Default::default() };
        let t = step_student(left.clone(), at(12, 30), &p, &venue(), &mut rng);
        assert_eq!(t.state, left);
    }

    #[test]
    fn resumes_after_stepping_out() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut rng = AgentRng::for_teacher(1, AgentId(0));
        let out = ActivityState { restart: false, resume_at: Some(at(9, 55)), ..Default::default() };

        let early = step_as(Role::Teacher, out.clone(), at(9, 54), &p, &venue(), &mut rng);
        assert!(early.state.is_outside());

        let back = step_as(Role::Teacher, out.clone(), at(9, 56), &p, &venue(), &mut rng);
        assert_eq!(back.state.activity, Activity::Moving);
        assert_eq!(back.state.resume_at, None);

        let too_late = step_as(Role::Teacher, out, at(12, 5), &p, &venue(), &mut rng);
        assert!(too_late.state.is_outside());
    }
}

// ── Moving ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod moving {
    use super::*;
    use crate::ActivityEvent;

    fn moving_to_desk(from: GridPos) -> ActivityState {
        let mut s = ActivityState { pos: from, restart: false, ..Default::default() };
        s.head_to(Place::Desk);
        s
    }

    #[test]
    fn plans_then_steps_one_cell_per_tick() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let v = venue();
        let mut rng = AgentRng::new(1, AgentId(0));

        let t = step_student(moving_to_desk(GridPos::new(0, 0)), at(8, 5), &p, &v, &mut rng);
        assert_eq!(t.state.pos, GridPos::new(0, 0), "planning consumes the tick");
        assert_eq!(t.state.path.len(), 20);
        assert_eq!(t.events, vec![ActivityEvent::PathPlanned { to: GridPos::new(10, 10), steps: 20 }]);

        let mut s = t.state;
        let mut last = GridPos::new(0, 0);
        for i in 0..20 {
            s = step_student(s, at(8, 5), &p, &v, &mut rng).state;
            assert_eq!(s.pos.manhattan(last), 1, "step {i}");
            last = s.pos;
        }
        assert_eq!(s.pos, GridPos::new(10, 10));
        assert_eq!(s.activity, Activity::Idle);
        assert_eq!(s.place, Some(Place::Desk));
    }

    #[test]
    fn already_there_goes_idle() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut rng = AgentRng::new(1, AgentId(0));
        let t = step_student(moving_to_desk(GridPos::new(10, 10)), at(8, 5), &p, &venue(), &mut rng);
        assert_eq!(t.state.activity, Activity::Idle);
        assert!(matches!(t.events[0], ActivityEvent::Arrived { .. }));
    }

    #[test]
    fn unreachable_goal_goes_idle_without_moving() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut items = placeables();
        items[2] = Placeable::circle(roles::CHAIR, 10.0, 10.0, true);
        let v = Venue::with_grid(items.clone(), OccupancyGrid::build(&items, 20, 20, SCALE), SCALE);
        let mut rng = AgentRng::new(1, AgentId(0));

        let t = step_student(moving_to_desk(GridPos::new(0, 0)), at(8, 5), &p, &v, &mut rng);
        assert_eq!(t.state.activity, Activity::Idle);
        assert_eq!(t.state.pos, GridPos::new(0, 0));
        assert_eq!(
            t.events,
            vec![ActivityEvent::Unreachable { place: Some(Place::Desk), to: Some(GridPos::new(10, 10)) }]
        );
    }

    #[test]
    fn missing_chair_goes_idle() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut rng = AgentRng::new(1, AgentId(0));
        let t = step_as(
            Role::Student { chair_index: 7 },
            moving_to_desk(GridPos::new(0, 0)),
            at(8, 5),
            &p,
            &venue(),
            &mut rng,
        );
        assert_eq!(t.state.activity, Activity::Idle);
        assert_eq!(t.events, vec![ActivityEvent::Unreachable { place: Some(Place::Desk), to: None }]);
    }

    #[test]
    fn whiteboard_target_is_in_front() {
        let v = venue();
        let mut rng = AgentRng::new(1, AgentId(0));
        let cell = crate::resolve_target(Place::Whiteboard, Role::Teacher, &v, &mut rng);
        assert_eq!(cell, Some(GridPos::new(7, 1)));
        assert_eq!(crate::resolve_target(Place::Desk, Role::Teacher, &v, &mut rng), None);
    }
}

// ── Idle ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod idle {
    use super::*;
    use crate::ActivityEvent;

    const DESK: GridPos = GridPos::new(10, 10);

    #[test]
    fn idle_at_entrance_leaves() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut rng = AgentRng::new(1, AgentId(0));
        let t = step_student(idle_at(Place::Entrance, GridPos::new(1, 1)), at(12, 1), &p, &venue(), &mut rng);
        assert!(t.state.is_outside());
        assert!(t.state.pos.is_outside());
        assert_eq!(t.events, vec![ActivityEvent::LeftVenue]);
    }

    #[test]
    fn leaving_time_heads_to_entrance() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut rng = AgentRng::new(1, AgentId(0));
        let t = step_student(idle_at(Place::Desk, DESK), at(12, 0), &p, &venue(), &mut rng);
        assert_eq!(t.state.activity, Activity::Moving);
        assert_eq!(t.state.place, Some(Place::Entrance));
    }

    #[test]
    fn class_time_returns_to_desk() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut rng = AgentRng::new(1, AgentId(0));
        let mut s = idle_at(Place::Back, GridPos::new(16, 16));
        s.break_eligible = false;
        let t = step_student(s, at(9, 1), &p, &venue(), &mut rng);
        assert!(t.state.break_eligible, "re-armed below the break minute");
        assert_eq!(t.state.place, Some(Place::Desk));
        assert_eq!(t.state.activity, Activity::Moving);
    }

    #[test]
    fn seated_in_class_time_stays() {
        let p = profile(Behaviour::Active, Style::Lazy);
        let mut rng = AgentRng::new(1, AgentId(0));
        let t = step_student(idle_at(Place::Desk, DESK), at(9, 20), &p, &venue(), &mut rng);
        assert_eq!(t.state, idle_at(Place::Desk, DESK));
        assert!(t.events.is_empty());
    }

    #[test]
    fn break_decision_fires_once_per_hour() {
        let p = profile(Behaviour::Active, Style::Lazy);
        let v = venue();
        let mut breaks = 0;
        for seed in 0..400 {
            let mut rng = AgentRng::new(seed, AgentId(0));
            let t = step_student(idle_at(Place::Desk, DESK), at(8, 50), &p, &v, &mut rng);
            assert!(!t.state.break_eligible);
            let scheduled = t.events.iter().find_map(|e| match e {
                ActivityEvent::BreakScheduled { leave_at } => Some(*leave_at),
                _ => None,
            });
            if let Some(leave_at) = scheduled {
                breaks += 1;
                assert!(leave_at >= at(8, 50) && leave_at <= at(8, 55));
            } else {
                assert_eq!(t.state, ActivityState { break_eligible: false, ..idle_at(Place::Desk, DESK) });
            }
            // Same hour again: no second decision.
            let again = step_student(
                ActivityState { desk_delay_end: None, ..t.state },
                at(8, 51),
                &p,
                &v,
                &mut rng,
            );
            assert_eq!(again.state.desk_delay_end, None);
        }
        // Active students take a break with probability 0.8.
        assert!((280..=360).contains(&breaks), "got {breaks}");
    }

    #[test]
    fn desk_delay_expiry_goes_to_back_hotspot() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut rng = AgentRng::new(1, AgentId(0));
        let mut s = idle_at(Place::Desk, DESK);
        s.break_eligible = false;
        s.desk_delay_end = Some(at(8, 52));
        let t = step_student(s, at(8, 52), &p, &venue(), &mut rng);
        assert_eq!(t.state.place, Some(Place::Back));
        assert_eq!(t.state.desk_delay_end, None);
        let end = t.state.back_hotspot_end.unwrap();
        assert!(end >= at(8, 52) && end <= at(9, 0));
    }

    #[test]
    fn back_hotspot_end_returns_to_desk() {
        let p = profile(Behaviour::Quiet, Style::Lazy);
        let mut rng = AgentRng::new(1, AgentId(0));
        let mut s = idle_at(Place::Back, GridPos::new(16, 16));
        s.break_eligible = false;
        s.back_hotspot_end = Some(at(8, 55));

        let before = step_student(s.clone(), at(8, 54), &p, &venue(), &mut rng);
        assert_eq!(before.state.place, Some(Place::Back));

        let after = step_student(s, at(8, 56), &p, &venue(), &mut rng);
        assert_eq!(after.state.place, Some(Place::Desk));
        assert_eq!(after.state.back_hotspot_end, None);
    }

    #[test]
    fn teacher_lesson_place_drawn_once_per_hour() {
        let p = profile(Behaviour::Quiet, Style::Smart);
        let v = venue();
        let mut boards = 0;
        for seed in 0..200 {
            let mut rng = AgentRng::for_teacher(seed, AgentId(0));
            let s = idle_at(Place::TeacherDesk, GridPos::new(5, 18));
            let t = step_as(Role::Teacher, s, at(9, 0), &p, &v, &mut rng);
            assert_eq!(t.state.lesson_hour, Some(9));
            let chosen = t.state.lesson_place.unwrap();
            if chosen == Place::Whiteboard {
                boards += 1;
                assert_eq!(t.state.place, Some(Place::Whiteboard));
                // Arrive, then the choice sticks for the rest of the hour.
                let arrived = ActivityState { activity: Activity::Idle, ..t.state };
                let later = step_as(Role::Teacher, arrived, at(9, 30), &p, &v, &mut rng);
                assert_eq!(later.state.place, Some(Place::Whiteboard));
                assert_eq!(later.state.activity, Activity::Idle);
            } else {
                assert_eq!(t.state.place, Some(Place::TeacherDesk));
            }
        }
        // Smart teachers pick the whiteboard with probability 0.8.
        assert!((130..=190).contains(&boards), "got {boards}");
    }

    #[test]
    fn teacher_break_either_steps_out_or_visits_hotspot() {
        let p = profile(Behaviour::Active, Style::Lazy);
        let v = venue();
        let (mut out, mut back) = (0, 0);
        for seed in 0..300 {
            let mut rng = AgentRng::for_teacher(seed, AgentId(0));
            let t = step_as(Role::Teacher, idle_at(Place::TeacherDesk, GridPos::new(5, 18)), at(10, 50), &p, &v, &mut rng);
            match t.state.place {
                Some(Place::Entrance) => {
                    out += 1;
                    let resume = t.state.resume_at.unwrap();
                    assert!(resume >= at(10, 50) && resume <= at(11, 0));
                }
                Some(Place::Back) => {
                    back += 1;
                    assert!(t.state.back_hotspot_end.is_some());
                }
                _ => assert_eq!(t.state.activity, Activity::Idle),
            }
        }
        assert!(out > 50 && back > 50, "out {out}, back {back}");
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent {
    use cs_core::{EngineConfig, Mask, SimInstant};
    use cs_epidemic::{PandemicStatus, SpreadField};

    use super::*;
    use crate::{spread_footprint, Agent, AgentKind, TickContext};

    const SEED: u64 = 42;

    fn config(grid_density: u32) -> EngineConfig {
        EngineConfig { map_width: 100, map_height: 100, map_density: 1, grid_density, ..Default::default() }
    }

    fn student(mask: Mask) -> Agent {
        let mut p = profile(Behaviour::Quiet, Style::Lazy);
        p.traits.mask = mask;
        Agent::student(p, SEED)
    }

    fn instant(h: u32, m: u32, s: u32) -> SimInstant {
        SimInstant::at(0, TimeOfDay::hms(h, m, s))
    }

    #[test]
    fn roles_from_constructors() {
        let s = student(Mask::NoMask);
        assert_eq!(s.role(), Role::Student { chair_index: 0 });
        assert_eq!(s.kind(), AgentKind::Student);
        let t = Agent::teacher(profile(Behaviour::Quiet, Style::Lazy), SEED);
        assert_eq!(t.kind(), AgentKind::Teacher);
        assert_eq!(s.status(), PandemicStatus::Susceptible);
        assert!(s.position().is_outside());
    }

    #[test]
    fn morning_check_certain_infection() {
        let cfg = config(1);
        let mut a = student(Mask::NoMask);
        let change = a.morning_check(instant(7, 30, 0), 1.0, &cfg.disease).unwrap();
        assert_eq!((change.from, change.to), (PandemicStatus::Susceptible, PandemicStatus::Infected));
        assert_eq!(change.kind, AgentKind::Student);
        assert!(a.health().is_pre_symptomatic());
        // Already infected: nothing more to report.
        assert!(a.morning_check(instant(7, 30, 0), 1.0, &cfg.disease).is_none());
    }

    #[test]
    fn morning_check_zero_probability() {
        let cfg = config(1);
        let mut a = student(Mask::NoMask);
        for day in 0..20 {
            assert!(a.morning_check(SimInstant::at(day, at(7, 30)), 0.0, &cfg.disease).is_none());
        }
        assert_eq!(a.status(), PandemicStatus::Susceptible);
    }

    #[test]
    fn infectious_agent_sheds_under_footprint() {
        let cfg = config(2);
        let v = venue();
        let field = SpreadField::from_config(&cfg).unwrap();
        let mut a = student(Mask::Surgical);
        a.infect(instant(7, 0, 0), &cfg.disease).unwrap();

        let mut deposits = Vec::new();
        let ctx = TickContext::new(instant(8, 0, 0), &cfg, &v, &field, &AStarPathFinder);
        a.tick(&ctx, &mut deposits);
        assert!(deposits.is_empty(), "outside at the start of the spawn tick");
        assert!(!a.state().is_outside());

        let ctx = TickContext::new(instant(8, 0, 5), &cfg, &v, &field, &AStarPathFinder);
        let pos = a.position();
        a.tick(&ctx, &mut deposits);
        assert_eq!(deposits.len(), 4);
        for (d, (row, col)) in deposits.iter().zip(spread_footprint(pos, 2)) {
            assert_eq!((d.row, d.col), (row, col));
            assert!((d.amount - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn saturated_field_infects_susceptible() {
        let cfg = EngineConfig { infection_k: 1.0, ..config(1) };
        let v = venue();
        let mut field = SpreadField::from_config(&cfg).unwrap();
        for r in 0..20 {
            for c in 0..20 {
                field.add_source(r, c, f64::MAX);
            }
        }
        let mut a = student(Mask::NoMask);
        let mut deposits = Vec::new();

        let ctx = TickContext::new(instant(8, 0, 0), &cfg, &v, &field, &AStarPathFinder);
        assert!(a.tick(&ctx, &mut deposits).is_none());

        let ctx = TickContext::new(instant(8, 0, 5), &cfg, &v, &field, &AStarPathFinder);
        let change = a.tick(&ctx, &mut deposits).unwrap();
        assert_eq!(change.to, PandemicStatus::Infected);
        assert_eq!(change.at, instant(8, 0, 5));
    }

    #[test]
    fn clean_field_never_infects() {
        let cfg = EngineConfig { infection_k: 1.0, ..config(1) };
        let v = venue();
        let field = SpreadField::from_config(&cfg).unwrap();
        let mut a = student(Mask::NoMask);
        let mut deposits = Vec::new();
        for s in 0..200 {
            let ctx = TickContext::new(instant(8, 0, 0).plus_secs(s * 5), &cfg, &v, &field, &AStarPathFinder);
            assert!(a.tick(&ctx, &mut deposits).is_none());
        }
        assert!(deposits.is_empty());
    }

    #[test]
    fn quarantined_agent_leaves_and_freezes() {
        let cfg = config(1);
        let v = venue();
        let field = SpreadField::from_config(&cfg).unwrap();
        let mut a = student(Mask::NoMask);
        a.infect(instant(7, 0, 0), &cfg.disease).unwrap();

        // Long after the pre-symptomatic phase: symptoms show during the tick.
        let late = SimInstant::at(60, at(8, 0));
        let mut deposits = Vec::new();
        a.tick(&TickContext::new(late, &cfg, &v, &field, &AStarPathFinder), &mut deposits);
        assert!(a.health().is_symptomatic());
        assert!(!a.state().is_outside());

        let change = a.end_of_day_test(late, &cfg.disease).unwrap();
        assert_eq!((change.from, change.to), (PandemicStatus::Infected, PandemicStatus::Quarantined));
        assert!(a.state().is_outside());
        assert!(a.position().is_outside());

        let frozen = a.state().clone();
        let ctx = TickContext::new(late.plus_secs(5), &cfg, &v, &field, &AStarPathFinder);
        assert!(a.tick(&ctx, &mut deposits).is_none());
        assert_eq!(a.state(), &frozen);
    }

    #[test]
    fn quarantine_expiry_reported_in_morning() {
        let cfg = config(1);
        let mut a = student(Mask::NoMask);
        a.infect(instant(7, 0, 0), &cfg.disease).unwrap();
        let late = SimInstant::at(60, at(13, 0));
        a.end_of_day_test(late, &cfg.disease);
        // Symptom onset has not been observed yet, so no quarantine.
        assert_eq!(a.status(), PandemicStatus::Infected);

        let mut deposits = Vec::new();
        let v = venue();
        let field = SpreadField::from_config(&cfg).unwrap();
        a.tick(&TickContext::new(late, &cfg, &v, &field, &AStarPathFinder), &mut deposits);
        a.end_of_day_test(late, &cfg.disease).unwrap();

        assert!(a.morning_check(SimInstant::at(61, at(7, 30)), 0.0, &cfg.disease).is_none());
        let change = a.morning_check(SimInstant::at(80, at(7, 30)), 0.0, &cfg.disease).unwrap();
        assert_eq!((change.from, change.to), (PandemicStatus::Quarantined, PandemicStatus::Recovered));
    }

    #[test]
    fn day_start_resets_activity() {
        let cfg = config(1);
        let v = venue();
        let field = SpreadField::from_config(&cfg).unwrap();
        let mut a = student(Mask::NoMask);
        let mut deposits = Vec::new();
        a.tick(&TickContext::new(instant(8, 0, 0), &cfg, &v, &field, &AStarPathFinder), &mut deposits);
        assert_eq!(a.activity(), Activity::Moving);

        a.on_day_start();
        assert_eq!(a.state(), &ActivityState::default());
    }

    #[test]
    fn footprint_blocks() {
        let cells: Vec<_> = spread_footprint(GridPos::new(3, 2), 2).collect();
        assert_eq!(cells, vec![(4, 6), (4, 7), (5, 6), (5, 7)]);
        assert_eq!(spread_footprint(GridPos::new(3, 2), 1).count(), 1);
    }
}
