//! Unit tests for cs-schedule.

use cs_core::TimeOfDay;

use crate::Timer;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 08:00:00 → 08:00:20 in 5 s steps: four ticks per school day.
fn short_day_timer(num_weeks: u32) -> Timer {
    Timer::new(TimeOfDay::hms(8, 0, 0), TimeOfDay::hms(8, 0, 20), 5, num_weeks).unwrap()
}

/// One simulation step as the orchestrator performs it.
fn step(t: &mut Timer) -> bool {
    t.tick();
    t.check_finished()
}

// ── Timer ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timer {
    use cs_core::{SimInstant, TimeOfDay, Weekday};

    use super::*;

    #[test]
    fn starts_monday_week_one() {
        let t = short_day_timer(1);
        assert_eq!(t.day_of_week(), Weekday::Monday);
        assert_eq!(t.current_week(), 1);
        assert_eq!(t.time_of_day(), TimeOfDay::hms(8, 0, 0));
        assert!(t.is_day_start());
        assert!(!t.is_finished());
        assert_eq!(t.now(), SimInstant::at(0, TimeOfDay::hms(8, 0, 0)));
    }

    #[test]
    fn rolls_over_at_daily_end() {
        let mut t = short_day_timer(1);
        for _ in 0..3 {
            assert!(!step(&mut t));
            assert_eq!(t.day_of_week(), Weekday::Monday);
        }
        assert!(t.is_last_tick_of_day());
        assert!(!step(&mut t));
        assert_eq!(t.day_of_week(), Weekday::Tuesday);
        assert_eq!(t.time_of_day(), TimeOfDay::hms(8, 0, 0));
        assert_eq!(t.current_day(), 1);
    }

    #[test]
    fn one_week_takes_twenty_steps() {
        let mut t = short_day_timer(1);
        let mut steps = 0;
        while !step(&mut t) {
            steps += 1;
            assert!(steps < 100, "timer never finished");
        }
        assert_eq!(steps + 1, 20);
        assert!(t.is_finished());
        assert!(t.check_finished(), "stays finished");
    }

    #[test]
    fn weekends_are_skipped() {
        let mut t = short_day_timer(2);
        let mut seen = vec![(t.day_of_week(), t.current_day(), t.current_week())];
        while !step(&mut t) {
            let entry = (t.day_of_week(), t.current_day(), t.current_week());
            if seen.last() != Some(&entry) {
                seen.push(entry);
            }
        }
        let days: Vec<u32> = seen.iter().map(|e| e.1).collect();
        assert_eq!(days, vec![0, 1, 2, 3, 4, 7, 8, 9, 10, 11]);
        assert_eq!(seen[5], (Weekday::Monday, 7, 2));
        assert!(seen.iter().all(|e| Weekday::ALL.contains(&e.0)));
    }

    #[test]
    fn time_is_monotonic_within_day() {
        let mut t = short_day_timer(1);
        let mut last = t.time_of_day();
        let mut day = t.current_day();
        while !step(&mut t) {
            if t.current_day() == day {
                assert!(t.time_of_day() >= last);
            } else {
                assert_eq!(t.time_of_day(), t.daily_start());
                day = t.current_day();
            }
            last = t.time_of_day();
        }
    }

    #[test]
    fn display_strings() {
        let mut t = short_day_timer(1);
        t.tick();
        assert_eq!(t.week_str(), "Week 1");
        assert_eq!(t.day_str(), "Monday");
        assert_eq!(t.time_str(), "08:00:05");
    }

    #[test]
    fn rejects_bad_parameters() {
        let a = TimeOfDay::hms(9, 0, 0);
        let b = TimeOfDay::hms(8, 0, 0);
        assert!(Timer::new(a, b, 5, 1).is_err());
        assert!(Timer::new(b, a, 0, 1).is_err());
        assert!(Timer::new(b, a, 5, 0).is_err());
    }

    #[test]
    fn step_longer_than_day_rejected() {
        let start = TimeOfDay::hms(8, 0, 0);
        let end = TimeOfDay::hms(8, 0, 20);
        assert!(Timer::new(start, end, 21, 1).is_err());
        assert!(Timer::new(start, end, u32::MAX, 1).is_err());
    }

    #[test]
    fn whole_day_step_is_one_tick() {
        let mut t = Timer::new(TimeOfDay::hms(8, 0, 0), TimeOfDay::hms(8, 0, 20), 20, 1).unwrap();
        assert!(t.is_day_start());
        assert!(t.is_last_tick_of_day());
        assert!(!step(&mut t));
        assert_eq!(t.day_of_week(), Weekday::Tuesday);
    }

    #[test]
    fn last_tick_query_near_midnight() {
        let mut t = Timer::new(TimeOfDay::hms(23, 59, 0), TimeOfDay::hms(23, 59, 59), 59, 1).unwrap();
        assert!(t.is_last_tick_of_day());
        t.tick();
        assert!(t.is_last_tick_of_day());
    }

    #[test]
    fn from_default_config() {
        let t = Timer::from_config(&cs_core::EngineConfig::default()).unwrap();
        assert_eq!(t.time_str(), "07:30:00");
        assert_eq!(t.step_seconds(), 5);
        assert_eq!(t.num_weeks(), 2);
    }
}

// ── AgentSchedule ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent_schedule {
    use cs_core::TimeOfDay;

    use crate::{AgentSchedule, ScheduleError};

    #[test]
    fn parses_roster_times() {
        let s = AgentSchedule::parse("08:00:00", "13:30:00").unwrap();
        assert_eq!(s.arrival, TimeOfDay::hms(8, 0, 0));
        assert_eq!(s.leaving, TimeOfDay::hms(13, 30, 0));
        assert!(!s.has_arrived(TimeOfDay::hms(7, 59, 59)));
        assert!(s.has_arrived(TimeOfDay::hms(8, 0, 0)));
        assert!(s.should_leave(TimeOfDay::hms(13, 30, 0)));
    }

    #[test]
    fn bad_time_is_parse_error() {
        assert!(matches!(
            AgentSchedule::parse("8 o'clock", "13:30:00"),
            Err(ScheduleError::Parse(_))
        ));
    }

    #[test]
    fn leaving_before_arrival_is_rejected() {
        assert!(matches!(
            AgentSchedule::parse("12:00:00", "08:00:00"),
            Err(ScheduleError::Config(_))
        ));
    }
}
