//! Calendar-aware simulation clock.
//!
//! The timer walks `daily_start → daily_end` in fixed steps, then jumps to the
//! next school day.  Saturday and Sunday are never visited: after Friday the
//! calendar-day counter advances by three and the week counter by one.
//!
//! Time is kept as a calendar-day index plus a [`TimeOfDay`], so
//! [`Timer::now`] is a real timestamp on which multi-day durations
//! (quarantine) span weekends correctly.

use cs_core::{EngineConfig, SimInstant, TimeOfDay, Weekday};

use crate::{ScheduleError, ScheduleResult};

/// The simulation clock.
///
/// Call [`tick`](Timer::tick) then [`check_finished`](Timer::check_finished)
/// exactly once per simulation step.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timer {
    daily_start:  TimeOfDay,
    daily_end:    TimeOfDay,
    step_seconds: u32,
    num_weeks:    u32,

    /// Calendar days since the first Monday (weekends counted).
    current_day:  u32,
    day_of_week:  Weekday,
    /// 1-based.
    current_week: u32,
    time_of_day:  TimeOfDay,
    ticks:        u64,
    finished:     bool,
}

impl Timer {
    /// A timer positioned at `daily_start` on Monday of week 1.
    pub fn new(
        daily_start: TimeOfDay,
        daily_end: TimeOfDay,
        step_seconds: u32,
        num_weeks: u32,
    ) -> ScheduleResult<Self> {
        if daily_start >= daily_end {
            return Err(ScheduleError::Config(format!(
                "daily start {daily_start} must be before daily end {daily_end}"
            )));
        }
        if step_seconds == 0 {
            return Err(ScheduleError::Config("step_seconds must be > 0".into()));
        }
        let window = daily_end.secs() - daily_start.secs();
        if step_seconds > window {
            return Err(ScheduleError::Config(format!(
                "step_seconds {step_seconds} exceeds the {window} s daily window"
            )));
        }
        if num_weeks == 0 {
            return Err(ScheduleError::Config("num_weeks must be > 0".into()));
        }
        Ok(Self {
            daily_start,
            daily_end,
            step_seconds,
            num_weeks,
            current_day: 0,
            day_of_week: Weekday::Monday,
            current_week: 1,
            time_of_day: daily_start,
            ticks: 0,
            finished: false,
        })
    }

    pub fn from_config(config: &EngineConfig) -> ScheduleResult<Self> {
        Self::new(config.start_time, config.end_time, config.time_step_seconds, config.num_weeks)
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the time of day by one step.
    pub fn tick(&mut self) {
        if self.finished {
            return;
        }
        self.time_of_day = self.time_of_day.plus_secs(self.step_seconds);
        self.ticks += 1;
    }

    /// Roll over to the next school day once today's end is reached.
    ///
    /// Returns `true` once the week counter exceeds `num_weeks`; the clock
    /// then stays where it is.
    pub fn check_finished(&mut self) -> bool {
        if self.finished {
            return true;
        }
        if self.time_of_day < self.daily_end {
            return false;
        }

        let (next, days) = self.day_of_week.next_school_day();
        if next == Weekday::Monday {
            self.current_week += 1;
            if self.current_week > self.num_weeks {
                self.finished = true;
                return true;
            }
        }
        self.day_of_week = next;
        self.current_day += days;
        self.time_of_day = self.daily_start;
        false
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Absolute timestamp of the current tick.
    #[inline]
    pub fn now(&self) -> SimInstant {
        SimInstant::at(self.current_day, self.time_of_day)
    }

    #[inline]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    #[inline]
    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    #[inline]
    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }

    #[inline]
    pub fn current_week(&self) -> u32 {
        self.current_week
    }

    /// Ticks processed since construction.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn daily_start(&self) -> TimeOfDay {
        self.daily_start
    }

    #[inline]
    pub fn daily_end(&self) -> TimeOfDay {
        self.daily_end
    }

    #[inline]
    pub fn step_seconds(&self) -> u32 {
        self.step_seconds
    }

    #[inline]
    pub fn num_weeks(&self) -> u32 {
        self.num_weeks
    }

    /// `true` on the first tick of a school day.
    #[inline]
    pub fn is_day_start(&self) -> bool {
        self.time_of_day == self.daily_start
    }

    /// `true` on the last tick before the day rolls over.
    #[inline]
    pub fn is_last_tick_of_day(&self) -> bool {
        self.time_of_day.secs().saturating_add(self.step_seconds) >= self.daily_end.secs()
    }

    // ── Display strings ───────────────────────────────────────────────────

    pub fn week_str(&self) -> String {
        format!("Week {}", self.current_week)
    }

    pub fn day_str(&self) -> &'static str {
        self.day_of_week.name()
    }

    /// `HH:MM:SS`.
    pub fn time_str(&self) -> String {
        self.time_of_day.to_string()
    }
}
