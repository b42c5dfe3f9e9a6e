//! Simulation time model.
//!
//! # Design
//!
//! Time is integer seconds throughout, so all schedule arithmetic is exact
//! (no floating-point drift) and comparisons are O(1):
//!
//! - [`TimeOfDay`]: seconds since midnight, used for schedules, the daily
//!   window, and break minutes.
//! - [`SimInstant`]: seconds since Monday 00:00 of week 1.  Weekends are
//!   counted, so `SimInstant` is a true calendar timestamp and the 14-day
//!   quarantine spans weekends correctly.
//! - [`Weekday`]: the five school days; the timer never lands on Saturday or
//!   Sunday.
//!
//! No datetime library is needed: the simulation only ever starts on a
//! Monday and only needs day/week arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Seconds in one calendar day.
pub const SECS_PER_DAY: u64 = 86_400;

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// Wall-clock time within a day, stored as seconds since midnight.
///
/// With the `serde` feature it (de)serializes as an `"HH:MM:SS"` string, so
/// engine files can keep writing `start_time: "07:30"`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct TimeOfDay(pub u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from hour/minute/second components.
    #[inline]
    pub fn hms(hour: u32, minute: u32, second: u32) -> Self {
        TimeOfDay(hour * 3_600 + minute * 60 + second)
    }

    #[inline]
    pub fn secs(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.0 / 3_600
    }

    /// Minute within the current hour (0..=59).
    #[inline]
    pub fn minute(self) -> u32 {
        (self.0 % 3_600) / 60
    }

    #[inline]
    pub fn second(self) -> u32 {
        self.0 % 60
    }

    /// `self + secs`, saturating at the last second of the day.
    #[inline]
    pub fn plus_secs(self, secs: u32) -> TimeOfDay {
        TimeOfDay(self.0.saturating_add(secs).min(SECS_PER_DAY as u32 - 1))
    }

    /// `self + minutes` (fractional minutes rounded to the nearest second).
    pub fn plus_minutes(self, minutes: f64) -> TimeOfDay {
        let secs = (minutes.max(0.0) * 60.0).round() as u32;
        self.plus_secs(secs)
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    /// Accepts `HH:MM` and `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CoreError::Parse(format!("invalid time {s:?}: expected HH:MM or HH:MM:SS"));

        let parts: Vec<&str> = s.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(bad());
        }
        let mut fields = [0u32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| bad())?;
        }
        let [h, m, sec] = fields;
        if h > 23 || m > 59 || sec > 59 {
            return Err(bad());
        }
        Ok(TimeOfDay::hms(h, m, sec))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> String {
        t.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

// ── SimInstant ────────────────────────────────────────────────────────────────

/// Absolute simulation timestamp: seconds since Monday 00:00 of week 1.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimInstant(pub u64);

impl SimInstant {
    pub const ZERO: SimInstant = SimInstant(0);

    /// Combine a calendar-day index (weekends included) with a time of day.
    #[inline]
    pub fn at(day: u32, time: TimeOfDay) -> Self {
        SimInstant(day as u64 * SECS_PER_DAY + time.0 as u64)
    }

    /// The instant `days` (possibly fractional) later, rounded to the second.
    pub fn plus_days(self, days: f64) -> SimInstant {
        let secs = (days.max(0.0) * SECS_PER_DAY as f64).round() as u64;
        SimInstant(self.0 + secs)
    }

    #[inline]
    pub fn plus_secs(self, secs: u64) -> SimInstant {
        SimInstant(self.0 + secs)
    }

    /// Calendar-day index since the start of the simulation.
    #[inline]
    pub fn day(self) -> u32 {
        (self.0 / SECS_PER_DAY) as u32
    }

    #[inline]
    pub fn time_of_day(self) -> TimeOfDay {
        TimeOfDay((self.0 % SECS_PER_DAY) as u32)
    }
}

impl fmt::Display for SimInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} {}", self.day(), self.time_of_day())
    }
}

// ── Weekday ───────────────────────────────────────────────────────────────────

/// A school day.  Saturday and Sunday are never simulated.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// 0 = Monday … 4 = Friday.
    #[inline]
    pub fn index(self) -> u32 {
        self as u32
    }

    /// The next school day and the number of calendar days to get there
    /// (3 from Friday, skipping the weekend).
    pub fn next_school_day(self) -> (Weekday, u32) {
        match self {
            Weekday::Monday => (Weekday::Tuesday, 1),
            Weekday::Tuesday => (Weekday::Wednesday, 1),
            Weekday::Wednesday => (Weekday::Thursday, 1),
            Weekday::Thursday => (Weekday::Friday, 1),
            Weekday::Friday => (Weekday::Monday, 3),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
